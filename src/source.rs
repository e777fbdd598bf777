//! Static source document parsing.
//!
//! The deck ships as a JSON document with a `cards` array. Each record
//! carries at least `type`, `title` and `description`; `player` is optional
//! and defaults to unassigned. Card IDs are assigned from array position.
//!
//! Parsing is strict about the zone/type partition: a record whose `player`
//! value is illegal for its `type` fails the whole document, so an invalid
//! pairing can never enter a collection.

use serde::Deserialize;
use thiserror::Error;

use crate::cards::{Card, CardId, CardType, Zone};

/// Errors from parsing a static source document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("malformed card source: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("card {index} ({title:?}): zone \"{zone}\" is not legal for {card_type} cards")]
    IllegalZone {
        index: usize,
        title: String,
        card_type: CardType,
        zone: Zone,
    },
}

#[derive(Debug, Deserialize)]
struct SourceDocument {
    cards: Vec<SourceRecord>,
}

#[derive(Debug, Deserialize)]
struct SourceRecord {
    #[serde(rename = "type")]
    card_type: CardType,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "player", default)]
    zone: Zone,
}

/// Parse a static source document into an ordered card list.
///
/// IDs are assigned from array position. Order is preserved.
pub fn parse_source(json: &str) -> Result<Vec<Card>, SourceError> {
    let doc: SourceDocument = serde_json::from_str(json)?;

    let mut cards = Vec::with_capacity(doc.cards.len());
    for (index, record) in doc.cards.into_iter().enumerate() {
        if !record.zone.is_legal_for(record.card_type) {
            return Err(SourceError::IllegalZone {
                index,
                title: record.title,
                card_type: record.card_type,
                zone: record.zone,
            });
        }
        cards.push(Card {
            id: CardId::new(index as u32),
            card_type: record.card_type,
            title: record.title,
            description: record.description,
            zone: record.zone,
        });
    }
    Ok(cards)
}
