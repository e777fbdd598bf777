//! Versioned persistence snapshots.
//!
//! A snapshot is the full card collection plus an explicit schema version.
//! Restore requires an exact version match and re-checks the zone/type
//! partition, so a stale or hand-edited blob is treated as absent rather
//! than silently misinterpreted.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of a full card collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version; restore requires an exact match.
    pub version: u32,

    /// The full collection, in authoritative order.
    pub cards: Vec<Card>,
}

impl Snapshot {
    /// Capture the current collection.
    #[must_use]
    pub fn capture(cards: &[Card]) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            cards: cards.to_vec(),
        }
    }

    /// Serialize to the storage wire form.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Serialization of plain structs with string/enum fields cannot fail
        serde_json::to_string(self).expect("snapshot serialization")
    }

    /// Restore a collection from the storage wire form.
    ///
    /// Returns `None` for malformed JSON, a version mismatch, or any card
    /// whose zone is illegal for its type. Callers fall back to the static
    /// source in every `None` case.
    #[must_use]
    pub fn restore(json: &str) -> Option<Vec<Card>> {
        let snapshot: Snapshot = match serde_json::from_str(json) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!("ignoring malformed deck snapshot: {err}");
                return None;
            }
        };

        if snapshot.version != SNAPSHOT_VERSION {
            log::warn!(
                "ignoring deck snapshot with schema version {} (expected {})",
                snapshot.version,
                SNAPSHOT_VERSION
            );
            return None;
        }

        for card in &snapshot.cards {
            if !card.zone.is_legal_for(card.card_type) {
                log::warn!(
                    "ignoring deck snapshot: {} holds zone \"{}\" illegal for {} cards",
                    card.id,
                    card.zone,
                    card.card_type
                );
                return None;
            }
        }

        Some(snapshot.cards)
    }
}
