//! Zones and the per-type legality partition.
//!
//! A card is always in exactly one zone. The zone vocabulary is
//! partitioned by card type:
//! - Court cards may sit in the shared court row, never the draft pile.
//! - Leader and lore cards may sit in the draft pile, never the court row.
//! - Player colors and `Discarded` are shared by every type.
//!
//! `Zone::is_legal_for` is the single source of truth for that partition;
//! the store, the source parser and the snapshot restore all go through it.

use serde::{Deserialize, Serialize};

use super::card::CardType;

/// A card's current assignment bucket.
///
/// `None` is the initial/available state. `Discarded` is terminal until a
/// reset. Serialized lowercase to match the static source format, where the
/// field is named `player`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Unassigned and available for a deal.
    #[default]
    None,
    /// The shared court row (court cards only).
    Court,
    /// The draft pile (leader and lore cards only).
    Draft,
    Red,
    Blue,
    Gold,
    White,
    /// Out of the game until reinstated or reset.
    Discarded,
}

impl Zone {
    /// All zones a card of the given type may legally hold.
    #[must_use]
    pub const fn vocabulary(card_type: CardType) -> &'static [Zone] {
        match card_type {
            CardType::Court => &[
                Zone::None,
                Zone::Court,
                Zone::Red,
                Zone::Blue,
                Zone::Gold,
                Zone::White,
                Zone::Discarded,
            ],
            CardType::Leader | CardType::Lore => &[
                Zone::None,
                Zone::Draft,
                Zone::Red,
                Zone::Blue,
                Zone::Gold,
                Zone::White,
                Zone::Discarded,
            ],
        }
    }

    /// Check whether this zone is legal for a card of the given type.
    #[must_use]
    pub const fn is_legal_for(self, card_type: CardType) -> bool {
        match self {
            Zone::Court => matches!(card_type, CardType::Court),
            Zone::Draft => matches!(card_type, CardType::Leader | CardType::Lore),
            _ => true,
        }
    }

    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Zone::None => "none",
            Zone::Court => "court",
            Zone::Draft => "draft",
            Zone::Red => "red",
            Zone::Blue => "blue",
            Zone::Gold => "gold",
            Zone::White => "white",
            Zone::Discarded => "discarded",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
