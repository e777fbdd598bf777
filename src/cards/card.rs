//! Cards - the tracked deck entries.
//!
//! A `Card` combines the immutable data from the static source (`card_type`,
//! `title`, `description`) with the one piece of mutable state this crate
//! tracks: the current [`Zone`]. Identity is the position in the source's
//! ordered card list, captured as a [`CardId`] at load time.

use serde::{Deserialize, Serialize};

use super::zone::Zone;

/// Unique identifier for a card within a collection.
///
/// Assigned from source-document position at load and stable for the life
/// of the collection, including across persistence round-trips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card type. Fixed at data-load time, never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Court,
    Leader,
    Lore,
}

impl CardType {
    /// All card types, in display order (court, leader, lore).
    pub const ALL: [CardType; 3] = [CardType::Court, CardType::Leader, CardType::Lore];

    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardType::Court => "court",
            CardType::Leader => "leader",
            CardType::Lore => "lore",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A tracked card.
///
/// Everything but `zone` is immutable after load. The zone field is named
/// `player` in the serialized form, matching the static source format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within the collection.
    pub id: CardId,

    /// Card type (immutable after load).
    #[serde(rename = "type")]
    pub card_type: CardType,

    /// Display title.
    pub title: String,

    /// Free text; may contain keyword phrases a rendering layer highlights.
    pub description: String,

    /// Current zone assignment.
    #[serde(rename = "player", default)]
    pub zone: Zone,
}

impl Card {
    /// Create a card in the initial `Zone::None` state.
    #[must_use]
    pub fn new(
        id: CardId,
        card_type: CardType,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            card_type,
            title: title.into(),
            description: description.into(),
            zone: Zone::None,
        }
    }

    /// Case-insensitive substring match over title and description.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}
