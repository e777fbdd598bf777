//! Card store: the authoritative collection and its persistence.
//!
//! The `CardStore` owns the ordered card list. All mutation goes through
//! it, every mutation persists the full collection write-through, and the
//! zone/type partition is enforced at the `set_zone` boundary.
//!
//! ## Key Types
//!
//! - `CardStore`: Collection owner with query and mutation operations
//! - `StorageSlot`: Key-value persistence seam (`MemoryStorage` built in)
//! - `Snapshot`: Versioned serialized form of the collection

pub mod snapshot;
pub mod storage;

pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
pub use storage::{MemoryStorage, StorageSlot, DECK_KEY};

use thiserror::Error;

use crate::cards::{Card, CardId, CardType, Zone};
use crate::source::{parse_source, SourceError};

/// Errors from card store mutations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown card id {0}")]
    UnknownCard(CardId),

    #[error("zone \"{zone}\" is not legal for {card_type} cards")]
    IllegalZone { card_type: CardType, zone: Zone },
}

/// Owner of the authoritative card collection.
///
/// Queries return cards in original collection order. Mutations validate,
/// apply in place, and persist the whole collection before returning. The
/// store never pushes change notifications; callers re-query after mutating.
///
/// ## Example
///
/// ```
/// use courtier::cards::{CardType, Zone};
/// use courtier::store::{CardStore, MemoryStorage};
///
/// let source = r#"{"cards":[
///     {"type":"court","title":"Herald","description":"Announce."},
///     {"type":"leader","title":"Exile","description":"Return."}
/// ]}"#;
///
/// let mut storage = MemoryStorage::new();
/// let (mut store, load_error) = CardStore::load_or_restore(source, &storage);
/// assert!(load_error.is_none());
///
/// let herald = store.select(CardType::Court, None, None)[0].id;
/// store.set_zone(herald, Zone::Red, &mut storage).unwrap();
///
/// assert_eq!(store.select(CardType::Court, Some(Zone::Red), None).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a static source document into a fresh store.
    pub fn from_source(json: &str) -> Result<Self, SourceError> {
        Ok(Self {
            cards: parse_source(json)?,
        })
    }

    /// Load the collection, preferring a persisted snapshot.
    ///
    /// A present, well-formed, version-matching snapshot wins wholesale over
    /// the static source (shallow merge, no reconciliation). A malformed or
    /// mismatched snapshot is treated as absent. A malformed static source
    /// yields an empty store plus the surfaced error; initialization never
    /// fails outright.
    pub fn load_or_restore<S: StorageSlot>(json: &str, storage: &S) -> (Self, Option<SourceError>) {
        if let Some(cards) = storage.read(DECK_KEY).and_then(|blob| Snapshot::restore(&blob)) {
            log::debug!("restored {} cards from persisted snapshot", cards.len());
            return (Self { cards }, None);
        }

        match Self::from_source(json) {
            Ok(store) => (store, None),
            Err(err) => (Self::new(), Some(err)),
        }
    }

    /// Number of cards in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the full collection in order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Query the collection: type, then optional zone, then optional text.
    ///
    /// Filters compose linearly. The text filter is a case-insensitive
    /// substring match over title and description. Original collection
    /// order is preserved; nothing is re-sorted.
    #[must_use]
    pub fn select(
        &self,
        card_type: CardType,
        zone: Option<Zone>,
        text: Option<&str>,
    ) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|c| c.card_type == card_type)
            .filter(|c| zone.map_or(true, |z| c.zone == z))
            .filter(|c| text.map_or(true, |t| c.matches_text(t)))
            .collect()
    }

    /// Assign a card to a zone.
    ///
    /// Rejects zones outside the legal vocabulary for the card's type with
    /// no mutation. On success the change is persisted before returning.
    pub fn set_zone<S: StorageSlot>(
        &mut self,
        id: CardId,
        zone: Zone,
        storage: &mut S,
    ) -> Result<(), StoreError> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::UnknownCard(id))?;

        if !zone.is_legal_for(card.card_type) {
            return Err(StoreError::IllegalZone {
                card_type: card.card_type,
                zone,
            });
        }

        card.zone = zone;
        self.persist(storage);
        Ok(())
    }

    /// Revert every card to `Zone::None` and erase the persisted snapshot.
    pub fn reset_all<S: StorageSlot>(&mut self, storage: &mut S) {
        for card in &mut self.cards {
            card.zone = Zone::None;
        }
        storage.erase(DECK_KEY);
        log::debug!("reset all {} cards, snapshot erased", self.cards.len());
    }

    /// Return every discarded card to `Zone::None`, leaving other
    /// assignments untouched.
    pub fn reinstate_discarded<S: StorageSlot>(&mut self, storage: &mut S) {
        let mut reinstated = 0usize;
        for card in &mut self.cards {
            if card.zone == Zone::Discarded {
                card.zone = Zone::None;
                reinstated += 1;
            }
        }
        self.persist(storage);
        log::debug!("reinstated {reinstated} discarded cards");
    }

    /// Write the full collection to storage. Write-through, no batching.
    fn persist<S: StorageSlot>(&self, storage: &mut S) {
        storage.write(DECK_KEY, &Snapshot::capture(&self.cards).to_json());
    }
}
