//! Session: the application-state object behind a view layer.
//!
//! The original companion kept its current tab, filter and search text in
//! module-level globals next to a shared collection. The session replaces
//! that with one explicit owner: store, deal engine, storage handle and the
//! current view filter live here, and the whole view-layer contract is
//! methods on this type.
//!
//! The contract is pull-based: the session never pushes change
//! notifications, so the view re-queries `visible_cards` after every
//! mutation.

use crate::cards::{Card, CardId, CardType, Zone};
use crate::deal::{DealEngine, DealError, DealSummary, PlayerCount};
use crate::source::SourceError;
use crate::store::{CardStore, StorageSlot, StoreError};

/// The view's current query: active type tab, optional zone filter,
/// optional search text. Zone and text compose linearly after the type.
#[derive(Clone, Debug)]
pub struct ViewFilter {
    pub card_type: CardType,
    pub zone: Option<Zone>,
    pub search: Option<String>,
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self {
            card_type: CardType::Court,
            zone: None,
            search: None,
        }
    }
}

/// One running companion: collection, deal engine, storage and view state.
///
/// ## Example
///
/// ```
/// use courtier::cards::{CardType, Zone};
/// use courtier::session::Session;
/// use courtier::store::MemoryStorage;
///
/// let source = r#"{"cards":[
///     {"type":"court","title":"Herald","description":"Announce."},
///     {"type":"leader","title":"Exile","description":"Return."}
/// ]}"#;
///
/// let (mut session, load_error) = Session::start(source, MemoryStorage::new(), Some(42));
/// assert!(load_error.is_none());
///
/// // Court tab is active by default
/// assert_eq!(session.visible_cards()[0].title, "Herald");
///
/// session.show_type(CardType::Leader);
/// assert_eq!(session.visible_cards()[0].title, "Exile");
/// ```
pub struct Session<S: StorageSlot> {
    store: CardStore,
    engine: DealEngine,
    storage: S,
    filter: ViewFilter,
}

impl<S: StorageSlot> Session<S> {
    /// Start a session: load-or-restore the collection, then wait for view
    /// calls.
    ///
    /// A malformed static source still yields a running session over an
    /// empty collection; the error rides along for the view to display.
    /// Pass a seed for reproducible deals, `None` for entropy seeding.
    pub fn start(source_json: &str, storage: S, seed: Option<u64>) -> (Self, Option<SourceError>) {
        let (store, load_error) = CardStore::load_or_restore(source_json, &storage);
        let engine = match seed {
            Some(seed) => DealEngine::new(seed),
            None => DealEngine::from_entropy(),
        };

        (
            Self {
                store,
                engine,
                storage,
                filter: ViewFilter::default(),
            },
            load_error,
        )
    }

    /// The cards the view should render right now, in collection order.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<&Card> {
        self.store.select(
            self.filter.card_type,
            self.filter.zone,
            self.filter.search.as_deref(),
        )
    }

    /// Switch the active type tab. Clears the zone filter, keeps the search
    /// text, matching the original navigation behavior.
    pub fn show_type(&mut self, card_type: CardType) {
        self.filter.card_type = card_type;
        self.filter.zone = None;
    }

    /// Restrict the visible cards to one zone, or clear the restriction.
    pub fn filter_zone(&mut self, zone: Option<Zone>) {
        self.filter.zone = zone;
    }

    /// Set or clear the search text. Empty strings clear.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.filter.search = if text.is_empty() { None } else { Some(text) };
    }

    /// The current view filter.
    #[must_use]
    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    /// Assign a card to a zone (tag buttons on a card).
    pub fn assign(&mut self, id: CardId, zone: Zone) -> Result<(), StoreError> {
        self.store.set_zone(id, zone, &mut self.storage)
    }

    /// Discard a card (the X button).
    pub fn discard(&mut self, id: CardId) -> Result<(), StoreError> {
        self.store.set_zone(id, Zone::Discarded, &mut self.storage)
    }

    /// Start a fresh game: full reset, then deal for the player count.
    pub fn new_game(&mut self, players: PlayerCount) -> DealSummary {
        self.store.reset_all(&mut self.storage);
        self.engine
            .deal(&mut self.store, players, &mut self.storage)
    }

    /// Draw one more court card into the court row.
    pub fn draw_court_card(&mut self) -> Result<CardId, DealError> {
        self.engine
            .draw_court_card(&mut self.store, &mut self.storage)
    }

    /// Return discarded cards to the available pool.
    pub fn reinstate_discarded(&mut self) {
        self.store.reinstate_discarded(&mut self.storage);
    }

    /// Revert every card to unassigned and erase the persisted snapshot.
    pub fn reset_all(&mut self) {
        self.store.reset_all(&mut self.storage);
    }

    /// Read access to the collection for queries outside the view filter.
    #[must_use]
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Give the storage back, consuming the session.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
