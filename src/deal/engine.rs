//! Deal engine: player-count tables and randomized zone assignment.
//!
//! The engine is a pure consumer of the card store's query and assignment
//! primitives: it selects the unassigned pool per card type, draws an
//! unbiased subset, and assigns through `set_zone`. It never touches the
//! collection directly.

use thiserror::Error;

use super::rng::DealRng;
use crate::cards::{CardId, CardType, Zone};
use crate::store::{CardStore, StorageSlot};

/// Errors from deal operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DealError {
    /// No court cards left in the unassigned pool. Distinct from a
    /// successful draw so the caller can show a "nothing available" notice.
    #[error("no court cards available to draw")]
    CourtPoolEmpty,
}

/// Supported player counts for a deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerCount {
    Two,
    Three,
    Four,
}

impl PlayerCount {
    /// Parse a raw count; only 2, 3 and 4 player games are supported.
    #[must_use]
    pub const fn from_count(players: u8) -> Option<Self> {
        match players {
            2 => Some(PlayerCount::Two),
            3 => Some(PlayerCount::Three),
            4 => Some(PlayerCount::Four),
            _ => None,
        }
    }

    /// The canonical per-type deal counts for this player count.
    #[must_use]
    pub const fn counts(self) -> DealCounts {
        match self {
            PlayerCount::Two => DealCounts { court: 3, leader: 3, lore: 3 },
            PlayerCount::Three => DealCounts { court: 4, leader: 4, lore: 4 },
            PlayerCount::Four => DealCounts { court: 4, leader: 5, lore: 5 },
        }
    }

    /// Raw player count.
    #[must_use]
    pub const fn raw(self) -> u8 {
        match self {
            PlayerCount::Two => 2,
            PlayerCount::Three => 3,
            PlayerCount::Four => 4,
        }
    }
}

/// How many cards of each type a deal requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DealCounts {
    pub court: usize,
    pub leader: usize,
    pub lore: usize,
}

/// How many cards a deal actually assigned, after saturation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DealSummary {
    pub court: usize,
    pub leader: usize,
    pub lore: usize,
}

impl DealSummary {
    /// Total cards assigned across all types.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.court + self.leader + self.lore
    }
}

/// Each card type's deal target: court cards to the court row, leader and
/// lore cards to the draft pile. Every pairing here is legal by construction.
const DEAL_TARGETS: [(CardType, Zone); 3] = [
    (CardType::Court, Zone::Court),
    (CardType::Leader, Zone::Draft),
    (CardType::Lore, Zone::Draft),
];

/// Randomized deal operations over a card store.
///
/// ## Example
///
/// ```
/// use courtier::deal::{DealEngine, PlayerCount};
/// use courtier::store::{CardStore, MemoryStorage};
///
/// let source = r#"{"cards":[
///     {"type":"court","title":"A","description":""},
///     {"type":"court","title":"B","description":""},
///     {"type":"court","title":"C","description":""},
///     {"type":"court","title":"D","description":""}
/// ]}"#;
///
/// let mut storage = MemoryStorage::new();
/// let (mut store, _) = CardStore::load_or_restore(source, &storage);
///
/// let mut engine = DealEngine::new(42);
/// let summary = engine.deal(&mut store, PlayerCount::Two, &mut storage);
///
/// // Three court cards requested, four available
/// assert_eq!(summary.court, 3);
/// ```
#[derive(Clone, Debug)]
pub struct DealEngine {
    rng: DealRng,
}

impl DealEngine {
    /// Create an engine with a fixed seed (reproducible deals).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DealRng::new(seed),
        }
    }

    /// Create an engine seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: DealRng::from_entropy(),
        }
    }

    /// Deal a game start for the given player count.
    ///
    /// For each card type, draws the configured count from the unassigned
    /// pool and assigns it to that type's target zone. Best effort: a pool
    /// shorter than its count assigns everything available and the deal
    /// carries on. Re-invoking without a reset draws from whatever remains
    /// unassigned; that is expected, not an error.
    pub fn deal<S: StorageSlot>(
        &mut self,
        store: &mut CardStore,
        players: PlayerCount,
        storage: &mut S,
    ) -> DealSummary {
        let counts = players.counts();
        let mut summary = DealSummary::default();

        for (card_type, target) in DEAL_TARGETS {
            let requested = match card_type {
                CardType::Court => counts.court,
                CardType::Leader => counts.leader,
                CardType::Lore => counts.lore,
            };
            let assigned = self.draw_into(store, card_type, target, requested, storage);
            match card_type {
                CardType::Court => summary.court = assigned,
                CardType::Leader => summary.leader = assigned,
                CardType::Lore => summary.lore = assigned,
            }
        }

        log::debug!(
            "dealt {} cards for {} players (court {}, leader {}, lore {})",
            summary.total(),
            players.raw(),
            summary.court,
            summary.leader,
            summary.lore
        );
        summary
    }

    /// Draw a single court card into the court row.
    ///
    /// An empty pool is a distinct outcome, not a silent no-op.
    pub fn draw_court_card<S: StorageSlot>(
        &mut self,
        store: &mut CardStore,
        storage: &mut S,
    ) -> Result<CardId, DealError> {
        let pool: Vec<CardId> = store
            .select(CardType::Court, Some(Zone::None), None)
            .iter()
            .map(|c| c.id)
            .collect();

        let drawn = *self.rng.draw(&pool, 1).first().ok_or(DealError::CourtPoolEmpty)?;
        store
            .set_zone(drawn, Zone::Court, storage)
            .expect("court zone is legal for a court card drawn from the store");
        Ok(drawn)
    }

    /// Draw up to `requested` unassigned cards of `card_type` into `target`.
    /// Returns the number actually assigned.
    fn draw_into<S: StorageSlot>(
        &mut self,
        store: &mut CardStore,
        card_type: CardType,
        target: Zone,
        requested: usize,
        storage: &mut S,
    ) -> usize {
        let pool: Vec<CardId> = store
            .select(card_type, Some(Zone::None), None)
            .iter()
            .map(|c| c.id)
            .collect();

        let drawn = self.rng.draw(&pool, requested);
        for id in &drawn {
            store
                .set_zone(*id, target, storage)
                .expect("deal targets are legal for their card type");
        }
        drawn.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    fn source(court: usize, leader: usize, lore: usize) -> String {
        let mut cards = Vec::new();
        for i in 0..court {
            cards.push(format!(
                r#"{{"type":"court","title":"Court {i}","description":""}}"#
            ));
        }
        for i in 0..leader {
            cards.push(format!(
                r#"{{"type":"leader","title":"Leader {i}","description":""}}"#
            ));
        }
        for i in 0..lore {
            cards.push(format!(
                r#"{{"type":"lore","title":"Lore {i}","description":""}}"#
            ));
        }
        format!(r#"{{"cards":[{}]}}"#, cards.join(","))
    }

    fn setup(court: usize, leader: usize, lore: usize) -> (CardStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let (store, err) = CardStore::load_or_restore(&source(court, leader, lore), &storage);
        assert!(err.is_none());
        (store, storage)
    }

    #[test]
    fn test_count_table() {
        assert_eq!(PlayerCount::Two.counts(), DealCounts { court: 3, leader: 3, lore: 3 });
        assert_eq!(PlayerCount::Three.counts(), DealCounts { court: 4, leader: 4, lore: 4 });
        assert_eq!(PlayerCount::Four.counts(), DealCounts { court: 4, leader: 5, lore: 5 });
    }

    #[test]
    fn test_from_count() {
        assert_eq!(PlayerCount::from_count(2), Some(PlayerCount::Two));
        assert_eq!(PlayerCount::from_count(4), Some(PlayerCount::Four));
        assert_eq!(PlayerCount::from_count(1), None);
        assert_eq!(PlayerCount::from_count(5), None);
    }

    #[test]
    fn test_deal_two_players() {
        let (mut store, mut storage) = setup(10, 6, 6);
        let mut engine = DealEngine::new(42);

        let summary = engine.deal(&mut store, PlayerCount::Two, &mut storage);
        assert_eq!(summary, DealSummary { court: 3, leader: 3, lore: 3 });

        assert_eq!(store.select(CardType::Court, Some(Zone::Court), None).len(), 3);
        assert_eq!(store.select(CardType::Court, Some(Zone::None), None).len(), 7);
        assert_eq!(store.select(CardType::Leader, Some(Zone::Draft), None).len(), 3);
        assert_eq!(store.select(CardType::Lore, Some(Zone::Draft), None).len(), 3);
    }

    #[test]
    fn test_deal_saturates_short_pool() {
        // 4 players want 5 leaders; only 2 exist
        let (mut store, mut storage) = setup(6, 2, 6);
        let mut engine = DealEngine::new(42);

        let summary = engine.deal(&mut store, PlayerCount::Four, &mut storage);

        assert_eq!(summary.leader, 2);
        assert_eq!(summary.lore, 5);
        assert_eq!(store.select(CardType::Leader, Some(Zone::None), None).len(), 0);
    }

    #[test]
    fn test_deal_twice_shrinks_pool() {
        let (mut store, mut storage) = setup(5, 5, 5);
        let mut engine = DealEngine::new(42);

        engine.deal(&mut store, PlayerCount::Two, &mut storage);
        let second = engine.deal(&mut store, PlayerCount::Two, &mut storage);

        // 5 - 3 = 2 left per type for the second deal
        assert_eq!(second, DealSummary { court: 2, leader: 2, lore: 2 });
        assert_eq!(store.select(CardType::Court, Some(Zone::None), None).len(), 0);
    }

    #[test]
    fn test_deal_only_touches_unassigned() {
        let (mut store, mut storage) = setup(5, 4, 4);
        let discarded = store.select(CardType::Court, None, None)[0].id;
        store.set_zone(discarded, Zone::Discarded, &mut storage).unwrap();

        let mut engine = DealEngine::new(42);
        engine.deal(&mut store, PlayerCount::Two, &mut storage);

        assert_eq!(store.get(discarded).unwrap().zone, Zone::Discarded);
    }

    #[test]
    fn test_deal_deterministic_for_seed() {
        let (mut store1, mut storage1) = setup(10, 6, 6);
        let (mut store2, mut storage2) = setup(10, 6, 6);

        DealEngine::new(7).deal(&mut store1, PlayerCount::Three, &mut storage1);
        DealEngine::new(7).deal(&mut store2, PlayerCount::Three, &mut storage2);

        let court1: Vec<_> = store1
            .select(CardType::Court, Some(Zone::Court), None)
            .iter()
            .map(|c| c.id)
            .collect();
        let court2: Vec<_> = store2
            .select(CardType::Court, Some(Zone::Court), None)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(court1, court2);
    }

    #[test]
    fn test_draw_court_card() {
        let (mut store, mut storage) = setup(2, 0, 0);
        let mut engine = DealEngine::new(42);

        let first = engine.draw_court_card(&mut store, &mut storage).unwrap();
        assert_eq!(store.get(first).unwrap().zone, Zone::Court);

        let second = engine.draw_court_card(&mut store, &mut storage).unwrap();
        assert_ne!(first, second);

        // Pool exhausted: distinct signal, not a silent no-op
        assert_eq!(
            engine.draw_court_card(&mut store, &mut storage),
            Err(DealError::CourtPoolEmpty)
        );
    }
}
