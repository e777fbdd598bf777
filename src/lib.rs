//! # courtier
//!
//! Core library for a card-tracking companion to a physical card game:
//! a deck loaded from a static JSON source, per-card zone assignments
//! (court row, draft pile, player colors, discarded), write-through
//! persistence to a key-value slot, and randomized deal helpers for
//! 2–4 player game setup.
//!
//! ## Design Principles
//!
//! 1. **View-independent**: No rendering, styling, or DOM concerns. A view
//!    layer pulls card sequences via queries and issues mutations; the core
//!    never pushes notifications.
//!
//! 2. **Zone legality at the boundary**: The zone vocabulary is partitioned
//!    by card type and enforced wherever a zone enters the system - on
//!    assignment, on source parse, and on snapshot restore.
//!
//! 3. **Unbiased, reproducible deals**: Draws use a partial Fisher-Yates
//!    shuffle over a seeded ChaCha8 RNG, so deals are uniform and tests can
//!    reproduce them exactly.
//!
//! ## Modules
//!
//! - `cards`: Card model - types, zones, the legality partition
//! - `source`: Static source document parsing
//! - `store`: Authoritative collection, persistence, storage seam
//! - `deal`: Player-count tables, unbiased draws, batch deals
//! - `session`: Application-state object exposing the view-layer contract

pub mod cards;
pub mod deal;
pub mod session;
pub mod source;
pub mod store;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, CardType, Zone};
pub use crate::deal::{DealCounts, DealEngine, DealError, DealRng, DealSummary, PlayerCount};
pub use crate::session::{Session, ViewFilter};
pub use crate::source::SourceError;
pub use crate::store::{CardStore, MemoryStorage, Snapshot, StorageSlot, StoreError, DECK_KEY, SNAPSHOT_VERSION};
