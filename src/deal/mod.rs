//! Randomized deal engine.
//!
//! ## Key Types
//!
//! - `DealRng`: Seeded ChaCha8 RNG with an unbiased partial-shuffle draw
//! - `PlayerCount`: Supported game sizes and the canonical count table
//! - `DealEngine`: Batch deal and single-card draw over a card store
//! - `DealSummary`: What a deal actually assigned, after saturation

pub mod engine;
pub mod rng;

pub use engine::{DealCounts, DealEngine, DealError, DealSummary, PlayerCount};
pub use rng::DealRng;
