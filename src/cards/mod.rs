//! Card model: types, zones, and the legality partition.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier from source-document position
//! - `CardType`: Court, leader, or lore (fixed at load)
//! - `Zone`: Current assignment bucket, vocabulary partitioned by type
//! - `Card`: One tracked deck entry

pub mod card;
pub mod zone;

pub use card::{Card, CardId, CardType};
pub use zone::Zone;
