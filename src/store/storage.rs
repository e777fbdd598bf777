//! Durable key-value storage slot.
//!
//! Models the original companion's synchronous string key-value store:
//! reads and writes complete immediately and cannot partially fail. The
//! store persists its whole collection under [`DECK_KEY`] after every
//! mutation; there is no delta format.

use rustc_hash::FxHashMap;

/// Storage key for the persisted deck snapshot.
pub const DECK_KEY: &str = "courtier.deck";

/// A synchronous string key-value slot.
///
/// Implementations back the write-through persistence of the card store.
/// Reads return `None` for absent keys; writes replace wholesale.
pub trait StorageSlot {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str);

    /// Remove `key` and its value, if present.
    fn erase(&mut self, key: &str);
}

/// In-memory storage, for tests and hosts that manage durability themselves.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl StorageSlot for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }

    fn erase(&mut self, key: &str) {
        self.slots.remove(key);
    }
}
