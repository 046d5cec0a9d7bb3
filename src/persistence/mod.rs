//! High score persistence
//!
//! The game keeps exactly one persisted value: the best score, under a fixed
//! key. Storage is an injected capability so the simulation never depends on
//! a concrete backend:
//! - `MemoryStore` for tests and sandboxes
//! - `FileStore` (native) writes a small JSON document with tmp → save rotation
//! - `LocalStorage` (wasm32) uses the browser's `window.localStorage`
//!
//! Backends never fail loudly. A store that cannot be read reports no value,
//! and a failed write is logged and dropped.

pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory;

pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;
pub use memory::MemoryStore;

/// Key the high score is stored under
pub const HIGH_SCORE_KEY: &str = "highestScore";

/// Integer key-value storage
pub trait ScoreStore {
    /// Stored value, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<u32>;

    /// Store a value, best effort
    fn set(&mut self, key: &str, value: u32);
}

/// Storage that is not available at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl ScoreStore for NullStore {
    fn get(&self, _key: &str) -> Option<u32> {
        None
    }

    fn set(&mut self, _key: &str, _value: u32) {}
}

/// Read the high score once at startup, defaulting to 0
pub fn load_high_score(store: &dyn ScoreStore) -> u32 {
    let high = store.get(HIGH_SCORE_KEY).unwrap_or(0);
    log::info!("High score: {}", high);
    high
}

/// Offer a finished run's score.
///
/// Persists and updates `high_score` only when `score` is strictly greater.
/// Returns whether a new high score was set.
pub fn record_high_score(store: &mut dyn ScoreStore, high_score: &mut u32, score: u32) -> bool {
    if score <= *high_score {
        return false;
    }
    store.set(HIGH_SCORE_KEY, score);
    *high_score = score;
    log::info!("New high score: {}", score);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_to_zero() {
        assert_eq!(load_high_score(&NullStore), 0);
        assert_eq!(load_high_score(&MemoryStore::new()), 0);
    }

    #[test]
    fn test_record_only_strictly_greater() {
        let mut store = MemoryStore::with_value(HIGH_SCORE_KEY, 10);
        let mut high = load_high_score(&store);
        assert_eq!(high, 10);

        assert!(!record_high_score(&mut store, &mut high, 10));
        assert_eq!(store.writes(), 0);

        assert!(!record_high_score(&mut store, &mut high, 3));
        assert_eq!(high, 10);

        assert!(record_high_score(&mut store, &mut high, 11));
        assert_eq!(high, 11);
        assert_eq!(store.get(HIGH_SCORE_KEY), Some(11));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_null_store_still_tracks_in_memory() {
        let mut store = NullStore;
        let mut high = 0;
        assert!(record_high_score(&mut store, &mut high, 5));
        assert_eq!(high, 5);
        assert_eq!(store.get(HIGH_SCORE_KEY), None);
    }
}
