//! Browser LocalStorage score store (wasm32 only)

use super::ScoreStore;

/// Score store backed by `window.localStorage`.
///
/// Sandboxed pages may have no storage at all; every call then degrades to
/// "no value" / no-op.
#[derive(Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl ScoreStore for LocalStorage {
    fn get(&self, key: &str) -> Option<u32> {
        let raw = Self::storage()?.get_item(key).ok().flatten()?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring unreadable {} value {:?}", key, raw);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: u32) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, {} not saved", key);
            return;
        };
        if storage.set_item(key, &value.to_string()).is_err() {
            log::warn!("LocalStorage rejected {}", key);
        }
    }
}
