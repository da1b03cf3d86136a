//! Browser Storage
//!
//! `window.localStorage` behind the core `KeyValueStore` contract, with an
//! in-memory fallback when the browser refuses access (private modes,
//! disabled storage).

use taskboard_core::{DomainError, DomainResult, KeyValueStore, MemoryStore};

/// Handle to `window.localStorage`. Looked up on every access so the
/// handle itself holds no JS objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> DomainResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| DomainError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| DomainError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))
    }
}

/// Store the board persists to
#[derive(Debug, Clone)]
pub enum AppStorage {
    Browser(BrowserStorage),
    /// Nothing survives a reload
    Memory(MemoryStore),
}

impl AppStorage {
    /// Prefer local storage, fall back to memory when it cannot be opened
    pub fn detect() -> Self {
        match BrowserStorage::local_storage() {
            Ok(_) => AppStorage::Browser(BrowserStorage),
            Err(e) => {
                log::warn!("[STORAGE] {}; tasks will not persist across reloads", e);
                AppStorage::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for AppStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        match self {
            AppStorage::Browser(store) => store.get(key),
            AppStorage::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        match self {
            AppStorage::Browser(store) => store.set(key, value),
            AppStorage::Memory(store) => store.set(key, value),
        }
    }
}
