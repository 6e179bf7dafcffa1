//! The key-value storage port the order screen reads from.
//!
//! The browser's `localStorage` is process-global; screens never touch it
//! directly. They go through [`KeyValueStore`], so tests can substitute an
//! in-memory store.

use std::cell::Cell;
use std::collections::HashMap;
use std::ops::Deref;
use std::rc::Rc;

/// Read-only view of a string-keyed persistent store.
///
/// This application is strictly a consumer of the keys it cares about;
/// there is no `set` on the port.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` when the key is
    /// absent or the store is unavailable.
    fn get(&self, key: &str) -> Option<String>;
}

/// A cheaply clonable handle to a storage port, suitable as a Dioxus
/// context value.
#[derive(Clone)]
pub struct SharedStore(Rc<dyn KeyValueStore>);

impl SharedStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl Deref for SharedStore {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Storage port backed by the browser's `localStorage`.
///
/// Any failure to reach the storage area (private browsing, disabled
/// storage) collapses to `None`, the same as a missing key.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
}

/// In-memory storage port for tests and non-wasm targets.
///
/// Counts reads so tests can assert the one-read-per-load contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reads: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries,
            reads: Cell::new(0),
        }
    }

    /// Number of `get` calls served so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_returns_entries_and_counts_reads() {
        let store = MemoryStore::with_entry("greeting", "hola");
        assert_eq!(store.get("greeting").as_deref(), Some("hola"));
        assert_eq!(store.get("missing"), None);
        assert_eq!(store.reads(), 2);
    }

    #[test]
    fn shared_store_hands_out_the_same_port() {
        let shared = SharedStore::new(MemoryStore::with_entry("k", "v"));
        let clone = shared.clone();
        assert_eq!(clone.get("k").as_deref(), Some("v"));
    }
}
