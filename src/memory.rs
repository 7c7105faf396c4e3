//! Named value store.
//!
//! Holds the last value remembered under each namespace for the lifetime of
//! the process. Values are read back through `{memory:<namespace>}` tokens.
//! Nothing is persisted; a restart starts from an empty store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Process-lifetime mapping from namespace to the last remembered value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `namespace`, replacing any previous value.
    ///
    /// Concurrent writers to the same namespace race; the later write wins.
    pub fn remember(&self, namespace: impl Into<String>, value: impl Into<String>) {
        self.lock().insert(namespace.into(), value.into());
    }

    /// Return the value stored under `namespace`, or an empty string.
    pub fn lookup(&self, namespace: &str) -> String {
        self.lock().get(namespace).cloned().unwrap_or_default()
    }

    /// Number of stored namespaces.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Stored namespaces in sorted order.
    pub fn namespaces(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave a half-written entry.
        self.entries
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_lookup_missing_is_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.lookup("nothing"), "");
        assert!(store.is_empty());
    }

    #[test]
    fn test_remember_then_lookup() {
        let store = MemoryStore::new();
        store.remember("ns", "value");
        assert_eq!(store.lookup("ns"), "value");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::new();
        store.remember("ns", "v1");
        store.remember("ns", "v2");
        assert_eq!(store.lookup("ns"), "v2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_namespace_and_value() {
        let store = MemoryStore::new();
        store.remember("", "");
        assert_eq!(store.lookup(""), "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_namespaces_sorted() {
        let store = MemoryStore::new();
        store.remember("beta", "2");
        store.remember("alpha", "1");
        assert_eq!(store.namespaces(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_concurrent_writers_keep_one_value() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.remember("shared", format!("writer-{}", i)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 1);
        assert!(store.lookup("shared").starts_with("writer-"));
    }
}
