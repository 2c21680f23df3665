//! Persisted key-value store with quota eviction.
//!
//! A `NamespaceStore` mirrors one namespace of the backend as an in-memory
//! map from `DateKey` to a JSON-serializable value, persisting the whole map
//! on every change. When the backend signals that its quota is exceeded, the
//! store evicts the oldest entries one at a time until the write fits. The
//! in-memory map and the persisted payload always agree after every
//! operation.
//!
//! Single-writer: nothing here defends against two processes mutating the
//! same namespace concurrently.

mod backend;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, StorageError, StorageResult};

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::date_key::DateKey;
use crate::error::{DaybookError, DaybookResult};

/// How a `put` landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    /// Written as-is.
    Clean,
    /// Written after evicting these keys, oldest first.
    Evicted(Vec<DateKey>),
}

pub struct NamespaceStore<B, V> {
    namespace: String,
    backend: B,
    entries: BTreeMap<DateKey, V>,
}

impl<B, V> NamespaceStore<B, V>
where
    B: StorageBackend,
    V: Serialize + DeserializeOwned + Clone,
{
    /// Open a namespace, loading whatever the backend holds for it.
    /// Missing or corrupt payloads load as an empty map.
    pub fn open(namespace: &str, backend: B) -> Self {
        let entries = match backend.read(namespace) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("Discarding corrupt '{}' data: {}", namespace, e);
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                log::warn!("Could not read '{}' data: {}", namespace, e);
                BTreeMap::new()
            }
        };

        NamespaceStore {
            namespace: namespace.to_string(),
            backend,
            entries,
        }
    }

    pub fn get(&self, key: &DateKey) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &V)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &DateKey> {
        self.entries.keys()
    }

    /// Insert or replace the entry for `key` and persist the namespace.
    ///
    /// If the backend rejects the write for capacity, entries are evicted
    /// oldest-date-first from a working copy until a write succeeds; the
    /// first successful write is committed to memory too. If even the empty
    /// map cannot be written, the previous state (memory and persisted) is
    /// left untouched and `StorageFull` is returned.
    pub fn put(&mut self, key: DateKey, value: V) -> DaybookResult<Commit> {
        let mut working = self.entries.clone();
        working.insert(key, value);

        if self.try_write(&working)? {
            self.entries = working;
            return Ok(Commit::Clean);
        }

        let mut evicted = Vec::new();
        while let Some((oldest, _)) = working.pop_first() {
            evicted.push(oldest);
            if self.try_write(&working)? {
                self.entries = working;
                return Ok(Commit::Evicted(evicted));
            }
        }

        Err(DaybookError::StorageFull(self.namespace.clone()))
    }

    /// Delete the entry for `key` if present and persist. Idempotent.
    pub fn remove(&mut self, key: &DateKey) -> DaybookResult<()> {
        let mut working = self.entries.clone();
        if working.remove(key).is_none() {
            return Ok(());
        }

        if !self.try_write(&working)? {
            // A shrinking write that still exceeds quota means some other
            // namespace grew under us; surface it as terminal.
            return Err(DaybookError::StorageFull(self.namespace.clone()));
        }
        self.entries = working;
        Ok(())
    }

    /// Attempt one backend write. `Ok(false)` means quota exceeded;
    /// any other failure is an error.
    fn try_write(&mut self, map: &BTreeMap<DateKey, V>) -> DaybookResult<bool> {
        let payload = serde_json::to_string(map)
            .map_err(|e| DaybookError::Serialization(e.to_string()))?;
        match self.backend.write(&self.namespace, &payload) {
            Ok(()) => Ok(true),
            Err(StorageError::QuotaExceeded) => Ok(false),
            Err(e) => Err(DaybookError::Storage(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn store(capacity: usize) -> NamespaceStore<MemoryBackend, String> {
        NamespaceStore::open("notes", MemoryBackend::new(capacity))
    }

    /// What the backend currently holds for the store's namespace.
    fn persisted(store: &NamespaceStore<MemoryBackend, String>) -> BTreeMap<DateKey, String> {
        match store.backend.read("notes").unwrap() {
            Some(raw) => serde_json::from_str(&raw).unwrap(),
            None => BTreeMap::new(),
        }
    }

    #[test]
    fn test_put_get_remove() {
        let mut store = store(4096);
        store.put(key("2025-03-01"), "first".to_string()).unwrap();
        store.put(key("2025-03-02"), "second".to_string()).unwrap();

        assert_eq!(store.get(&key("2025-03-01")).unwrap(), "first");
        assert_eq!(store.get(&key("2025-03-03")), None);

        store.remove(&key("2025-03-01")).unwrap();
        assert_eq!(store.get(&key("2025-03-01")), None);
        // Removing again is a no-op
        store.remove(&key("2025-03-01")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_replaces_existing_entry_for_key() {
        let mut store = store(4096);
        store.put(key("2025-03-01"), "old".to_string()).unwrap();
        store.put(key("2025-03-01"), "new".to_string()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key("2025-03-01")).unwrap(), "new");
    }

    #[test]
    fn test_survives_corrupt_persisted_data() {
        let mut backend = MemoryBackend::new(4096);
        backend.write("notes", "{not json").unwrap();
        let store: NamespaceStore<MemoryBackend, String> = NamespaceStore::open("notes", backend);
        assert!(store.is_empty());
    }

    #[test]
    fn test_eviction_drops_oldest_date_first() {
        // Three ~50-byte entries fit; the fourth pushes past the quota and
        // must evict exactly the oldest date.
        let mut store = store(170);
        let filler = "x".repeat(30);
        for date in ["2025-01-03", "2025-01-01", "2025-01-02"] {
            store.put(key(date), filler.clone()).unwrap();
        }

        let commit = store.put(key("2025-01-04"), filler.clone()).unwrap();
        assert_eq!(commit, Commit::Evicted(vec![key("2025-01-01")]));

        assert_eq!(store.get(&key("2025-01-01")), None);
        assert!(store.get(&key("2025-01-04")).is_some());
        // Memory and persisted state agree exactly
        assert_eq!(persisted(&store), store.entries);
    }

    #[test]
    fn test_eviction_may_consume_multiple_entries() {
        let mut store = store(170);
        let filler = "x".repeat(30);
        for date in ["2025-01-01", "2025-01-02", "2025-01-03"] {
            store.put(key(date), filler.clone()).unwrap();
        }

        // An entry as big as two old ones evicts two
        let commit = store.put(key("2025-01-04"), "y".repeat(75)).unwrap();
        assert_eq!(
            commit,
            Commit::Evicted(vec![key("2025-01-01"), key("2025-01-02")])
        );
        assert_eq!(persisted(&store), store.entries);
    }

    #[test]
    fn test_eviction_exhaustion_is_terminal_and_leaves_state_untouched() {
        // A sibling namespace eats the whole quota, so no notes payload fits,
        // not even the empty map. The previously persisted notes must survive.
        let dir = tempfile::tempdir().unwrap();

        let mut store: NamespaceStore<FileBackend, String> = NamespaceStore::open(
            "notes",
            FileBackend::new(dir.path().to_path_buf(), 4096),
        );
        store.put(key("2025-01-01"), "kept".to_string()).unwrap();
        let before = store.entries.clone();

        let mut memories: NamespaceStore<FileBackend, String> = NamespaceStore::open(
            "memories",
            FileBackend::new(dir.path().to_path_buf(), 4096),
        );
        memories.put(key("2025-01-01"), "m".repeat(3000)).unwrap();

        // Re-open notes under a quota the sibling already exceeds
        let mut store: NamespaceStore<FileBackend, String> = NamespaceStore::open(
            "notes",
            FileBackend::new(dir.path().to_path_buf(), 100),
        );
        assert_eq!(store.entries, before);

        let err = store.put(key("2025-01-02"), "new".to_string()).unwrap_err();
        assert!(matches!(err, DaybookError::StorageFull(_)));

        // Neither the in-memory map nor the file changed
        assert_eq!(store.entries, before);
        let raw = store.backend.read("notes").unwrap().unwrap();
        let on_disk: BTreeMap<DateKey, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk, before);
    }

    #[test]
    fn test_eviction_can_empty_the_namespace() {
        // Another namespace hogs the space: the new key itself is evicted
        // last and the empty map is what gets committed.
        let mut backend = MemoryBackend::new(40);
        backend.write("other", &"x".repeat(35)).unwrap();
        let mut store: NamespaceStore<MemoryBackend, String> =
            NamespaceStore::open("notes", backend);

        let commit = store.put(key("2025-01-01"), "hello".to_string()).unwrap();
        assert_eq!(commit, Commit::Evicted(vec![key("2025-01-01")]));
        assert!(store.is_empty());
        assert_eq!(persisted(&store), BTreeMap::new());
    }
}
