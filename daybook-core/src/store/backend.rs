//! Storage backends for the persisted store.
//!
//! A backend holds one opaque string payload per namespace and has a bounded
//! total capacity. Running out of capacity is a distinct error condition so
//! the store can trigger eviction on it and on nothing else.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The write would push the backend past its capacity.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

pub trait StorageBackend {
    /// Read the payload for a namespace. `None` if it was never written.
    fn read(&self, namespace: &str) -> StorageResult<Option<String>>;

    /// Replace the payload for a namespace. Either commits fully or fails
    /// without touching the previously stored payload.
    fn write(&mut self, namespace: &str, payload: &str) -> StorageResult<()>;
}

/// File-backed storage: one JSON document per namespace under a directory,
/// with a shared byte quota across all namespaces.
pub struct FileBackend {
    dir: PathBuf,
    quota_bytes: u64,
}

impl FileBackend {
    pub fn new(dir: PathBuf, quota_bytes: u64) -> Self {
        FileBackend { dir, quota_bytes }
    }

    fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!("{}.json", namespace))
    }

    /// Bytes currently used by every namespace except the one being replaced.
    fn used_by_others(&self, namespace: &str) -> StorageResult<u64> {
        let mut used = 0;
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let own = self.namespace_path(namespace);
        for entry in entries {
            let entry = entry?;
            if entry.path() != own && entry.file_type()?.is_file() {
                used += entry.metadata()?.len();
            }
        }
        Ok(used)
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, namespace: &str) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(self.namespace_path(namespace)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, namespace: &str, payload: &str) -> StorageResult<()> {
        if self.used_by_others(namespace)? + payload.len() as u64 > self.quota_bytes {
            return Err(StorageError::QuotaExceeded);
        }

        std::fs::create_dir_all(&self.dir)?;

        let path = self.namespace_path(namespace);
        let temp = path.with_extension("json.tmp");
        std::fs::write(&temp, payload)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

/// In-memory storage with a byte capacity. Used in tests and for ephemeral
/// runs; behaves exactly like `FileBackend` with respect to the quota.
pub struct MemoryBackend {
    capacity_bytes: usize,
    namespaces: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new(capacity_bytes: usize) -> Self {
        MemoryBackend {
            capacity_bytes,
            namespaces: HashMap::new(),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, namespace: &str) -> StorageResult<Option<String>> {
        Ok(self.namespaces.get(namespace).cloned())
    }

    fn write(&mut self, namespace: &str, payload: &str) -> StorageResult<()> {
        let used_by_others: usize = self
            .namespaces
            .iter()
            .filter(|(name, _)| name.as_str() != namespace)
            .map(|(_, payload)| payload.len())
            .sum();

        if used_by_others + payload.len() > self.capacity_bytes {
            return Err(StorageError::QuotaExceeded);
        }

        self.namespaces.insert(namespace.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_signals_quota_distinctly() {
        let mut backend = MemoryBackend::new(10);
        backend.write("a", "12345").unwrap();
        assert!(matches!(
            backend.write("b", "123456789"),
            Err(StorageError::QuotaExceeded)
        ));
        // The failed write left the previous state alone
        assert_eq!(backend.read("a").unwrap().as_deref(), Some("12345"));
        assert_eq!(backend.read("b").unwrap(), None);
    }

    #[test]
    fn test_memory_backend_replacing_a_namespace_frees_its_bytes() {
        let mut backend = MemoryBackend::new(10);
        backend.write("a", "1234567890").unwrap();
        // Replacement is measured against the quota without the old payload
        backend.write("a", "123").unwrap();
        backend.write("b", "1234567").unwrap();
    }
}
