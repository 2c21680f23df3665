pub mod done;
pub mod events;
pub mod journal;
pub mod memory;
pub mod move_event;
pub mod new;
pub mod note;
pub mod notify;
pub mod view;
pub mod watch;

use anyhow::Result;
use chrono::Local;
use daybook_core::config::{DaybookConfig, MEMORIES_NAMESPACE, NOTES_NAMESPACE};
use daybook_core::memory::Memory;
use daybook_core::note::Note;
use daybook_core::store::{FileBackend, NamespaceStore};
use daybook_core::DateKey;

pub type NoteStore = NamespaceStore<FileBackend, Note>;
pub type MemoryStore = NamespaceStore<FileBackend, Memory>;

fn backend(config: &DaybookConfig) -> FileBackend {
    FileBackend::new(config.store_dir(), config.storage_quota_bytes)
}

pub fn open_notes(config: &DaybookConfig) -> NoteStore {
    NamespaceStore::open(NOTES_NAMESPACE, backend(config))
}

pub fn open_memories(config: &DaybookConfig) -> MemoryStore {
    NamespaceStore::open(MEMORIES_NAMESPACE, backend(config))
}

/// Parse an optional YYYY-MM-DD argument, defaulting to today.
pub fn resolve_date(arg: Option<&str>) -> Result<DateKey> {
    match arg {
        Some(s) => Ok(s.parse()?),
        None => Ok(DateKey::new(Local::now().date_naive())),
    }
}
