//! Picture-of-the-day entries.

use serde::{Deserialize, Serialize};

/// One stored picture for a day: a compressed JPEG data URI plus an optional
/// caption. At most one per day, keyed by `DateKey` in the `memories`
/// namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Memory {
    pub fn new(image: String, caption: Option<String>) -> Self {
        Memory { image, caption }
    }

    /// Rough stored size in bytes (the data URI dominates).
    pub fn size_bytes(&self) -> usize {
        self.image.len() + self.caption.as_deref().map_or(0, str::len)
    }
}
