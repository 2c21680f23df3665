//! Error types for the daybook ecosystem.

use thiserror::Error;

/// Errors that can occur in daybook operations.
#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDateKey(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Event not found: {0}")]
    EventNotFound(i64),

    #[error("Not a decodable image: {0}")]
    InvalidImage(String),

    #[error("Image encoding error: {0}")]
    ImageEncode(String),

    #[error("Storage full: '{0}' could not be persisted even after evicting every entry")]
    StorageFull(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for daybook operations.
pub type DaybookResult<T> = Result<T, DaybookError>;
