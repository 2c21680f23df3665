//! Core types and logic for the daybook ecosystem.
//!
//! This crate holds everything that is not terminal glue:
//! - the calendar grid engine (`grid`) and holiday rules (`holiday`)
//! - events, journal notes and picture-of-the-day memories
//! - the quota-bounded persisted store (`store`) backing notes and memories
//! - the notification scan (`notify`) and the application state reducer (`state`)

pub mod config;
pub mod date_key;
pub mod error;
pub mod event;
pub mod event_source;
pub mod grid;
pub mod holiday;
pub mod image;
pub mod memory;
pub mod note;
pub mod notify;
pub mod state;
pub mod store;

pub use date_key::DateKey;
pub use error::{DaybookError, DaybookResult};
pub use event::{Event, EventDraft, EventKind};
