//! Core types for sessionize.
//!
//! Holds the event and session data model, the metadata deep-merge rule,
//! the error type shared by every crate and the command-line settings.

pub mod error;
pub mod merge;
pub mod models;
pub mod settings;

pub use error::{Result, SessionError};
pub use models::{Event, Meta, Session};
