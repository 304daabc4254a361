//! Session building for sessionize.
//!
//! Loads events from JSON / JSONL sources, groups them into per-user
//! sessions and summarizes the resulting sessions.

pub mod builder;
pub mod reader;
pub mod stats;

pub use builder::{merge_user_events, SessionBuilder};
pub use sessionize_core as core;
