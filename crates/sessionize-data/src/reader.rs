//! Event file discovery and loading for sessionize.
//!
//! Reads events from JSON arrays or JSONL streams and decodes them into
//! [`Event`] structs. Loading is strict: a malformed event fails the whole
//! load instead of being skipped, since a silently dropped event would
//! change session boundaries.

use std::io::Read;
use std::path::{Path, PathBuf};

use sessionize_core::error::{Result, SessionError};
use sessionize_core::models::Event;
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.json` and `.jsonl` files recursively under `dir`, sorted by path.
pub fn find_event_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        warn!("Event path does not exist: {}", dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_event_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Decode events from `text`.
///
/// A document whose first non-whitespace character is `[` is parsed as a
/// JSON array of events. Anything else is parsed as JSONL: one event object
/// per line, blank lines ignored. Empty input yields no events.
pub fn parse_events(text: &str) -> Result<Vec<Event>> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let mut events = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|source| SessionError::InvalidEvent {
            line: index + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Read the whole of `reader` and decode its events.
pub fn read_events<R: Read>(mut reader: R) -> Result<Vec<Event>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_events(&text)
}

/// Load the events stored in a single file.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let text = std::fs::read_to_string(path).map_err(|source| SessionError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let events = parse_events(&text).map_err(|e| {
        warn!("Failed to load events from {}: {}", path.display(), e);
        e
    })?;

    debug!("File {}: {} events", path.display(), events.len());
    Ok(events)
}

/// Load events from every path in order.
///
/// Directories are expanded with [`find_event_files`]; regular files are
/// loaded directly regardless of extension. A path that is neither is an
/// error.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<Vec<Event>> {
    let mut all_events: Vec<Event> = Vec::new();
    let mut files_read = 0usize;

    for path in paths {
        if path.is_dir() {
            let files = find_event_files(path);
            if files.is_empty() {
                warn!("No event files found in {}", path.display());
            }
            for file in &files {
                all_events.extend(load_events(file)?);
                files_read += 1;
            }
        } else if path.is_file() {
            all_events.extend(load_events(path)?);
            files_read += 1;
        } else {
            return Err(SessionError::InvalidInput(format!(
                "{} is not a file or directory",
                path.display()
            )));
        }
    }

    debug!(
        "Loaded {} events from {} files",
        all_events.len(),
        files_read
    );
    Ok(all_events)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn is_event_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "json" || ext == "jsonl")
        .unwrap_or(false)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
