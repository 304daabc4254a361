//! Session builder for sessionize.
//!
//! Groups [`Event`] records into per-user sessions split on inactivity gaps
//! and summarizes each session's time bounds, event types and metadata.

use std::collections::HashSet;

use sessionize_core::merge::merge_all;
use sessionize_core::models::{Event, Session};
use sessionize_core::settings::DEFAULT_GAP_SECONDS;
use tracing::debug;

// ── SessionBuilder ────────────────────────────────────────────────────────────

/// Splits an event stream into sessions using a maximum inter-event gap.
#[derive(Debug, Clone, Copy)]
pub struct SessionBuilder {
    /// Largest gap (inclusive) between consecutive events of one session.
    gap_seconds: u64,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_GAP_SECONDS)
    }
}

impl SessionBuilder {
    /// Create a builder with the given gap threshold in seconds.
    pub fn new(gap_seconds: u64) -> Self {
        Self { gap_seconds }
    }

    /// The configured gap threshold in seconds.
    pub fn gap_seconds(&self) -> u64 {
        self.gap_seconds
    }

    // ── Public methods ────────────────────────────────────────────────────────

    /// Group `events` into sessions ordered by `start_ts`.
    ///
    /// The algorithm:
    /// 1. Stable-sort events by `(user_id, ts)`; input order is irrelevant.
    /// 2. Partition the sorted list into per-user groups.
    /// 3. Within a group, open a new session whenever the gap to the previous
    ///    event exceeds the threshold. A gap equal to the threshold does not.
    /// 4. Summarize each run into a [`Session`].
    /// 5. Stable-sort all sessions by `start_ts`.
    ///
    /// `events` is only borrowed; every value in the output is cloned.
    pub fn build(&self, events: &[Event]) -> Vec<Session> {
        if events.is_empty() {
            return Vec::new();
        }

        let mut sorted: Vec<&Event> = events.iter().collect();
        sorted.sort_by(|a, b| a.user_id.cmp(&b.user_id).then(a.ts.cmp(&b.ts)));

        let mut sessions: Vec<Session> = Vec::new();
        for user_events in split_runs(&sorted, |prev, curr| prev.user_id != curr.user_id) {
            for run in split_runs(user_events, |prev, curr| self.exceeds_gap(prev, curr)) {
                sessions.push(Self::summarize(run));
            }
        }

        sessions.sort_by_key(|s| s.start_ts);

        debug!(
            "SessionBuilder: created {} sessions from {} events (gap {}s)",
            sessions.len(),
            events.len(),
            self.gap_seconds
        );
        sessions
    }

    // ── Session-building helpers ──────────────────────────────────────────────

    /// `true` when `curr` is too far after `prev` to share a session.
    fn exceeds_gap(&self, prev: &Event, curr: &Event) -> bool {
        curr.ts.abs_diff(prev.ts) > self.gap_seconds
    }

    /// Reduce a non-empty, chronologically sorted run into a [`Session`].
    fn summarize(run: &[&Event]) -> Session {
        let first = run[0];

        let (start_ts, end_ts) = run
            .iter()
            .fold((first.ts, first.ts), |(lo, hi), e| (lo.min(e.ts), hi.max(e.ts)));

        // Type list (no duplicates, preserve first occurrence).
        let mut seen: HashSet<&str> = HashSet::new();
        let mut types: Vec<String> = Vec::new();
        for event in run {
            if seen.insert(event.event_type.as_str()) {
                types.push(event.event_type.clone());
            }
        }

        let meta = merge_all(run.iter().map(|e| &e.meta));

        Session {
            user_id: first.user_id.clone(),
            start_ts,
            end_ts,
            types,
            meta,
            event_count: run.len(),
        }
    }
}

/// Group sessions with the default 600-second gap threshold.
pub fn merge_user_events(events: &[Event]) -> Vec<Session> {
    SessionBuilder::default().build(events)
}

/// Cut `items` into consecutive non-empty runs, starting a new run wherever
/// `breaks(prev, curr)` holds for a neighbouring pair.
fn split_runs<'s, 'e, F>(items: &'s [&'e Event], breaks: F) -> Vec<&'s [&'e Event]>
where
    F: Fn(&Event, &Event) -> bool,
{
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..items.len() {
        if breaks(items[i - 1], items[i]) {
            runs.push(&items[start..i]);
            start = i;
        }
    }
    if start < items.len() {
        runs.push(&items[start..]);
    }
    runs
}

// ── Tests ─────────────────────────────────────────────────────────────────────
