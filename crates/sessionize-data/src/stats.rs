//! Summary statistics over a set of built sessions.

use std::collections::BTreeMap;

use serde::Serialize;
use sessionize_core::models::Session;

// ── UserStats ─────────────────────────────────────────────────────────────────

/// Totals for a single user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub sessions: usize,
    pub events: usize,
    /// Sum of session durations in seconds.
    pub active_seconds: u64,
}

impl UserStats {
    fn add_session(&mut self, session: &Session) {
        self.sessions += 1;
        self.events += session.event_count;
        self.active_seconds += session.duration_seconds();
    }
}

// ── SessionStats ──────────────────────────────────────────────────────────────

/// Totals across every session, with a per-user breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total_sessions: usize,
    pub total_events: usize,
    /// Duration of the longest session in seconds.
    pub longest_session_seconds: u64,
    /// Per-user totals keyed by user id (ascending).
    pub per_user: BTreeMap<String, UserStats>,
}

impl SessionStats {
    /// Accumulate statistics for `sessions`.
    pub fn from_sessions(sessions: &[Session]) -> Self {
        let mut stats = Self::default();
        for session in sessions {
            stats.total_sessions += 1;
            stats.total_events += session.event_count;
            stats.longest_session_seconds =
                stats.longest_session_seconds.max(session.duration_seconds());
            stats
                .per_user
                .entry(session.user_id.clone())
                .or_default()
                .add_session(session);
        }
        stats
    }

    /// Number of distinct users seen.
    pub fn distinct_users(&self) -> usize {
        self.per_user.len()
    }

    /// Mean events per session, `0.0` when there are no sessions.
    pub fn mean_events_per_session(&self) -> f64 {
        if self.total_sessions == 0 {
            return 0.0;
        }
        self.total_events as f64 / self.total_sessions as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SessionBuilder;
    use sessionize_core::models::Event;

    fn sample_events() -> Vec<Event> {
        vec![
            Event::new("u1", 1000, "click"),
            Event::new("u1", 1500, "view"),
            Event::new("u1", 2200, "click"),
            Event::new("u2", 500, "view"),
            Event::new("u2", 800, "click"),
            Event::new("u2", 900, "scroll"),
        ]
    }

    #[test]
    fn test_empty_sessions() {
        let stats = SessionStats::from_sessions(&[]);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.distinct_users(), 0);
        assert_eq!(stats.mean_events_per_session(), 0.0);
    }

    #[test]
    fn test_totals_match_input() {
        let events = sample_events();
        let sessions = SessionBuilder::default().build(&events);
        let stats = SessionStats::from_sessions(&sessions);

        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.total_events, events.len());
        assert_eq!(stats.distinct_users(), 2);
        assert_eq!(stats.longest_session_seconds, 500);
        assert_eq!(stats.mean_events_per_session(), 2.0);
    }

    #[test]
    fn test_per_user_breakdown() {
        let sessions = SessionBuilder::default().build(&sample_events());
        let stats = SessionStats::from_sessions(&sessions);

        assert_eq!(
            stats.per_user["u1"],
            UserStats {
                sessions: 2,
                events: 3,
                active_seconds: 500,
            }
        );
        assert_eq!(
            stats.per_user["u2"],
            UserStats {
                sessions: 1,
                events: 3,
                active_seconds: 400,
            }
        );
        let users: Vec<&str> = stats.per_user.keys().map(String::as_str).collect();
        assert_eq!(users, vec!["u1", "u2"]);
    }
}
