use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::DateTime;
use sessionize_core::models::Session;
use sessionize_data::stats::SessionStats;

// ── Rendering ──────────────────────────────────────────────────────────────────

/// Render `sessions` in the named format (`json`, `jsonl` or `table`).
pub fn render(sessions: &[Session], format: &str, pretty: bool) -> Result<String> {
    match format {
        "json" => {
            let mut out = if pretty {
                serde_json::to_string_pretty(sessions)?
            } else {
                serde_json::to_string(sessions)?
            };
            out.push('\n');
            Ok(out)
        }
        "jsonl" => {
            let mut out = String::new();
            for session in sessions {
                out.push_str(&serde_json::to_string(session)?);
                out.push('\n');
            }
            Ok(out)
        }
        "table" => Ok(render_table(sessions)),
        other => bail!("Unknown output format: {}", other),
    }
}

/// Fixed-width table with one row per session.
fn render_table(sessions: &[Session]) -> String {
    let user_width = sessions
        .iter()
        .map(|s| s.user_id.chars().count())
        .max()
        .unwrap_or(0)
        .max("USER".len());

    let mut out = format!(
        "{:<uw$}  {:<19}  {:<19}  {:>8}  {:>6}  TYPES\n",
        "USER",
        "START",
        "END",
        "DURATION",
        "EVENTS",
        uw = user_width
    );
    for s in sessions {
        out.push_str(&format!(
            "{:<uw$}  {:<19}  {:<19}  {:>8}  {:>6}  {}\n",
            s.user_id,
            format_ts(s.start_ts),
            format_ts(s.end_ts),
            format_duration(s.duration_seconds()),
            s.event_count,
            s.types.join(","),
            uw = user_width
        ));
    }
    out
}

/// Format a unix timestamp as UTC `YYYY-MM-DD HH:MM:SS`, or the raw number
/// when it is outside chrono's range.
pub fn format_ts(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Format seconds as `H:MM:SS`.
pub fn format_duration(seconds: u64) -> String {
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Multi-line human-readable statistics summary.
pub fn render_stats(stats: &SessionStats) -> String {
    let mut out = format!(
        "sessions: {}  events: {}  users: {}  mean events/session: {:.2}  longest: {}\n",
        stats.total_sessions,
        stats.total_events,
        stats.distinct_users(),
        stats.mean_events_per_session(),
        format_duration(stats.longest_session_seconds),
    );
    for (user, user_stats) in &stats.per_user {
        out.push_str(&format!(
            "  {}: {} sessions, {} events, {} active\n",
            user,
            user_stats.sessions,
            user_stats.events,
            format_duration(user_stats.active_seconds),
        ));
    }
    out
}

// ── Writing ────────────────────────────────────────────────────────────────────

/// Write `content` to `path`, or to stdout when `path` is `None`.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write output to {}", path.display())),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.flush()?;
            Ok(())
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
