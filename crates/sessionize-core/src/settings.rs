use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Default maximum gap, in seconds, between consecutive events of a session.
pub const DEFAULT_GAP_SECONDS: u64 = 600;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Group timestamped user events into per-user sessions
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sessionize",
    about = "Group timestamped user events into per-user sessions",
    version
)]
pub struct Settings {
    /// Event files or directories (JSON array or JSONL); `-` or none reads stdin
    pub inputs: Vec<PathBuf>,

    /// Largest gap in seconds that keeps two events in the same session
    #[arg(long, default_value_t = DEFAULT_GAP_SECONDS)]
    pub gap_seconds: u64,

    /// Output format
    #[arg(long, default_value = "json", value_parser = ["json", "jsonl", "table"])]
    pub format: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write output to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Log a statistics summary after building sessions
    #[arg(long)]
    pub stats: bool,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments.
    pub fn load() -> Self {
        Self::parse()
    }

    /// Parse an explicit argument list, enabling unit tests without
    /// spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// The level to log at; `--debug` overrides `--log-level`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }

    /// `true` when events should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.inputs.is_empty() || self.inputs.iter().any(|p| p.as_os_str() == "-")
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
