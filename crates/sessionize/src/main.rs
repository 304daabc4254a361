mod bootstrap;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use sessionize_core::models::Event;
use sessionize_core::settings::Settings;
use sessionize_data::reader::{load_from_paths, read_events};
use sessionize_data::stats::SessionStats;
use sessionize_data::SessionBuilder;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("sessionize v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Gap: {}s, Format: {}, Inputs: {}",
        settings.gap_seconds,
        settings.format,
        settings.inputs.len()
    );

    run(&settings, std::io::stdin().lock())
}

/// Load events, build sessions and write them out. `stdin` is only read when
/// the settings ask for it.
fn run<R: std::io::Read>(settings: &Settings, stdin: R) -> Result<()> {
    let events = load_input(settings, stdin)?;

    let builder = SessionBuilder::new(settings.gap_seconds);
    let sessions = builder.build(&events);
    tracing::info!(
        "Built {} sessions from {} events",
        sessions.len(),
        events.len()
    );

    if settings.stats {
        let stats = SessionStats::from_sessions(&sessions);
        eprint!("{}", output::render_stats(&stats));
    }

    let rendered = output::render(&sessions, &settings.format, settings.pretty)?;
    output::write_output(settings.output.as_deref(), &rendered)
}

fn load_input<R: std::io::Read>(settings: &Settings, stdin: R) -> Result<Vec<Event>> {
    let paths: Vec<PathBuf> = settings
        .inputs
        .iter()
        .filter(|p| p.as_os_str() != "-")
        .cloned()
        .collect();

    let mut events = load_from_paths(&paths).context("Failed to load events")?;

    if settings.reads_stdin() {
        tracing::debug!("Reading events from stdin");
        events.extend(read_events(stdin).context("Failed to read events from stdin")?);
    }

    Ok(events)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
