pub mod advance;
pub mod init;
pub mod run;
pub mod show;
pub mod weather;

use std::path::Path;

use colored::Colorize;
use rand::Rng;

use almanac_core::{CalendarEngine, CalendarState, EngineConfig, SessionSnapshot};

/// Load a session file, turning errors into CLI messages.
fn load_session(file: &Path) -> Result<SessionSnapshot, String> {
    SessionSnapshot::load(file).map_err(|e| format!("cannot load '{}': {e}", file.display()))
}

/// Save a session file, turning errors into CLI messages.
fn save_session(snapshot: &SessionSnapshot, file: &Path) -> Result<(), String> {
    snapshot
        .save(file)
        .map_err(|e| format!("cannot save '{}': {e}", file.display()))
}

/// Build an engine positioned at the snapshot's calendar.
fn engine_for(snapshot: &SessionSnapshot, seed: Option<u64>) -> CalendarEngine {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut engine = CalendarEngine::new(EngineConfig::default().with_seed(seed));
    if !engine.load_snapshot(snapshot) {
        tracing::warn!("session has no gameTime, starting at the campaign epoch");
    }
    engine
}

/// Print the clock face for a calendar state.
fn print_state(state: &CalendarState) {
    let sky = if state.is_day() { "☀️" } else { "🌙" };
    println!("  {sky}  {}", state.clock_12h().bold());
    println!("  {}", state.date_line());
    println!(
        "  {} {} | {}",
        "Season:".dimmed(),
        state.season(),
        state.time_of_day()
    );
    println!(
        "  {} {} {} {}",
        "Weather:".dimmed(),
        state.weather_kind().glyph(),
        state.weather_label().yellow(),
        format!("(roll {})", state.weather_roll_label()).dimmed()
    );
}
