use std::path::Path;

use colored::Colorize;

use almanac_core::{Milestone, format_delta, parse_delta};

pub fn run(file: &Path, delta: &str, seed: Option<u64>) -> Result<(), String> {
    let seconds = parse_delta(delta).map_err(|e| e.to_string())?;

    let mut snapshot = super::load_session(file)?;
    let mut engine = super::engine_for(&snapshot, seed);
    let outcome = engine.advance(seconds);
    engine.write_snapshot(&mut snapshot);
    super::save_session(&snapshot, file)?;

    println!("  {} {}", "Advanced".bold(), format_delta(outcome.delta));
    for milestone in outcome.milestones() {
        let text = milestone.to_string();
        let line = match milestone {
            Milestone::Weather(_) => text.yellow(),
            Milestone::NewYear { .. } => text.green().bold(),
            _ => text.normal(),
        };
        println!("  {} {line}", "•".dimmed());
    }
    println!();
    super::print_state(engine.state());

    Ok(())
}
