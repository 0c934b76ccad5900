use std::path::Path;

use almanac_core::{CalendarState, SessionSnapshot};

pub fn run(file: &Path, force: bool, year: i64, hour: u32) -> Result<(), String> {
    if file.exists() && !force {
        return Err(format!(
            "'{}' already exists (use --force to overwrite)",
            file.display()
        ));
    }

    let epoch = CalendarState::new(0, 0, hour, 0, 0, year).map_err(|e| e.to_string())?;
    let snapshot = SessionSnapshot::new(epoch.clone());
    super::save_session(&snapshot, file)?;

    println!("Created session '{}'", file.display());
    super::print_state(&epoch);
    println!();
    println!("Get started:");
    println!("  almanac advance rest {}   # Rest for 8 hours", file.display());
    println!("  almanac run {}            # Let time flow", file.display());
    println!("  almanac show {}           # Check the sky", file.display());

    Ok(())
}
