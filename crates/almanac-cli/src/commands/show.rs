use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path) -> Result<(), String> {
    let snapshot = super::load_session(file)?;
    let Some(state) = snapshot.game_time else {
        return Err(format!("'{}' has no gameTime", file.display()));
    };

    println!("  {}", "Chronicles of Time".bold().underline());
    super::print_state(&state);

    Ok(())
}
