use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use almanac_core::weather::WEATHER_DIE;
use almanac_core::{Season, roll_weather};

pub fn run(season: Option<&str>, roll: Option<u32>) -> Result<(), String> {
    let seasons: Vec<Season> = match season {
        Some(name) => vec![Season::parse(name).ok_or_else(|| {
            format!("unknown season '{name}' (expected spring, summer, autumn, or winter)")
        })?],
        None => Season::all().to_vec(),
    };

    if let Some(r) = roll {
        if !(1..=WEATHER_DIE).contains(&r) {
            return Err(format!("roll must be between 1 and {WEATHER_DIE}, got {r}"));
        }
        for s in &seasons {
            println!("  {} {s}, roll {r}: {}", "Weather".bold(), roll_weather(*s, r).yellow());
        }
        return Ok(());
    }

    match seasons.as_slice() {
        [single] => print_bands(*single),
        _ => print_grid(&seasons),
    }
    Ok(())
}

/// One season: each band with its roll range.
fn print_bands(season: Season) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["d20", "Weather"]);

    let mut low = 1;
    for band in season.table() {
        let range = if low == band.threshold_max {
            low.to_string()
        } else {
            format!("{low}-{}", band.threshold_max)
        };
        table.add_row(vec![range, band.label.to_string()]);
        low = band.threshold_max + 1;
    }

    println!("  {} {season}", "Weather table:".bold());
    println!("{table}");
}

/// Several seasons side by side, one row per die face.
fn print_grid(seasons: &[Season]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["d20".to_string()];
    header.extend(seasons.iter().map(|s| s.to_string()));
    table.set_header(header);

    for r in 1..=WEATHER_DIE {
        let mut row = vec![r.to_string()];
        row.extend(seasons.iter().map(|s| roll_weather(*s, r).to_string()));
        table.add_row(row);
    }

    println!("{table}");
}
