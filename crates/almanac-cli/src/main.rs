//! CLI frontend for the Almanac campaign clock.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "almanac",
    about = "Almanac: an in-world clock and weather oracle for tabletop campaigns",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity (weather rolls, saves) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new session file at the campaign epoch
    Init {
        /// Session file to create
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Starting year
        #[arg(long, default_value = "124")]
        year: i64,

        /// Starting hour of day (0-23)
        #[arg(long, default_value = "8")]
        hour: u32,
    },

    /// Show the current time, date, and weather
    Show {
        /// Session file
        file: PathBuf,
    },

    /// Advance the clock and save the session
    Advance {
        /// Seconds (`90`), units (`10m`, `8h`, `1h30m`, `2d`), or a shortcut
        /// (`minute`, `hour`, `treat-wounds`, `rest`)
        #[arg(allow_hyphen_values = true)]
        delta: String,

        /// Session file
        file: PathBuf,

        /// RNG seed for the weather roll (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Let time flow in real time until stopped, then save
    Run {
        /// Session file
        file: PathBuf,

        /// Stop after this many ticks (default: run until Ctrl-C)
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Wall-clock milliseconds per tick
        #[arg(long, default_value = "1000")]
        period_ms: u64,

        /// In-world seconds per tick
        #[arg(long, default_value = "1")]
        step: u64,

        /// RNG seed for weather rolls (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the seasonal weather tables or look up a single roll
    Weather {
        /// Restrict to one season (spring, summer, autumn, winter)
        #[arg(long)]
        season: Option<String>,

        /// Look up a specific d20 roll
        #[arg(long)]
        roll: Option<u32>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "almanac_core=debug,almanac_driver=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init {
            file,
            force,
            year,
            hour,
        } => commands::init::run(&file, force, year, hour),
        Commands::Show { file } => commands::show::run(&file),
        Commands::Advance { delta, file, seed } => commands::advance::run(&file, &delta, seed),
        Commands::Run {
            file,
            ticks,
            period_ms,
            step,
            seed,
        } => commands::run::run(&file, ticks, period_ms, step, seed),
        Commands::Weather { season, roll } => commands::weather::run(season.as_deref(), roll),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
