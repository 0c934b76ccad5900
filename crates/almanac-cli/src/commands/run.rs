use std::path::Path;
use std::sync::{Arc, PoisonError};
use std::time::Duration;

use colored::Colorize;

use almanac_core::SessionSnapshot;
use almanac_driver::{ClockDriver, DriverConfig, SharedEngine, shared};

pub fn run(
    file: &Path,
    ticks: Option<u64>,
    period_ms: u64,
    step: u64,
    seed: Option<u64>,
) -> Result<(), String> {
    let mut snapshot = super::load_session(file)?;
    let engine = shared(super::engine_for(&snapshot, seed));
    let config = DriverConfig::default()
        .with_period(Duration::from_millis(period_ms))
        .with_seconds_per_tick(step);

    println!(
        "  {} {}",
        "Time flows".bold(),
        match ticks {
            Some(n) => format!("for {n} ticks"),
            None => "until Ctrl-C".to_string(),
        }
        .dimmed()
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("cannot start runtime: {e}"))?;
    runtime.block_on(flow(&engine, config, ticks))?;

    write_back(&engine, &mut snapshot);
    super::save_session(&snapshot, file)?;
    println!("  {} saved to {}", "Halted,".bold(), file.display());

    Ok(())
}

/// Run the driver, printing each tick, until the tick budget or Ctrl-C.
async fn flow(
    engine: &SharedEngine,
    config: DriverConfig,
    ticks: Option<u64>,
) -> Result<(), String> {
    let mut driver = ClockDriver::new(Arc::clone(engine), config);
    if ticks == Some(0) {
        return Ok(());
    }

    let mut rx = driver.subscribe();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    driver.start();

    loop {
        tokio::select! {
            changed = rx.changed() => {
                changed.map_err(|e| format!("clock driver stopped unexpectedly: {e}"))?;
                let state = rx.borrow_and_update().clone();
                println!("  {state}");
                let calls = engine.lock().unwrap_or_else(PoisonError::into_inner).calls();
                if ticks.is_some_and(|n| calls >= n) {
                    break;
                }
            }
            _ = &mut ctrl_c => {
                println!();
                break;
            }
        }
    }

    driver.stop();
    Ok(())
}

fn write_back(engine: &SharedEngine, snapshot: &mut SessionSnapshot) {
    engine
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .write_snapshot(snapshot);
}
