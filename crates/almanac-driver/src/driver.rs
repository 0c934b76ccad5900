//! The repeating timer that advances the clock while it is running.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use almanac_core::{AdvanceOutcome, CalendarEngine, CalendarState};

use crate::config::DriverConfig;

/// A calendar engine shared between the driver task and manual callers.
pub type SharedEngine = Arc<Mutex<CalendarEngine>>;

/// Wrap an engine for use with a [`ClockDriver`].
pub fn shared(engine: CalendarEngine) -> SharedEngine {
    Arc::new(Mutex::new(engine))
}

fn lock(engine: &SharedEngine) -> MutexGuard<'_, CalendarEngine> {
    engine.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A running tick task and its cancellation flag.
struct Ticker {
    handle: JoinHandle<()>,
    cancelled: Arc<AtomicBool>,
}

/// Drives a [`CalendarEngine`] forward on a fixed wall-clock interval.
///
/// The driver owns its timer task. [`ClockDriver::stop`] cancels it, and so
/// does dropping the driver, so a torn-down host never leaves a timer behind.
/// Every tick and every manual advance goes through the same engine lock and
/// the same [`CalendarEngine::advance`] path, so calls are never interleaved.
pub struct ClockDriver {
    engine: SharedEngine,
    config: DriverConfig,
    state_tx: watch::Sender<CalendarState>,
    ticker: Option<Ticker>,
}

impl std::fmt::Debug for ClockDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockDriver")
            .field("config", &self.config)
            .field("running", &self.is_running())
            .finish()
    }
}

impl ClockDriver {
    /// Create a stopped driver for the given engine.
    pub fn new(engine: SharedEngine, config: DriverConfig) -> Self {
        let initial = lock(&engine).state().clone();
        let (state_tx, _) = watch::channel(initial);
        Self {
            engine,
            config,
            state_tx,
            ticker: None,
        }
    }

    /// The engine this driver advances.
    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    /// The driver configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Receive the calendar state after every tick or manual advance.
    pub fn subscribe(&self) -> watch::Receiver<CalendarState> {
        self.state_tx.subscribe()
    }

    /// Whether the timer task is active.
    pub fn is_running(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|t| !t.handle.is_finished())
    }

    /// Start ticking. The first tick fires one period from now.
    ///
    /// Does nothing if the driver is already running. Must be called from
    /// within a tokio runtime.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let engine = Arc::clone(&self.engine);
        let state_tx = self.state_tx.clone();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let period = self.config.period;
        let step = self.config.seconds_per_tick;

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let state = {
                    let mut engine = lock(&engine);
                    // Checked under the lock so that no tick lands after stop() returns.
                    if flag.load(Ordering::SeqCst) {
                        return;
                    }
                    engine.advance(step);
                    engine.state().clone()
                };
                state_tx.send_replace(state);
            }
        });

        tracing::info!(
            period_ms = period.as_millis() as u64,
            seconds_per_tick = step,
            "clock driver started"
        );
        self.ticker = Some(Ticker { handle, cancelled });
    }

    /// Stop ticking. No tick is applied after this returns.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancelled.store(true, Ordering::SeqCst);
            // Wait out a tick that may be holding the lock right now.
            drop(lock(&self.engine));
            ticker.handle.abort();
            tracing::info!("clock driver stopped");
        }
    }

    /// Flip between running and stopped. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.is_running()
    }

    /// Advance the engine immediately, outside the timer.
    pub fn advance_now(&self, delta: u64) -> AdvanceOutcome {
        let (outcome, state) = {
            let mut engine = lock(&self.engine);
            let outcome = engine.advance(delta);
            (outcome, engine.state().clone())
        };
        self.state_tx.send_replace(state);
        outcome
    }

    /// A copy of the current calendar state.
    pub fn state(&self) -> CalendarState {
        lock(&self.engine).state().clone()
    }
}

impl Drop for ClockDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
