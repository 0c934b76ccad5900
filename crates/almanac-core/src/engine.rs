use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::calendar::CalendarState;
use crate::config::EngineConfig;
use crate::delta::{Shortcut, non_negative};
use crate::error::AlmanacResult;
use crate::snapshot::SessionSnapshot;
use crate::weather::WeatherRoll;

/// A calendar boundary crossed during one advance call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Milestone {
    /// A new day-of-month began.
    Dawn {
        /// Zero-indexed day of the month.
        day: u32,
        /// Zero-indexed month.
        month: u32,
    },
    /// A new month began.
    NewMonth {
        /// Zero-indexed month.
        month: u32,
    },
    /// A new year began.
    NewYear {
        /// The year.
        year: i64,
    },
    /// The weather was re-rolled.
    Weather(WeatherRoll),
}

impl std::fmt::Display for Milestone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dawn { day, month } => {
                write!(f, "Day {} of {} dawns", day + 1, month_name(*month))
            }
            Self::NewMonth { month } => write!(f, "The month of {} begins", month_name(*month)),
            Self::NewYear { year } => write!(f, "Year {year} begins"),
            Self::Weather(roll) => write!(f, "Weather turns to {roll}"),
        }
    }
}

fn month_name(month: u32) -> &'static str {
    crate::display::MONTH_NAMES[(month % 12) as usize]
}

/// What a single advance call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceOutcome {
    /// The 1-based number of this advance call.
    pub call: u64,
    /// Seconds advanced.
    pub delta: u64,
    /// State before the call.
    pub before: CalendarState,
    /// State after the call.
    pub after: CalendarState,
    /// The weather roll, if the day changed.
    pub weather: Option<WeatherRoll>,
}

impl AdvanceOutcome {
    /// Whether the day-of-month changed, and with it the weather.
    pub fn day_changed(&self) -> bool {
        self.before.days() != self.after.days()
    }

    /// Boundaries crossed by this call, finest unit first, then the weather roll.
    pub fn milestones(&self) -> Vec<Milestone> {
        let (before, after) = (&self.before, &self.after);
        let mut out = Vec::new();
        if self.day_changed() {
            out.push(Milestone::Dawn {
                day: after.days(),
                month: after.months(),
            });
        }
        if (after.years(), after.months()) != (before.years(), before.months()) {
            out.push(Milestone::NewMonth {
                month: after.months(),
            });
        }
        if after.years() != before.years() {
            out.push(Milestone::NewYear {
                year: after.years(),
            });
        }
        out.extend(self.weather.clone().map(Milestone::Weather));
        out
    }
}

/// The calendar engine.
///
/// Owns the current [`CalendarState`] and the RNG used for weather rolls.
/// All time passes through [`CalendarEngine::advance`],
/// whether it comes from a one-second timer tick or an eight-hour rest.
pub struct CalendarEngine {
    state: CalendarState,
    rng: StdRng,
    calls: u64,
}

impl std::fmt::Debug for CalendarEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarEngine")
            .field("state", &self.state)
            .field("calls", &self.calls)
            .finish()
    }
}

impl Default for CalendarEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CalendarEngine {
    /// Create an engine from a configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            state: config.epoch,
            rng: StdRng::seed_from_u64(config.seed),
            calls: 0,
        }
    }

    /// The current calendar state.
    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    /// Number of advance calls made.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Advance the clock by `delta` seconds.
    pub fn advance(&mut self, delta: u64) -> AdvanceOutcome {
        self.calls += 1;
        let (after, weather) = self.state.advance(delta, &mut self.rng);
        let before = std::mem::replace(&mut self.state, after.clone());

        AdvanceOutcome {
            call: self.calls,
            delta,
            before,
            after,
            weather,
        }
    }

    /// Advance by a signed delta. Negative deltas are rejected.
    pub fn advance_signed(&mut self, delta: i64) -> AlmanacResult<AdvanceOutcome> {
        let delta = non_negative(delta)?;
        Ok(self.advance(delta))
    }

    /// Advance by a named shortcut.
    pub fn apply(&mut self, shortcut: Shortcut) -> AdvanceOutcome {
        tracing::debug!(%shortcut, seconds = shortcut.seconds(), "applying shortcut");
        self.advance(shortcut.seconds())
    }

    /// Replace the current state with the snapshot's, if it carries one.
    ///
    /// Returns whether the state was replaced.
    pub fn load_snapshot(&mut self, snapshot: &SessionSnapshot) -> bool {
        match &snapshot.game_time {
            Some(state) => {
                self.state = state.clone();
                true
            }
            None => false,
        }
    }

    /// Store the current state into a snapshot, keeping its other fields.
    pub fn write_snapshot(&self, snapshot: &mut SessionSnapshot) {
        snapshot.game_time = Some(self.state.clone());
    }
}
