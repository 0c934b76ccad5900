//! In-world calendar clock and seasonal weather oracle for Almanac.
//!
//! A [`CalendarEngine`] owns a [`CalendarState`] (seconds through years on a
//! fixed 60/60/24/30/12 radix) and advances it by arbitrary second deltas.
//! Whenever an advance leaves the day-of-month different from where it
//! started, the engine rolls a d20 against the current season's weather
//! table. State is persisted as the `gameTime` field of a session snapshot.

/// Calendar state, unit constants, and carry arithmetic.
pub mod calendar;
/// Configuration for the calendar engine.
pub mod config;
/// Shortcuts and text parsing for time deltas.
pub mod delta;
/// Month names, 12-hour clock, and other presentation helpers.
pub mod display;
/// The calendar engine that owns state and RNG.
pub mod engine;
/// Error types for the calendar core.
pub mod error;
/// Session snapshot load and save.
pub mod snapshot;
/// Seasons, weather tables, and the weather die.
pub mod weather;

/// Re-export of [`calendar::CalendarState`].
pub use calendar::CalendarState;
/// Re-export of [`config::EngineConfig`].
pub use config::EngineConfig;
/// Re-exports of [`delta::Shortcut`], [`delta::format_delta`], and [`delta::parse_delta`].
pub use delta::{Shortcut, format_delta, parse_delta};
/// Re-exports of [`engine::AdvanceOutcome`], [`engine::CalendarEngine`], and [`engine::Milestone`].
pub use engine::{AdvanceOutcome, CalendarEngine, Milestone};
/// Re-exports of [`error::AlmanacError`] and [`error::AlmanacResult`].
pub use error::{AlmanacError, AlmanacResult};
/// Re-export of [`snapshot::SessionSnapshot`].
pub use snapshot::SessionSnapshot;
/// Re-exports of the weather oracle types and functions.
pub use weather::{Season, WeatherKind, WeatherRoll, roll_weather, season_of};
