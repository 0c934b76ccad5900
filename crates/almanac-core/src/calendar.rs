//! The in-world calendar state and its odometer-style advancement.
//!
//! Uses a stylized 360-day year (12 months x 30 days) so every unit has a
//! fixed radix. Advancing carries overflow strictly bottom-up: seconds into
//! minutes, minutes into hours, and so on up to years.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{AlmanacError, AlmanacResult};
use crate::weather::{WEATHER_DIE, WeatherRoll};

/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: u64 = 60;
/// Minutes in an hour.
pub const MINUTES_PER_HOUR: u64 = 60;
/// Hours in a day.
pub const HOURS_PER_DAY: u64 = 24;
/// Days in a month. Every month has exactly this many.
pub const DAYS_PER_MONTH: u64 = 30;
/// Months in a year.
pub const MONTHS_PER_YEAR: u64 = 12;

/// Seconds in an hour.
pub const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
/// Seconds in a day.
pub const SECONDS_PER_DAY: u64 = SECONDS_PER_HOUR * HOURS_PER_DAY;
/// Seconds in a month.
pub const SECONDS_PER_MONTH: u64 = SECONDS_PER_DAY * DAYS_PER_MONTH;
/// Seconds in a year.
pub const SECONDS_PER_YEAR: u64 = SECONDS_PER_MONTH * MONTHS_PER_YEAR;

/// Year of the default campaign epoch.
pub const EPOCH_YEAR: i64 = 124;
/// Hour of day of the default campaign epoch.
pub const EPOCH_HOUR: u32 = 8;

/// A structured in-world timestamp plus the current weather.
///
/// All bounded fields are zero-indexed. Construct through [`CalendarState::new`]
/// or deserialization, both of which enforce the field ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCalendarState")]
pub struct CalendarState {
    seconds: u32,
    minutes: u32,
    hours: u32,
    days: u32,
    months: u32,
    years: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    weather: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weather_roll: Option<u32>,
}

impl Default for CalendarState {
    fn default() -> Self {
        Self::epoch()
    }
}

impl CalendarState {
    /// Create a state from its six time fields, with no weather rolled yet.
    pub fn new(
        seconds: u32,
        minutes: u32,
        hours: u32,
        days: u32,
        months: u32,
        years: i64,
    ) -> AlmanacResult<Self> {
        check_fields([seconds, minutes, hours, days, months].map(i64::from))
            .map_err(AlmanacError::InvalidArgument)?;
        Ok(Self {
            seconds,
            minutes,
            hours,
            days,
            months,
            years,
            weather: None,
            weather_roll: None,
        })
    }

    /// The default campaign epoch: hour 8 of the first day of year 124.
    pub fn epoch() -> Self {
        Self {
            seconds: 0,
            minutes: 0,
            hours: EPOCH_HOUR,
            days: 0,
            months: 0,
            years: EPOCH_YEAR,
            weather: None,
            weather_roll: None,
        }
    }

    /// Attach a weather label and the roll that produced it.
    pub fn with_weather(mut self, label: impl Into<String>, roll: u32) -> AlmanacResult<Self> {
        if !(1..=WEATHER_DIE).contains(&roll) {
            return Err(AlmanacError::InvalidArgument(format!(
                "weather roll {roll} is outside 1..={WEATHER_DIE}"
            )));
        }
        self.weather = Some(label.into());
        self.weather_roll = Some(roll);
        Ok(self)
    }

    /// Rebuild a state from a total elapsed-seconds count. Carries no weather.
    pub fn from_total_seconds(total: i128) -> Self {
        let year_len = i128::from(SECONDS_PER_YEAR);
        let years = total.div_euclid(year_len);
        let mut rest = total.rem_euclid(year_len) as u64;

        let months = rest / SECONDS_PER_MONTH;
        rest %= SECONDS_PER_MONTH;
        let days = rest / SECONDS_PER_DAY;
        rest %= SECONDS_PER_DAY;
        let hours = rest / SECONDS_PER_HOUR;
        rest %= SECONDS_PER_HOUR;
        let minutes = rest / SECONDS_PER_MINUTE;
        let seconds = rest % SECONDS_PER_MINUTE;

        Self {
            seconds: seconds as u32,
            minutes: minutes as u32,
            hours: hours as u32,
            days: days as u32,
            months: months as u32,
            years: years.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64,
            weather: None,
            weather_roll: None,
        }
    }

    /// Total elapsed seconds since year 0, month 0, day 0, midnight.
    pub fn total_seconds(&self) -> i128 {
        i128::from(self.years) * i128::from(SECONDS_PER_YEAR)
            + i128::from(self.months) * i128::from(SECONDS_PER_MONTH)
            + i128::from(self.days) * i128::from(SECONDS_PER_DAY)
            + i128::from(self.hours) * i128::from(SECONDS_PER_HOUR)
            + i128::from(self.minutes) * i128::from(SECONDS_PER_MINUTE)
            + i128::from(self.seconds)
    }

    /// Second of the minute (0-59).
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Minute of the hour (0-59).
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Hour of the day (0-23).
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Day of the month (0-29).
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Month of the year (0-11).
    pub fn months(&self) -> u32 {
        self.months
    }

    /// The year.
    pub fn years(&self) -> i64 {
        self.years
    }

    /// The current weather label, if any has been rolled.
    pub fn weather(&self) -> Option<&str> {
        self.weather.as_deref()
    }

    /// The d20 roll that produced the current weather.
    pub fn weather_roll(&self) -> Option<u32> {
        self.weather_roll
    }

    /// Advance by `delta` seconds, returning the new state and the weather
    /// roll if one was triggered.
    ///
    /// Weather is re-rolled at most once per call, and only when the
    /// day-of-month after all carries differs from the day before the call.
    /// A jump of several days still rolls once; a jump of a whole number of
    /// months lands on the same day-of-month and rolls nothing.
    pub fn advance(&self, delta: u64, rng: &mut StdRng) -> (Self, Option<WeatherRoll>) {
        let mut next = self.carried(delta);

        if next.days == self.days {
            return (next, None);
        }

        let roll = WeatherRoll::roll(next.months, rng);
        tracing::debug!(
            day = next.days + 1,
            month = next.months + 1,
            year = next.years,
            roll = roll.roll,
            weather = %roll.label,
            "day changed, weather re-rolled"
        );
        next.weather = Some(roll.label.clone());
        next.weather_roll = Some(roll.roll);
        (next, Some(roll))
    }

    /// Apply `delta` seconds with fixed-radix carries, leaving weather untouched.
    pub fn carried(&self, delta: u64) -> Self {
        // Widened so that a delta near u64::MAX loses no seconds.
        let seconds = u128::from(self.seconds) + u128::from(delta);

        let minutes = u128::from(self.minutes) + seconds / u128::from(SECONDS_PER_MINUTE);
        let seconds = seconds % u128::from(SECONDS_PER_MINUTE);

        let hours = u128::from(self.hours) + minutes / u128::from(MINUTES_PER_HOUR);
        let minutes = minutes % u128::from(MINUTES_PER_HOUR);

        let days = u128::from(self.days) + hours / u128::from(HOURS_PER_DAY);
        let hours = hours % u128::from(HOURS_PER_DAY);

        let months = u128::from(self.months) + days / u128::from(DAYS_PER_MONTH);
        let days = days % u128::from(DAYS_PER_MONTH);

        let year_carry = i64::try_from(months / u128::from(MONTHS_PER_YEAR)).unwrap_or(i64::MAX);
        let months = months % u128::from(MONTHS_PER_YEAR);

        Self {
            seconds: seconds as u32,
            minutes: minutes as u32,
            hours: hours as u32,
            days: days as u32,
            months: months as u32,
            years: self.years.saturating_add(year_carry),
            weather: self.weather.clone(),
            weather_roll: self.weather_roll,
        }
    }
}

/// Check seconds, minutes, hours, days, and months against their radix.
fn check_fields(values: [i64; 5]) -> Result<(), String> {
    const FIELDS: [(&str, u64); 5] = [
        ("seconds", SECONDS_PER_MINUTE),
        ("minutes", MINUTES_PER_HOUR),
        ("hours", HOURS_PER_DAY),
        ("days", DAYS_PER_MONTH),
        ("months", MONTHS_PER_YEAR),
    ];
    for ((field, radix), value) in FIELDS.iter().zip(values) {
        if value < 0 || value as u64 >= *radix {
            return Err(format!("{field} = {value} is outside 0..{radix}"));
        }
    }
    Ok(())
}

/// Unvalidated wire form of [`CalendarState`].
///
/// Signed fields so that negative values are reported as range errors
/// rather than opaque type errors.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCalendarState {
    seconds: i64,
    minutes: i64,
    hours: i64,
    days: i64,
    months: i64,
    years: i64,
    #[serde(default)]
    weather: Option<String>,
    #[serde(default)]
    weather_roll: Option<i64>,
}

impl TryFrom<RawCalendarState> for CalendarState {
    type Error = AlmanacError;

    fn try_from(raw: RawCalendarState) -> Result<Self, Self::Error> {
        check_fields([raw.seconds, raw.minutes, raw.hours, raw.days, raw.months])
            .map_err(AlmanacError::InvalidSessionFormat)?;

        let state = Self {
            seconds: raw.seconds as u32,
            minutes: raw.minutes as u32,
            hours: raw.hours as u32,
            days: raw.days as u32,
            months: raw.months as u32,
            years: raw.years,
            weather: None,
            weather_roll: None,
        };

        match (raw.weather, raw.weather_roll) {
            (None, None) => Ok(state),
            (Some(label), Some(roll)) if (1..=i64::from(WEATHER_DIE)).contains(&roll) => Ok(Self {
                weather: Some(label),
                weather_roll: Some(roll as u32),
                ..state
            }),
            (Some(_), Some(roll)) => Err(AlmanacError::InvalidSessionFormat(format!(
                "weatherRoll = {roll} is outside 1..={WEATHER_DIE}"
            ))),
            (Some(_), None) => Err(AlmanacError::InvalidSessionFormat(
                "weather is set but weatherRoll is missing".to_string(),
            )),
            (None, Some(_)) => Err(AlmanacError::InvalidSessionFormat(
                "weatherRoll is set but weather is missing".to_string(),
            )),
        }
    }
}
