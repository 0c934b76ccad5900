//! Human-facing views of a [`CalendarState`]: month names, 12-hour clock,
//! time-of-day phases, and weather fallbacks.

use crate::calendar::CalendarState;
use crate::weather::{Season, WeatherKind, season_of};

/// Names of the twelve months, zero-indexed.
pub const MONTH_NAMES: [&str; 12] = [
    "Dragon's Rise",
    "Peach Blossom",
    "Vernal Rain",
    "Radiant Sun",
    "Cicada's Song",
    "Azure Lotus",
    "Harvest Moon",
    "Golden Mum",
    "Frosty Descent",
    "Sleeping Tiger",
    "Silver Pine",
    "Great Void",
];

/// Label shown before any weather has been rolled.
pub const CALM_SKIES: &str = "Calm Skies";

/// Coarse phase of the day, used for sky colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    /// 05:00 - 07:59
    Dawn,
    /// 08:00 - 15:59
    Day,
    /// 16:00 - 18:59
    GoldenHour,
    /// 19:00 - 20:59
    Twilight,
    /// 21:00 - 04:59
    Night,
}

impl TimeOfDay {
    /// Phase for an hour of the day (0-23).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=7 => Self::Dawn,
            8..=15 => Self::Day,
            16..=18 => Self::GoldenHour,
            19..=20 => Self::Twilight,
            _ => Self::Night,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dawn => write!(f, "Dawn"),
            Self::Day => write!(f, "Day"),
            Self::GoldenHour => write!(f, "Golden Hour"),
            Self::Twilight => write!(f, "Twilight"),
            Self::Night => write!(f, "Night"),
        }
    }
}

impl CalendarState {
    /// Name of the current month.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.months() % 12) as usize]
    }

    /// Season of the current month.
    pub fn season(&self) -> Season {
        season_of(self.months())
    }

    /// Whether the sun is up (06:00 - 17:59).
    pub fn is_day(&self) -> bool {
        (6..18).contains(&self.hours())
    }

    /// Current phase of the day.
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.hours())
    }

    /// 12-hour clock, e.g. `08:05:09 AM`.
    pub fn clock_12h(&self) -> String {
        let h = self.hours();
        let display = match h % 12 {
            0 => 12,
            n => n,
        };
        let ampm = if h >= 12 { "PM" } else { "AM" };
        format!(
            "{display:02}:{:02}:{:02} {ampm}",
            self.minutes(),
            self.seconds()
        )
    }

    /// One-based date line, e.g. `Dragon's Rise • Day 1 • Year 124`.
    pub fn date_line(&self) -> String {
        format!(
            "{} • Day {} • Year {}",
            self.month_name(),
            self.days() + 1,
            self.years()
        )
    }

    /// Weather label, or [`CALM_SKIES`] before the first roll.
    pub fn weather_label(&self) -> &str {
        self.weather().unwrap_or(CALM_SKIES)
    }

    /// Weather roll as text, or `--` before the first roll.
    pub fn weather_roll_label(&self) -> String {
        self.weather_roll()
            .map_or_else(|| "--".to_string(), |r| r.to_string())
    }

    /// Weather category of the current label.
    pub fn weather_kind(&self) -> WeatherKind {
        WeatherKind::classify(self.weather())
    }
}

impl std::fmt::Display for CalendarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} {} (roll {})",
            self.clock_12h(),
            self.date_line(),
            self.weather_kind().glyph(),
            self.weather_label(),
            self.weather_roll_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: u32, mi: u32, h: u32) -> CalendarState {
        CalendarState::new(s, mi, h, 0, 0, 124).unwrap()
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(at(0, 0, 0).clock_12h(), "12:00:00 AM");
        assert_eq!(at(9, 5, 8).clock_12h(), "08:05:09 AM");
        assert_eq!(at(0, 0, 12).clock_12h(), "12:00:00 PM");
        assert_eq!(at(59, 59, 23).clock_12h(), "11:59:59 PM");
    }

    #[test]
    fn day_and_night() {
        assert!(!at(0, 0, 5).is_day());
        assert!(at(0, 0, 6).is_day());
        assert!(at(0, 0, 17).is_day());
        assert!(!at(0, 0, 18).is_day());
    }

    #[test]
    fn time_of_day_phases() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Dawn);
        assert_eq!(TimeOfDay::from_hour(8), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::GoldenHour);
        assert_eq!(TimeOfDay::from_hour(19), TimeOfDay::Twilight);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Night);
    }

    #[test]
    fn month_names_and_seasons() {
        let s = CalendarState::new(0, 0, 0, 14, 9, 124).unwrap();
        assert_eq!(s.month_name(), "Sleeping Tiger");
        assert_eq!(s.season(), Season::Winter);
        assert_eq!(s.date_line(), "Sleeping Tiger • Day 15 • Year 124");
    }

    #[test]
    fn weather_fallbacks() {
        let s = CalendarState::epoch();
        assert_eq!(s.weather_label(), "Calm Skies");
        assert_eq!(s.weather_roll_label(), "--");
        assert_eq!(s.weather_kind(), WeatherKind::Mist);
    }

    #[test]
    fn display_line() {
        let s = CalendarState::new(0, 30, 20, 4, 6, 130)
            .unwrap()
            .with_weather("Hot", 19)
            .unwrap();
        insta::assert_snapshot!(s.to_string(), @"08:30:00 PM | Harvest Moon • Day 5 • Year 130 | 🔥 Hot (roll 19)");
    }
}
