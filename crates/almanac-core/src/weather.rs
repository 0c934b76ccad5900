//! Seasonal weather oracle.
//!
//! Each season has a six-band d20 table. A roll selects the first band whose
//! upper threshold is at or above it. The die itself is rolled by the caller
//! (see [`roll_d20`]); [`roll_weather`] is a pure table lookup.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Number of faces on the weather die.
pub const WEATHER_DIE: u32 = 20;

/// One of the four three-month seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Months 0-2.
    Spring,
    /// Months 3-5.
    Summer,
    /// Months 6-8.
    Autumn,
    /// Months 9-11.
    Winter,
}

impl Season {
    /// All seasons in calendar order.
    pub fn all() -> &'static [Self] {
        &[Self::Spring, Self::Summer, Self::Autumn, Self::Winter]
    }

    /// Parse a season from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" | "fall" => Some(Self::Autumn),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }

    /// The weather table for this season.
    pub fn table(self) -> &'static [WeatherBand] {
        match self {
            Self::Spring => &SPRING,
            Self::Summer => &SUMMER,
            Self::Autumn => &AUTUMN,
            Self::Winter => &WINTER,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spring => write!(f, "Spring"),
            Self::Summer => write!(f, "Summer"),
            Self::Autumn => write!(f, "Autumn"),
            Self::Winter => write!(f, "Winter"),
        }
    }
}

/// A single row of a season's weather table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherBand {
    /// Highest roll (inclusive) that lands in this band.
    pub threshold_max: u32,
    /// The weather label for this band.
    pub label: &'static str,
}

const fn band(threshold_max: u32, label: &'static str) -> WeatherBand {
    WeatherBand {
        threshold_max,
        label,
    }
}

const SPRING: [WeatherBand; 6] = [
    band(1, "Sleet/Blizzard"),
    band(4, "Rain"),
    band(8, "Overcast"),
    band(11, "Clear Skies"),
    band(18, "Warm"),
    band(20, "Hot"),
];

const SUMMER: [WeatherBand; 6] = [
    band(2, "Rain"),
    band(5, "Overcast"),
    band(9, "Clear Skies"),
    band(14, "Warm"),
    band(18, "Hot"),
    band(20, "Scorching Hot"),
];

const AUTUMN: [WeatherBand; 6] = [
    band(3, "Cold"),
    band(7, "Rain"),
    band(11, "Overcast"),
    band(15, "Clear Skies"),
    band(19, "Warm"),
    band(20, "Hot"),
];

const WINTER: [WeatherBand; 6] = [
    band(5, "Sleet/Blizzard"),
    band(9, "Snow"),
    band(13, "Cold"),
    band(16, "Overcast"),
    band(19, "Clear Skies"),
    band(20, "Warm"),
];

/// Map a zero-indexed month to its season.
///
/// Months past 11 are reduced modulo 12.
pub fn season_of(month: u32) -> Season {
    match month % 12 {
        0..=2 => Season::Spring,
        3..=5 => Season::Summer,
        6..=8 => Season::Autumn,
        _ => Season::Winter,
    }
}

/// Look up the weather label for a roll in a season's table.
///
/// Rolls past the last threshold fall back to the last band.
pub fn roll_weather(season: Season, roll: u32) -> &'static str {
    let table = season.table();
    table
        .iter()
        .find(|b| b.threshold_max >= roll)
        .or_else(|| table.last())
        .map(|b| b.label)
        .unwrap_or_default()
}

/// Roll the weather die (1-20 inclusive).
pub fn roll_d20(rng: &mut StdRng) -> u32 {
    rng.random_range(1..=WEATHER_DIE)
}

/// The outcome of a weather roll: the die value and the label it selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRoll {
    /// The season the table was taken from.
    pub season: Season,
    /// The d20 value.
    pub roll: u32,
    /// The resulting label.
    pub label: String,
}

impl WeatherRoll {
    /// Roll the die and consult the table for `month`.
    pub fn roll(month: u32, rng: &mut StdRng) -> Self {
        let season = season_of(month);
        let roll = roll_d20(rng);
        Self {
            season,
            roll,
            label: roll_weather(season, roll).to_string(),
        }
    }
}

impl std::fmt::Display for WeatherRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, roll {})", self.label, self.season, self.roll)
    }
}

/// Broad weather category used for icons and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    /// Clear skies.
    Clear,
    /// Hot or scorching.
    Hot,
    /// Rain.
    Rain,
    /// Overcast.
    Overcast,
    /// Snow, sleet, or blizzard.
    Snow,
    /// Cold.
    Cold,
    /// Warm.
    Warm,
    /// Anything unrecognized, or no weather rolled yet.
    Mist,
}

impl WeatherKind {
    /// Classify a weather label by keyword.
    pub fn classify(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Self::Mist;
        };
        let w = label.to_lowercase();
        if w.contains("clear") {
            Self::Clear
        } else if w.contains("hot") {
            Self::Hot
        } else if w.contains("rain") {
            Self::Rain
        } else if w.contains("overcast") {
            Self::Overcast
        } else if w.contains("snow") || w.contains("sleet") || w.contains("blizzard") {
            Self::Snow
        } else if w.contains("cold") {
            Self::Cold
        } else if w.contains("warm") {
            Self::Warm
        } else {
            Self::Mist
        }
    }

    /// Glyph shown next to the weather label.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::Hot => "🔥",
            Self::Rain => "🌧️",
            Self::Overcast => "☁️",
            Self::Snow => "❄️",
            Self::Cold => "🥶",
            Self::Warm => "🌤️",
            Self::Mist => "🌫️",
        }
    }
}
