//! Elapsed-time deltas: named shortcuts and a compact text form (`1h30m`).

use crate::calendar::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::{AlmanacError, AlmanacResult};

/// A named, fixed advancement used by quick-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// One minute.
    Minute,
    /// One hour.
    Hour,
    /// Ten minutes spent treating wounds.
    TreatWounds,
    /// An eight-hour rest.
    Rest,
}

impl Shortcut {
    /// All shortcuts, shortest first.
    pub fn all() -> &'static [Self] {
        &[Self::Minute, Self::TreatWounds, Self::Hour, Self::Rest]
    }

    /// Length of the shortcut in seconds.
    pub fn seconds(self) -> u64 {
        match self {
            Self::Minute => SECONDS_PER_MINUTE,
            Self::Hour => SECONDS_PER_HOUR,
            Self::TreatWounds => 10 * SECONDS_PER_MINUTE,
            Self::Rest => 8 * SECONDS_PER_HOUR,
        }
    }

    /// Parse a shortcut name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "minute" => Some(Self::Minute),
            "hour" => Some(Self::Hour),
            "treat-wounds" | "treat" => Some(Self::TreatWounds),
            "rest" => Some(Self::Rest),
            _ => None,
        }
    }
}

impl std::fmt::Display for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minute => write!(f, "+1 Min"),
            Self::Hour => write!(f, "+1 Hour"),
            Self::TreatWounds => write!(f, "Treat Wounds (10m)"),
            Self::Rest => write!(f, "Rest (8h)"),
        }
    }
}

/// Convert a signed delta to seconds, rejecting negative values.
pub fn non_negative(delta: i64) -> AlmanacResult<u64> {
    u64::try_from(delta).map_err(|_| {
        AlmanacError::InvalidArgument(format!("time cannot run backwards (delta {delta}s)"))
    })
}

/// Format seconds compactly, largest unit first, e.g. `1d 2h 3m 4s`.
pub fn format_delta(seconds: u64) -> String {
    if seconds == 0 {
        return "0s".to_string();
    }
    let parts = [
        (seconds / SECONDS_PER_DAY, "d"),
        (seconds % SECONDS_PER_DAY / SECONDS_PER_HOUR, "h"),
        (seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE, "m"),
        (seconds % SECONDS_PER_MINUTE, "s"),
    ];
    parts
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{n}{unit}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a delta such as `90`, `90s`, `10m`, `8h`, `2d`, `1h30m`, or a
/// shortcut name like `rest`.
pub fn parse_delta(input: &str) -> AlmanacResult<u64> {
    let text = input.trim();
    if text.is_empty() {
        return Err(AlmanacError::InvalidArgument("empty delta".to_string()));
    }
    if let Some(shortcut) = Shortcut::parse(text) {
        return Ok(shortcut.seconds());
    }
    if text.starts_with('-') {
        return Err(AlmanacError::InvalidArgument(format!(
            "time cannot run backwards: {text}"
        )));
    }

    let invalid = || AlmanacError::InvalidArgument(format!("invalid delta: {text}"));

    let mut total: u64 = 0;
    let mut digits = String::new();
    for c in text.to_lowercase().chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let unit = match c {
            's' => 1,
            'm' => SECONDS_PER_MINUTE,
            'h' => SECONDS_PER_HOUR,
            'd' => SECONDS_PER_DAY,
            _ => return Err(invalid()),
        };
        if digits.is_empty() {
            return Err(invalid());
        }
        let n: u64 = digits.parse().map_err(|_| invalid())?;
        total = n
            .checked_mul(unit)
            .and_then(|s| total.checked_add(s))
            .ok_or_else(invalid)?;
        digits.clear();
    }
    if !digits.is_empty() {
        let n: u64 = digits.parse().map_err(|_| invalid())?;
        total = total.checked_add(n).ok_or_else(invalid)?;
    }
    Ok(total)
}
