use std::time::Duration;

/// Configuration for a [`crate::ClockDriver`].
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Wall-clock time between ticks.
    pub period: Duration,
    /// In-world seconds added on each tick.
    pub seconds_per_tick: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(1),
            seconds_per_tick: 1,
        }
    }
}

impl DriverConfig {
    /// Set the wall-clock period between ticks (at least one millisecond).
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period.max(Duration::from_millis(1));
        self
    }

    /// Set the in-world seconds added per tick.
    pub fn with_seconds_per_tick(mut self, seconds: u64) -> Self {
        self.seconds_per_tick = seconds;
        self
    }
}
