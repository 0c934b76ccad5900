use crate::calendar::CalendarState;

/// Configuration for a calendar engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible weather rolls.
    pub seed: u64,
    /// The calendar state the engine starts from.
    pub epoch: CalendarState,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            epoch: CalendarState::epoch(),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed for weather rolls.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting calendar state.
    pub fn with_epoch(mut self, epoch: CalendarState) -> Self {
        self.epoch = epoch;
        self
    }
}
