//! Session configuration.

use crate::types::DEFAULT_DROP_INTERVAL_MS;

/// Parameters for a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the shape RNG.
    pub seed: u32,
    /// Automatic descent interval; a drop fires once strictly more than this has elapsed.
    pub drop_interval_ms: u32,
}

impl GameConfig {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn with_drop_interval_ms(mut self, drop_interval_ms: u32) -> Self {
        self.drop_interval_ms = drop_interval_ms;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
        }
    }
}
