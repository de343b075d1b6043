//! Engine configuration.
//!
//! Defaults reproduce the classic game. Levels allow 1.8 flips per cell,
//! pause 350 ms before a matched pair is committed and 550 ms before a
//! mismatched pair is turned back over. Free play has no step budget,
//! commits a match at once and shows a mismatch for a full second.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::state::GameMode;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Flips allowed per grid cell. `max_steps = floor(grid² * step_factor)`.
    pub step_factor: f64,

    /// Delay before a matched pair moves to the solved set.
    pub match_delay_ms: u64,

    /// Delay before a mismatched pair is hidden again.
    pub mismatch_delay_ms: u64,

    /// Delays used on free-play boards.
    pub free_play: FreePlayRules,

    /// Session seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_factor: 1.8,
            match_delay_ms: 350,
            mismatch_delay_ms: 550,
            free_play: FreePlayRules::default(),
            seed: None,
        }
    }
}

/// Free-play timing. Free play never counts against a budget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreePlayRules {
    pub match_delay_ms: u64,
    pub mismatch_delay_ms: u64,
}

impl Default for FreePlayRules {
    fn default() -> Self {
        Self {
            match_delay_ms: 0,
            mismatch_delay_ms: 1000,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.step_factor.is_finite() || self.step_factor <= 0.0 {
            return Err(EngineError::Config(format!(
                "step_factor must be positive, got {}",
                self.step_factor
            )));
        }
        Ok(())
    }

    /// Set the step factor.
    #[must_use]
    pub fn with_step_factor(mut self, factor: f64) -> Self {
        self.step_factor = factor;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set both resolution delays.
    #[must_use]
    pub fn with_delays(mut self, match_delay_ms: u64, mismatch_delay_ms: u64) -> Self {
        self.match_delay_ms = match_delay_ms;
        self.mismatch_delay_ms = mismatch_delay_ms;
        self
    }

    /// Set both free-play delays.
    #[must_use]
    pub fn with_free_play_delays(mut self, match_delay_ms: u64, mismatch_delay_ms: u64) -> Self {
        self.free_play = FreePlayRules {
            match_delay_ms,
            mismatch_delay_ms,
        };
        self
    }

    /// Level match delay as a `Duration`.
    #[must_use]
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    /// Level mismatch delay as a `Duration`.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Match and mismatch delays for a deal in `mode`.
    #[must_use]
    pub fn delays(&self, mode: GameMode) -> (Duration, Duration) {
        match mode {
            GameMode::Level(_) => (self.match_delay(), self.mismatch_delay()),
            GameMode::FreePlay { .. } => (
                Duration::from_millis(self.free_play.match_delay_ms),
                Duration::from_millis(self.free_play.mismatch_delay_ms),
            ),
        }
    }

    /// Step budget for a level grid.
    #[must_use]
    pub fn max_steps(&self, grid_size: u32) -> u32 {
        let cells = f64::from(grid_size * grid_size);
        (cells * self.step_factor).floor() as u32
    }

    /// Step budget for a deal in `mode`. Free play is unlimited.
    #[must_use]
    pub fn step_budget(&self, mode: GameMode, grid_size: u32) -> Option<u32> {
        match mode {
            GameMode::Level(_) => Some(self.max_steps(grid_size)),
            GameMode::FreePlay { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.match_delay(), Duration::from_millis(350));
        assert_eq!(config.mismatch_delay(), Duration::from_millis(550));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_max_steps() {
        let config = EngineConfig::default();
        assert_eq!(config.max_steps(2), 7);
        assert_eq!(config.max_steps(4), 28);
        assert_eq!(config.max_steps(6), 64);
        assert_eq!(config.max_steps(8), 115);
        assert_eq!(config.max_steps(10), 180);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_seed(7)
            .with_step_factor(2.0)
            .with_delays(10, 20);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_steps(2), 8);
        assert_eq!(config.match_delay_ms, 10);
        assert_eq!(config.mismatch_delay_ms, 20);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{ "seed": 99, "mismatch_delay_ms": 1000 }"#).unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.mismatch_delay_ms, 1000);
        assert_eq!(config.match_delay_ms, 350);
    }

    #[test]
    fn test_from_json_rejects_bad_factor() {
        let err = EngineConfig::from_json(r#"{ "step_factor": 0.0 }"#).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));

        let err = EngineConfig::from_json("{").unwrap_err();
        assert!(matches!(err, EngineError::Json(_)));
    }

    #[test]
    fn test_free_play_rules() {
        let config = EngineConfig::default();
        let free = GameMode::FreePlay { grid_size: 4 };

        assert_eq!(config.step_budget(free, 4), None);
        assert_eq!(config.delays(free), (Duration::ZERO, Duration::from_millis(1000)));

        let level = GameMode::Level(crate::levels::LevelId::new(2));
        assert_eq!(config.step_budget(level, 4), Some(28));
        assert_eq!(config.delays(level), (Duration::from_millis(350), Duration::from_millis(550)));
    }

    #[test]
    fn test_free_play_rules_from_json() {
        let config = EngineConfig::from_json(r#"{ "free_play": { "mismatch_delay_ms": 400 } }"#).unwrap();
        assert_eq!(config.free_play.match_delay_ms, 0);
        assert_eq!(config.free_play.mismatch_delay_ms, 400);

        let config = EngineConfig::default().with_free_play_delays(5, 6);
        assert_eq!(config.free_play, FreePlayRules { match_delay_ms: 5, mismatch_delay_ms: 6 });
    }
}
