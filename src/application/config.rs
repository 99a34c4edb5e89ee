use std::time::Duration;
use thiserror::Error;

/// Board size of the classic desktop version
pub const DEFAULT_SIZE: usize = 44;
/// Randomize activates roughly one cell in this many
pub const DEFAULT_FILL_ONE_IN: u32 = 15;
pub const DEFAULT_INTERVAL_MS: u64 = 200;
pub const MIN_INTERVAL_MS: u64 = 25;
pub const MAX_INTERVAL_MS: u64 = 500;
/// Interval change per speed button press
pub const SPEED_STEP_MS: u64 = 25;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    ZeroSize,
    #[error("fill denominator must be at least 1, got {0}")]
    InvalidFillDenominator(u32),
    #[error("fill probability {0} must be between 0.0 and 1.0")]
    InvalidFillProbability(f64),
    #[error("interval bounds are inconsistent: {min:?} <= {interval:?} <= {max:?} does not hold")]
    InvalidIntervalBounds {
        min: Duration,
        interval: Duration,
        max: Duration,
    },
}

/// Static settings for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Side length of the square board
    pub size: usize,
    /// Chance that randomize activates any given cell
    pub fill_probability: f64,
    /// Time between generations while running
    pub interval: Duration,
    pub min_interval: Duration,
    pub max_interval: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            fill_probability: 1.0 / DEFAULT_FILL_ONE_IN as f64,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            min_interval: Duration::from_millis(MIN_INTERVAL_MS),
            max_interval: Duration::from_millis(MAX_INTERVAL_MS),
        }
    }
}

impl SimulationConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the randomize probability to 1/k
    pub fn with_fill_one_in(mut self, k: u32) -> Result<Self, ConfigError> {
        if k == 0 {
            return Err(ConfigError::InvalidFillDenominator(k));
        }
        self.fill_probability = 1.0 / k as f64;
        Ok(self)
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_interval_bounds(mut self, min: Duration, max: Duration) -> Self {
        self.min_interval = min;
        self.max_interval = max;
        self
    }

    /// Check every field, returning the config unchanged if it is usable
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(ConfigError::InvalidFillProbability(self.fill_probability));
        }
        if self.min_interval.is_zero()
            || self.min_interval > self.interval
            || self.interval > self.max_interval
        {
            return Err(ConfigError::InvalidIntervalBounds {
                min: self.min_interval,
                interval: self.interval,
                max: self.max_interval,
            });
        }
        Ok(self)
    }

    /// Clamp a requested interval into the configured range.
    /// Inverted bounds resolve to `max_interval` rather than panicking.
    pub fn clamp_interval(&self, interval: Duration) -> Duration {
        interval.max(self.min_interval).min(self.max_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default().validate().unwrap();
        assert_eq!(config.size, 44);
        assert_eq!(config.interval, Duration::from_millis(200));
        assert!((config.fill_probability - 1.0 / 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fill_one_in() {
        let config = SimulationConfig::default().with_fill_one_in(31).unwrap();
        assert!((config.fill_probability - 1.0 / 31.0).abs() < f64::EPSILON);
        assert_eq!(
            SimulationConfig::default().with_fill_one_in(0),
            Err(ConfigError::InvalidFillDenominator(0))
        );
    }

    #[test]
    fn test_zero_size_rejected() {
        let result = SimulationConfig::default().with_size(0).validate();
        assert_eq!(result, Err(ConfigError::ZeroSize));
    }

    #[test]
    fn test_interval_outside_bounds_rejected() {
        let result = SimulationConfig::default()
            .with_interval(Duration::from_millis(600))
            .validate();
        assert!(matches!(result, Err(ConfigError::InvalidIntervalBounds { .. })));

        let result = SimulationConfig::default()
            .with_interval_bounds(Duration::ZERO, Duration::from_millis(500))
            .validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_clamp_interval() {
        let config = SimulationConfig::default();
        assert_eq!(config.clamp_interval(Duration::from_millis(1)), Duration::from_millis(25));
        assert_eq!(config.clamp_interval(Duration::from_secs(3)), Duration::from_millis(500));
        assert_eq!(config.clamp_interval(Duration::from_millis(300)), Duration::from_millis(300));
    }

    #[test]
    fn test_clamp_with_inverted_bounds_does_not_panic() {
        let config = SimulationConfig::default()
            .with_interval_bounds(Duration::from_millis(500), Duration::from_millis(25));
        assert_eq!(config.clamp_interval(Duration::from_millis(200)), Duration::from_millis(25));
    }
}
