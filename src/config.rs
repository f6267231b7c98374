use std::env;

use thiserror::Error;

use crate::patterns;

/// Environment variable overriding [`Config::led_count`].
pub const LED_COUNT_VAR: &str = "ELEMENT_LED_COUNT";

/// Environment variable overriding [`Config::start_pattern`].
pub const START_PATTERN_VAR: &str = "ELEMENT_START_PATTERN";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid LED count '{0}': expected a positive integer")]
    InvalidLedCount(String),
    #[error("unknown start pattern '{0}'")]
    UnknownPattern(String),
}

/// Runtime settings for the player binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// LEDs on the physical (or simulated) strip.
    pub led_count: usize,
    /// Name of the first pattern to play.
    pub start_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            led_count: patterns::LED_COUNT,
            start_pattern: patterns::FIRE.name().to_string(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `ELEMENT_LED_COUNT` and `ELEMENT_START_PATTERN` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Extracted for testability.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(LED_COUNT_VAR) {
            config.led_count = raw
                .trim()
                .parse()
                .ok()
                .filter(|&count: &usize| count > 0)
                .ok_or(ConfigError::InvalidLedCount(raw))?;
        }

        if let Some(name) = lookup(START_PATTERN_VAR) {
            let pattern = patterns::by_name(name.trim()).ok_or(ConfigError::UnknownPattern(name))?;
            config.start_pattern = pattern.name().to_string();
        }

        Ok(config)
    }
}
