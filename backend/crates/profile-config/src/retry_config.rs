use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS, MAX_MAX_RETRIES,
    MAX_RETRY_DELAY_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Fixed-delay retry for event handling.
///
/// A message gets `max_retries + 1` attempts in total, `delay_ms` apart,
/// before it is dead-lettered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the initial attempt
    pub max_retries: u32,
    /// Delay between attempts in milliseconds
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}

impl RetryConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::retry(format!(
                "retry.max_retries must be 0-{}, got {}",
                MAX_MAX_RETRIES, self.max_retries
            )));
        }

        if self.delay_ms > MAX_RETRY_DELAY_MS {
            return Err(ConfigError::retry(format!(
                "retry.delay_ms must be 0-{}, got {}",
                MAX_RETRY_DELAY_MS, self.delay_ms
            )));
        }

        Ok(())
    }
}
