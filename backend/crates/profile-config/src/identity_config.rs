use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_BASE_URL, DEFAULT_IDENTITY_TIMEOUT_SECS,
    DEFAULT_UNAVAILABLE_AS_NOT_FOUND, MAX_IDENTITY_TIMEOUT_SECS, MIN_IDENTITY_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Where and how to reach the identity service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Report an unreachable identity service to clients as "user not found"
    /// instead of 503
    pub unavailable_as_not_found: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_IDENTITY_BASE_URL),
            timeout_secs: DEFAULT_IDENTITY_TIMEOUT_SECS,
            unavailable_as_not_found: DEFAULT_UNAVAILABLE_AS_NOT_FOUND,
        }
    }
}

impl IdentityConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::identity(format!(
                "identity.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if !(MIN_IDENTITY_TIMEOUT_SECS..=MAX_IDENTITY_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::identity(format!(
                "identity.timeout_secs must be {}-{}, got {}",
                MIN_IDENTITY_TIMEOUT_SECS, MAX_IDENTITY_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
