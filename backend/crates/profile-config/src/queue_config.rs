use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DEAD_LETTER_QUEUE, DEFAULT_PREFETCH,
    DEFAULT_QUEUE_ENABLED, DEFAULT_QUEUE_NAME, DEFAULT_QUEUE_URL, MAX_PREFETCH, MIN_PREFETCH,
};

use serde::Deserialize;

const MASK: &str = "***";

/// AMQP broker and queue topology for inbound user events.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    pub enabled: bool,
    pub url: String,
    pub queue_name: String,
    pub dead_letter_queue: String,
    pub prefetch: u16,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_QUEUE_ENABLED,
            url: String::from(DEFAULT_QUEUE_URL),
            queue_name: String::from(DEFAULT_QUEUE_NAME),
            dead_letter_queue: String::from(DEFAULT_DEAD_LETTER_QUEUE),
            prefetch: DEFAULT_PREFETCH,
        }
    }
}

impl QueueConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if !self.url.starts_with("amqp://") && !self.url.starts_with("amqps://") {
            return Err(ConfigError::queue("queue.url must use amqp:// or amqps://"));
        }

        if self.queue_name.trim().is_empty() {
            return Err(ConfigError::queue("queue.queue_name cannot be empty"));
        }

        if self.dead_letter_queue.trim().is_empty() {
            return Err(ConfigError::queue("queue.dead_letter_queue cannot be empty"));
        }

        if self.dead_letter_queue == self.queue_name {
            return Err(ConfigError::queue(
                "queue.dead_letter_queue must differ from queue.queue_name",
            ));
        }

        if !(MIN_PREFETCH..=MAX_PREFETCH).contains(&self.prefetch) {
            return Err(ConfigError::queue(format!(
                "queue.prefetch must be {}-{}, got {}",
                MIN_PREFETCH, MAX_PREFETCH, self.prefetch
            )));
        }

        Ok(())
    }

    /// Broker URL with the password replaced, safe to log.
    pub fn redacted_url(&self) -> String {
        let Some(scheme_end) = self.url.find("://") else {
            return self.url.clone();
        };
        let authority_start = scheme_end + 3;
        let rest = &self.url[authority_start..];

        let authority_end = rest.find('/').unwrap_or(rest.len());
        let Some(at) = rest[..authority_end].rfind('@') else {
            return self.url.clone();
        };

        let userinfo = &rest[..at];
        match userinfo.split_once(':') {
            Some((user, _)) => format!(
                "{}{}:{}{}",
                &self.url[..authority_start],
                user,
                MASK,
                &rest[at..]
            ),
            None => self.url.clone(),
        }
    }
}
