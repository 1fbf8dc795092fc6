use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, IdentityConfig, LoggingConfig, QueueConfig, RetryConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

// Names used by earlier deployments of the service
const LEGACY_IDENTITY_URL_ENV: &str = "AUTH_SERVICE_URL";
const LEGACY_QUEUE_URL_ENV: &str = "RABBITMQ_URL";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub identity: IdentityConfig,
    pub queue: QueueConfig,
    pub retry: RetryConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PROFILE_CONFIG_DIR env var, else use ./.profile/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PROFILE_* (and legacy) environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PROFILE_CONFIG_DIR env var > ./.profile/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.identity.validate()?;
        self.queue.validate()?;
        self.retry.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  identity: {} (timeout={}s, unavailable_as_not_found={})",
            self.identity.base_url,
            self.identity.timeout_secs,
            self.identity.unavailable_as_not_found
        );

        if self.queue.enabled {
            info!(
                "  queue: {} queue='{}' dead_letter='{}' prefetch={}",
                self.queue.redacted_url(),
                self.queue.queue_name,
                self.queue.dead_letter_queue,
                self.queue.prefetch
            );
        } else {
            info!("  queue: disabled");
        }

        info!(
            "  retry: max_retries={}, delay={}ms",
            self.retry.max_retries, self.retry.delay_ms
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PROFILE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PROFILE_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PROFILE_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "PROFILE_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Identity; the prefixed name wins over the legacy one
        Self::apply_env_string(LEGACY_IDENTITY_URL_ENV, &mut self.identity.base_url);
        Self::apply_env_string("PROFILE_IDENTITY_BASE_URL", &mut self.identity.base_url);
        Self::apply_env_parse(
            "PROFILE_IDENTITY_TIMEOUT_SECS",
            &mut self.identity.timeout_secs,
        );
        Self::apply_env_bool(
            "PROFILE_IDENTITY_UNAVAILABLE_AS_NOT_FOUND",
            &mut self.identity.unavailable_as_not_found,
        );

        // Queue
        Self::apply_env_bool("PROFILE_QUEUE_ENABLED", &mut self.queue.enabled);
        Self::apply_env_string(LEGACY_QUEUE_URL_ENV, &mut self.queue.url);
        Self::apply_env_string("PROFILE_QUEUE_URL", &mut self.queue.url);
        Self::apply_env_string("PROFILE_QUEUE_NAME", &mut self.queue.queue_name);
        Self::apply_env_string(
            "PROFILE_QUEUE_DEAD_LETTER",
            &mut self.queue.dead_letter_queue,
        );
        Self::apply_env_parse("PROFILE_QUEUE_PREFETCH", &mut self.queue.prefetch);

        // Retry
        Self::apply_env_parse("PROFILE_RETRY_MAX_RETRIES", &mut self.retry.max_retries);
        Self::apply_env_parse("PROFILE_RETRY_DELAY_MS", &mut self.retry.delay_ms);

        // Logging
        Self::apply_env_parse("PROFILE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PROFILE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PROFILE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => warn!("Ignoring unparseable {}={:?}", var_name, val),
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
