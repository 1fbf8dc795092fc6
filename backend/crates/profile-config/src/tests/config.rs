use crate::Config;
use crate::tests::{EnvGuard, clear_legacy_env, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _legacy = clear_legacy_env();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.database.path.as_str(), eq("profile.db"));
    assert_that!(config.database.max_connections, eq(10));
    assert_that!(config.identity.base_url.as_str(), eq("http://localhost:8001"));
    assert_that!(config.identity.unavailable_as_not_found, eq(true));
    assert_that!(config.queue.queue_name.as_str(), eq("user_events"));
    assert_that!(
        config.queue.dead_letter_queue.as_str(),
        eq("user_events.dead_letter")
    );
    assert_that!(config.retry.max_retries, eq(3));
    assert_that!(config.retry.delay_ms, eq(5000));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _legacy = clear_legacy_env();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_is_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("config");
    let _guard = EnvGuard::set("PROFILE_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.exists(), eq(true));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _legacy = clear_legacy_env();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000

            [identity]
            base_url = "http://identity:8001"
            unavailable_as_not_found = false

            [queue]
            enabled = false

            [retry]
            max_retries = 1
            delay_ms = 250
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.identity.base_url.as_str(), eq("http://identity:8001"));
    assert_that!(config.identity.unavailable_as_not_found, eq(false));
    assert_that!(config.queue.enabled, eq(false));
    assert_that!(config.retry.max_retries, eq(1));
    assert_that!(config.retry.delay_ms, eq(250));
}

#[test]
#[serial]
fn given_invalid_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 9000").unwrap();
    let _port = EnvGuard::set("PROFILE_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _legacy = clear_legacy_env();
    let _host = EnvGuard::set("PROFILE_SERVER_HOST", "0.0.0.0");
    let _db = EnvGuard::set("PROFILE_DATABASE_MAX_CONNECTIONS", "4");
    let _timeout = EnvGuard::set("PROFILE_IDENTITY_TIMEOUT_SECS", "2");
    let _queue = EnvGuard::set("PROFILE_QUEUE_NAME", "events");
    let _prefetch = EnvGuard::set("PROFILE_QUEUE_PREFETCH", "5");
    let _retries = EnvGuard::set("PROFILE_RETRY_MAX_RETRIES", "0");
    let _colored = EnvGuard::set("PROFILE_LOG_COLORED", "false");
    let _file = EnvGuard::set("PROFILE_LOG_FILE", "profile.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(config.database.max_connections, eq(4));
    assert_that!(config.identity.timeout_secs, eq(2));
    assert_that!(config.queue.queue_name.as_str(), eq("events"));
    assert_that!(config.queue.prefetch, eq(5));
    assert_that!(config.retry.max_retries, eq(0));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), eq(Some("profile.log")));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_keeps_default() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("PROFILE_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_legacy_url_vars_when_load_then_they_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _identity = EnvGuard::set("AUTH_SERVICE_URL", "http://auth:9000");
    let _queue = EnvGuard::set("RABBITMQ_URL", "amqp://user:pw@rabbit:5672/%2f");
    let _prefixed_identity = EnvGuard::remove("PROFILE_IDENTITY_BASE_URL");
    let _prefixed_queue = EnvGuard::remove("PROFILE_QUEUE_URL");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.identity.base_url.as_str(), eq("http://auth:9000"));
    assert_that!(config.queue.url.as_str(), eq("amqp://user:pw@rabbit:5672/%2f"));
}

#[test]
#[serial]
fn given_legacy_and_prefixed_vars_when_load_then_prefixed_wins() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _legacy = EnvGuard::set("AUTH_SERVICE_URL", "http://legacy:9000");
    let _prefixed = EnvGuard::set("PROFILE_IDENTITY_BASE_URL", "http://current:9000");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.identity.base_url.as_str(), eq("http://current:9000"));
}

#[test]
#[serial]
fn given_relative_database_path_when_database_path_then_joined_to_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.database_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("profile.db")));
}

#[test]
fn test_bind_addr_joins_host_and_port() {
    let config = Config::default();

    assert_that!(config.bind_addr(), eq("127.0.0.1:8002"));
}
