use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};
use crate::websocket_config::{DEFAULT_MAILBOX_CAPACITY, DEFAULT_PING_INTERVAL_SECS};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.websocket.mailbox_capacity, eq(DEFAULT_MAILBOX_CAPACITY));
    assert_that!(
        config.websocket.ping_interval_secs,
        eq(DEFAULT_PING_INTERVAL_SECS)
    );
    assert_that!(config.websocket.allowed_origins.is_empty(), eq(true));
    assert_that!(config.source.enabled, eq(true));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("sp");
    let _guard = EnvGuard::set("SP_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.is_dir(), eq(true));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [server]
              port = 9000

              [websocket]
              mailbox_capacity = 64
              allowed_origins = ["https://example.com"]

              [source]
              tick_interval_ms = 250
          "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.websocket.mailbox_capacity, eq(64));
    assert_eq!(
        config.websocket.allowed_origins,
        vec!["https://example.com".to_string()]
    );
    assert_that!(config.source.tick_interval_ms, eq(250));
    // Untouched sections keep defaults
    assert_that!(config.websocket.read_deadline_secs, eq(60));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 9000").unwrap();
    let _port_guard = EnvGuard::set("SP_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("SP_SERVER_PORT", "7777");
    let _host = EnvGuard::set("SP_SERVER_HOST", "0.0.0.0");
    let _colored = EnvGuard::set("SP_LOG_COLORED", "false");
    let _mailbox = EnvGuard::set("SP_WS_MAILBOX_CAPACITY", "32");
    let _origins = EnvGuard::set("SP_WS_ALLOWED_ORIGINS", "http://a.test, ,http://b.test");
    let _source = EnvGuard::set("SP_SOURCE_ENABLED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(7777));
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.websocket.mailbox_capacity, eq(32));
    assert_eq!(
        config.websocket.allowed_origins,
        vec!["http://a.test".to_string(), "http://b.test".to_string()]
    );
    assert_that!(config.source.enabled, eq(false));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_keeps_default() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("SP_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_host_and_port_when_bind_addr_then_joined() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("SP_SERVER_PORT", "9100");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bind_addr().as_str(), eq("127.0.0.1:9100"));
}
