use crate::Config;
use crate::tests::{EnvGuard, TEST_SECRET, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_eq!(config.server.host, crate::DEFAULT_HOST);
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_eq!(config.database.name, crate::DEFAULT_DATABASE_NAME);
    assert_that!(config.registry.enabled, eq(true));
    assert!(config.auth.jwt_secret.is_none());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000

            [database]
            name = "projects_test"

            [auth]
            jwt_secret = "toml-secret-that-is-long-enough-for-hs256"

            [registry]
            enabled = false
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_eq!(config.database.name, "projects_test");
    assert_that!(config.registry.enabled, eq(false));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_invalid_toml_when_load_then_error_names_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000
        "#,
    )
    .unwrap();
    let _port = EnvGuard::set("PS_SERVER_PORT", "9100");
    let _host = EnvGuard::set("PS_SERVER_HOST", "127.0.0.1");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
    assert_eq!(config.bind_addr(), "127.0.0.1:9100");
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_keeps_previous_value() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("PS_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_relative_database_dir_when_database_path_then_resolves_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _dir = EnvGuard::set("PS_DATABASE_DIR", "data");
    let _name = EnvGuard::set("PS_DATABASE_NAME", "projects");

    // When
    let config = Config::load().unwrap();
    let path = config.database_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join("data").join("projects.db"));
}

#[test]
#[serial]
fn given_secret_from_env_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("PS_AUTH_JWT_SECRET", TEST_SECRET);

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_config_with_secret_when_debug_formatted_then_secret_redacted() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("PS_AUTH_JWT_SECRET", TEST_SECRET);
    let config = Config::load().unwrap();

    // When
    let debug = format!("{config:?}");

    // Then
    assert_that!(debug, contains_substring("[REDACTED]"));
    assert!(!debug.contains(TEST_SECRET));
}
