use crate::{Config, ConfigError, ConfigSection};
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Api
// =========================================================================

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("BT_API_BASE_URL", "192.168.1.87:1010");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_https_base_url_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("BT_API_BASE_URL", "https://budget.example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_timeout_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("BT_API_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_timeout_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("BT_API_TIMEOUT_SECS", "121");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_user_scoped_endpoint_without_placeholder_when_validate_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api.endpoints]\nbalance = \"/api/balance\"",
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_endpoint_without_leading_slash_when_validate_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api.endpoints]\nlogin = \"Loginuser\"",
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_invalid_setting_error_then_message_names_section() {
    let error = ConfigError::defaults("monthly_budget must be finite");

    assert_eq!(error.section(), Some(ConfigSection::Defaults));
    assert!(
        error
            .to_string()
            .starts_with("Invalid [defaults] setting: monthly_budget must be finite")
    );
}

#[test]
fn given_working_dir_error_then_no_section() {
    let error = ConfigError::working_dir(std::io::Error::other("gone"));

    assert_eq!(error.section(), None);
    assert!(error.to_string().contains(".budget"));
}
