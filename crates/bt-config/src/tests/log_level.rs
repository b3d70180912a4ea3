use crate::{Config, LogLevel};
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;
use serial_test::serial;

#[test]
fn test_log_level_from_str_known_values() {
    assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Debug));
    assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Warn));
    assert_eq!(" off ".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Off));
}

#[test]
fn test_log_level_from_str_unknown_is_error() {
    assert!("loud".parse::<LogLevel>().is_err());
}

#[test]
fn test_log_level_parse_lenient_defaults_to_info() {
    assert_eq!(LogLevel::parse_lenient("loud"), LogLevel(LevelFilter::Info));
}

#[test]
#[serial]
fn given_log_level_in_toml_when_load_then_parsed() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[logging]\nlevel = \"trace\"",
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Trace));
}

#[test]
#[serial]
fn given_invalid_log_level_env_when_load_then_defaults_to_info() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("BT_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}
