use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, LogLevel};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Log Level Parsing
// =========================================================================

#[test]
fn given_known_level_names_when_parsed_then_matching_filter() {
    assert_that!(LogLevel::from_str("debug").unwrap(), eq(LogLevel(LevelFilter::Debug)));
    assert_that!(LogLevel::from_str("WARN").unwrap(), eq(LogLevel(LevelFilter::Warn)));
    assert_that!(LogLevel::from_str("off").unwrap(), eq(LogLevel(LevelFilter::Off)));
}

#[test]
fn given_unknown_level_name_when_parsed_then_defaults_to_info() {
    assert_that!(LogLevel::parse_lenient("verbose"), eq(LogLevel(LevelFilter::Info)));
}

#[test]
#[serial]
fn given_log_level_env_when_load_then_applied() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("CHAT_LOG_LEVEL", "trace");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Trace));
}

// =========================================================================
// Log File
// =========================================================================

#[test]
#[serial]
fn given_no_log_file_when_log_file_path_then_none() {
    let _temp = setup_config_dir();

    let config = Config::load().unwrap();

    assert_eq!(config.log_file_path().unwrap(), None);
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_inside_config_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("CHAT_LOG_FILE", "chat.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(
        config.log_file_path().unwrap(),
        Some(temp.path().join("log").join("chat.log"))
    );
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_log_file_with_path_separator_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("CHAT_LOG_FILE", "../escape.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
