use crate::LogLevel;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};
use log::LevelFilter;

#[test]
fn given_mixed_case_level_when_parsed_then_matches_filter() {
    // When
    let level = LogLevel::from_str("DeBuG").unwrap();

    // Then
    assert_that!(level.0, eq(LevelFilter::Debug));
}

#[test]
fn given_unknown_level_when_parsed_then_error() {
    // When
    let result = LogLevel::from_str("verbose");

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_unknown_level_in_toml_when_deserialized_then_falls_back_to_default() {
    // Given
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    // When
    let wrapper: Wrapper = toml::from_str(r#"level = "verbose""#).unwrap();

    // Then
    assert_that!(wrapper.level.0, eq(crate::DEFAULT_LOG_LEVEL));
}
