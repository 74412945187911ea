// ABOUTME: Unit tests for planning and logging configuration loaded from the environment
// ABOUTME: Validates defaults, PLANNING_* overrides, fallbacks, and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use outrunna::config::{ConfigError, PlanningConfig};
use outrunna::errors::{AppError, ErrorCode};
use outrunna::intelligence::{PacePolicy, SelectionStrategy};
use outrunna::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const PLANNING_VARS: [&str; 10] = [
    "PLANNING_RIEGEL_EXPONENT",
    "PLANNING_PROGRESSION_RATE",
    "PLANNING_DELOAD_FACTOR",
    "PLANNING_TAPER_FACTOR",
    "PLANNING_RACE_WEEK_FACTOR",
    "PLANNING_IMPROVEMENT_RATE",
    "PLANNING_BUFFER_PCT",
    "PLANNING_DEFAULT_WEEKLY_MINUTES",
    "PLANNING_PACE_POLICY",
    "PLANNING_SELECTION_STRATEGY",
];

fn clear_planning_env() {
    for var in PLANNING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_planning_env();
    let config = PlanningConfig::from_env();
    assert_eq!(config, PlanningConfig::default());
    assert_eq!(config.riegel_exponent, 1.06);
    assert_eq!(config.progression_rate, 0.08);
    assert_eq!(config.deload_factor, 0.70);
    assert_eq!(config.taper_factor, 0.70);
    assert_eq!(config.race_week_factor, 0.50);
    assert_eq!(config.improvement_rate, 0.015);
    assert_eq!(config.buffer_pct, 0.02);
    assert_eq!(config.default_weekly_minutes, 240.0);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_planning_env();
    env::set_var("PLANNING_RIEGEL_EXPONENT", "1.08");
    env::set_var("PLANNING_DELOAD_FACTOR", "0.6");
    env::set_var("PLANNING_PACE_POLICY", "three-zone");
    env::set_var("PLANNING_SELECTION_STRATEGY", "duration_fit");

    let config = PlanningConfig::from_env();
    assert_eq!(config.riegel_exponent, 1.08);
    assert_eq!(config.deload_factor, 0.6);
    assert_eq!(config.pace_policy, PacePolicy::ThreeZone);
    assert_eq!(config.selection_strategy, SelectionStrategy::DurationFit);
    assert_eq!(config.progression_rate, 0.08);

    clear_planning_env();
}

#[test]
#[serial]
fn test_unparsable_values_fall_back() {
    clear_planning_env();
    env::set_var("PLANNING_TAPER_FACTOR", "seventy percent");
    env::set_var("PLANNING_PACE_POLICY", "nine_zone");

    let config = PlanningConfig::from_env();
    assert_eq!(config.taper_factor, 0.70);
    assert_eq!(config.pace_policy, PacePolicy::SevenZone);

    clear_planning_env();
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        PlanningConfig {
            riegel_exponent: 0.0,
            ..PlanningConfig::default()
        },
        PlanningConfig {
            race_week_factor: 1.2,
            ..PlanningConfig::default()
        },
        PlanningConfig {
            progression_rate: -0.1,
            ..PlanningConfig::default()
        },
        PlanningConfig {
            buffer_pct: 1.0,
            ..PlanningConfig::default()
        },
        PlanningConfig {
            default_weekly_minutes: f64::NAN,
            ..PlanningConfig::default()
        },
    ];
    for config in cases {
        assert!(config.validate().is_err(), "{config:?}");
    }
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::InvalidRange("deload_factor must be in (0, 1]").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("deload_factor"));
}

#[test]
fn test_config_serializes_with_snake_case_strategies() {
    let value = serde_json::to_value(PlanningConfig::default()).unwrap();
    assert_eq!(value["pace_policy"], "seven_zone");
    assert_eq!(value["selection_strategy"], "fixed_sequence");
}

#[test]
#[serial]
fn test_logging_from_environment() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
}
