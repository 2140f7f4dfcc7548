// ABOUTME: Tests for planner configuration loaded from RUN_COACH_* environment variables
// ABOUTME: Validates overrides, parse failures, range checks, and the default intensity mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use run_coach::config::environment::env_keys;
use run_coach::config::PlannerConfig;
use run_coach_core::errors::ConfigError;
use run_coach_core::models::TrainingIntensity;
use serial_test::serial;
use std::env;

const ALL_KEYS: [&str; 4] = [
    env_keys::DEFAULT_SESSIONS,
    env_keys::LOOKBACK_DAYS,
    env_keys::INITIAL_SYNC_COUNT,
    env_keys::RANDOM_SEED,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.default_sessions_per_week, 4);
    assert_eq!(config.random_seed, None);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_keys::DEFAULT_SESSIONS, "6");
    env::set_var(env_keys::LOOKBACK_DAYS, " 28 ");
    env::set_var(env_keys::INITIAL_SYNC_COUNT, "25");
    env::set_var(env_keys::RANDOM_SEED, "1234");

    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config.default_sessions_per_week, 6);
    assert_eq!(config.lookback_days, 28);
    assert_eq!(config.initial_sync_count, 25);
    assert_eq!(config.random_seed, Some(1234));
    assert_eq!(config.default_intensity(), TrainingIntensity::VeryHigh);

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_value_is_rejected() {
    clear_env();
    env::set_var(env_keys::LOOKBACK_DAYS, "eight weeks");

    let error = PlannerConfig::from_env().unwrap_err();
    assert!(matches!(error, ConfigError::Parse(ref message) if message.contains("RUN_COACH_LOOKBACK_DAYS")));

    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_value_is_rejected() {
    clear_env();
    env::set_var(env_keys::DEFAULT_SESSIONS, "2");
    assert!(matches!(
        PlannerConfig::from_env(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_env();
    env::set_var(env_keys::LOOKBACK_DAYS, "365");
    assert!(matches!(
        PlannerConfig::from_env(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_env();
    env::set_var(env_keys::INITIAL_SYNC_COUNT, "0");
    assert!(matches!(
        PlannerConfig::from_env(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_env();
}

#[test]
fn test_validate_bounds() {
    let edge = PlannerConfig {
        default_sessions_per_week: 3,
        lookback_days: 183,
        initial_sync_count: 200,
        random_seed: None,
    };
    assert!(edge.validate().is_ok());
    assert_eq!(edge.default_intensity(), TrainingIntensity::Low);

    let too_long = PlannerConfig {
        lookback_days: 184,
        ..edge
    };
    assert!(too_long.validate().is_err());
}
