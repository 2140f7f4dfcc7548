// ABOUTME: Planner configuration loaded from RUN_COACH_* environment variables
// ABOUTME: Applies overrides on top of defaults and validates every value against its range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for plan generation

use run_coach_core::constants::training_volume::{
    DEFAULT_SESSIONS_PER_WEEK, MAX_SESSIONS_PER_WEEK, MIN_SESSIONS_PER_WEEK,
};
use run_coach_core::errors::ConfigError;
use run_coach_core::models::TrainingIntensity;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Environment variable names
pub mod env_keys {
    /// Sessions per week when a request does not choose
    pub const DEFAULT_SESSIONS: &str = "RUN_COACH_DEFAULT_SESSIONS";
    /// Days of activity history used for fitness estimation
    pub const LOOKBACK_DAYS: &str = "RUN_COACH_LOOKBACK_DAYS";
    /// Activities fetched by the initial sync
    pub const INITIAL_SYNC_COUNT: &str = "RUN_COACH_INITIAL_SYNC_COUNT";
    /// Fixed seed for reproducible plans
    pub const RANDOM_SEED: &str = "RUN_COACH_RANDOM_SEED";
}

/// Default values and bounds
mod planner_defaults {
    /// Eight weeks of history
    pub const LOOKBACK_DAYS: u32 = 56;
    /// Shortest history window
    pub const MIN_LOOKBACK_DAYS: u32 = 7;
    /// Longest history window (six months)
    pub const MAX_LOOKBACK_DAYS: u32 = 183;
    /// Activities fetched right after an account is connected
    pub const INITIAL_SYNC_COUNT: usize = 10;
    /// Upper bound on the initial sync
    pub const MAX_INITIAL_SYNC_COUNT: usize = 200;
}

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Sessions per week when a request does not choose (3-6)
    pub default_sessions_per_week: u32,
    /// Days of activity history used for fitness estimation
    pub lookback_days: u32,
    /// Activities fetched by the initial sync
    pub initial_sync_count: usize,
    /// Fixed seed for reproducible plans; entropy when absent
    pub random_seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_sessions_per_week: DEFAULT_SESSIONS_PER_WEEK,
            lookback_days: planner_defaults::LOOKBACK_DAYS,
            initial_sync_count: planner_defaults::INITIAL_SYNC_COUNT,
            random_seed: None,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a variable is not a number and
    /// `ConfigError::InvalidRange` if a value is outside its bounds
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;

        debug!(
            default_sessions_per_week = config.default_sessions_per_week,
            lookback_days = config.lookback_days,
            initial_sync_count = config.initial_sync_count,
            seeded = config.random_seed.is_some(),
            "Loaded planner configuration"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for the first out-of-range value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SESSIONS_PER_WEEK..=MAX_SESSIONS_PER_WEEK)
            .contains(&self.default_sessions_per_week)
        {
            return Err(ConfigError::InvalidRange(
                "default_sessions_per_week must be between 3 and 6",
            ));
        }

        if !(planner_defaults::MIN_LOOKBACK_DAYS..=planner_defaults::MAX_LOOKBACK_DAYS)
            .contains(&self.lookback_days)
        {
            return Err(ConfigError::InvalidRange(
                "lookback_days must be between 7 and 183",
            ));
        }

        if !(1..=planner_defaults::MAX_INITIAL_SYNC_COUNT).contains(&self.initial_sync_count) {
            return Err(ConfigError::InvalidRange(
                "initial_sync_count must be between 1 and 200",
            ));
        }

        Ok(())
    }

    /// Intensity preset used when a request does not choose one
    #[must_use]
    pub fn default_intensity(&self) -> TrainingIntensity {
        TrainingIntensity::try_from(self.default_sessions_per_week).unwrap_or_default()
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(value) = parse_env(env_keys::DEFAULT_SESSIONS)? {
            self.default_sessions_per_week = value;
        }
        if let Some(value) = parse_env(env_keys::LOOKBACK_DAYS)? {
            self.lookback_days = value;
        }
        if let Some(value) = parse_env(env_keys::INITIAL_SYNC_COUNT)? {
            self.initial_sync_count = value;
        }
        if let Some(value) = parse_env(env_keys::RANDOM_SEED)? {
            self.random_seed = Some(value);
        }
        Ok(self)
    }
}

fn parse_env<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}: '{raw}'"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_intensity(), TrainingIntensity::Medium);
        assert_eq!(config.lookback_days, 56);
        assert_eq!(config.initial_sync_count, 10);
    }

    #[test]
    fn test_out_of_range_sessions() {
        let config = PlannerConfig {
            default_sessions_per_week: 7,
            ..PlannerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
