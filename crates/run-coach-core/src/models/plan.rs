// ABOUTME: Training plan models: phases, intensity presets, and the plan header
// ABOUTME: TrainingPlanSpec carries everything persisted for a plan apart from its workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::TrainingPaces;
use crate::constants::training_volume::{
    DEFAULT_SESSIONS_PER_WEEK, MAX_SESSIONS_PER_WEEK, MIN_SESSIONS_PER_WEEK,
};
use crate::errors::{AppError, AppResult};

/// Periodization phase of a plan week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingPhase {
    /// Aerobic base building
    Base,
    /// Increasing volume and quality
    Build,
    /// Highest load before the race
    Peak,
    /// Reduced load into race day
    Taper,
}

impl TrainingPhase {
    /// Lowercase phase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Build => "build",
            Self::Peak => "peak",
            Self::Taper => "taper",
        }
    }
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekly volume preset, serialized as the number of sessions per week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TrainingIntensity {
    /// Three sessions per week
    Low,
    /// Four sessions per week
    #[default]
    Medium,
    /// Five sessions per week
    High,
    /// Six sessions per week
    VeryHigh,
}

impl TrainingIntensity {
    /// Number of running sessions per week
    #[must_use]
    pub const fn sessions_per_week(self) -> u32 {
        match self {
            Self::Low => MIN_SESSIONS_PER_WEEK,
            Self::Medium => DEFAULT_SESSIONS_PER_WEEK,
            Self::High => 5,
            Self::VeryHigh => MAX_SESSIONS_PER_WEEK,
        }
    }
}

impl TryFrom<u32> for TrainingIntensity {
    type Error = AppError;

    fn try_from(sessions: u32) -> AppResult<Self> {
        match sessions {
            3 => Ok(Self::Low),
            4 => Ok(Self::Medium),
            5 => Ok(Self::High),
            6 => Ok(Self::VeryHigh),
            other => Err(AppError::invalid_input(format!(
                "Sessions per week must be {MIN_SESSIONS_PER_WEEK}-{MAX_SESSIONS_PER_WEEK}, got {other}"
            ))),
        }
    }
}

impl From<TrainingIntensity> for u32 {
    fn from(value: TrainingIntensity) -> Self {
        value.sessions_per_week()
    }
}

/// Plan header: everything about a plan except its workouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlanSpec {
    /// Plan name
    pub name: String,
    /// Number of weeks in the plan
    pub total_weeks: u32,
    /// First day of week 1
    pub start_date: NaiveDate,
    /// Race day
    pub race_date: NaiveDate,
    /// Goal race distance in meters
    pub race_distance_meters: u32,
    /// Fitness score the paces were derived from
    pub vdot: f64,
    /// Pace table used for every workout in the plan
    pub paces: TrainingPaces,
    /// Sessions per week
    pub sessions_per_week: u32,
}
