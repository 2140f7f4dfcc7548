// ABOUTME: Recent race result used as a fitness-estimation input
// ABOUTME: Validates distance and time against plausibility bounds before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::race_result_bounds::{
    MAX_DISTANCE_METERS, MIN_DISTANCE_METERS, MIN_TIME_SECONDS,
};
use crate::errors::{AppError, AppResult};

/// A recent race performance; never persisted as an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResult {
    /// Race distance in meters
    pub distance_meters: u32,
    /// Finish time in seconds
    pub time_seconds: u32,
}

impl RaceResult {
    /// Create a race result without validating it
    #[must_use]
    pub const fn new(distance_meters: u32, time_seconds: u32) -> Self {
        Self {
            distance_meters,
            time_seconds,
        }
    }

    /// Check the result against plausibility bounds
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the distance is outside 800-42195 m
    /// or the time is shorter than two minutes
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_DISTANCE_METERS..=MAX_DISTANCE_METERS).contains(&self.distance_meters) {
            return Err(AppError::invalid_input(format!(
                "Race distance {} m is outside {MIN_DISTANCE_METERS}-{MAX_DISTANCE_METERS} m",
                self.distance_meters
            )));
        }
        if self.time_seconds < MIN_TIME_SECONDS {
            return Err(AppError::invalid_input(format!(
                "Race time {} s is shorter than {MIN_TIME_SECONDS} s",
                self.time_seconds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(RaceResult::new(5_000, 1_200).validate().is_ok());
        assert!(RaceResult::new(800, 120).validate().is_ok());
        assert!(RaceResult::new(42_195, 10_800).validate().is_ok());
        assert!(RaceResult::new(799, 1_200).validate().is_err());
        assert!(RaceResult::new(50_000, 18_000).validate().is_err());
        assert!(RaceResult::new(5_000, 119).validate().is_err());
    }
}
