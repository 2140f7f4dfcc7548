// ABOUTME: Activity sample model read from the activity history collaborator
// ABOUTME: Carries the subset of synced activity fields the fitness estimate depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SportType;

/// A single synced activity, as supplied by the activity history collaborator
///
/// Read-only input for fitness estimation and completion matching. The
/// engine never fetches or stores these itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySample {
    /// Provider sport type
    pub sport_type: SportType,
    /// Distance in meters
    pub distance_meters: f64,
    /// Moving time in seconds
    pub moving_time_seconds: u32,
    /// Average speed in meters per second, when the provider reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_speed: Option<f64>,
    /// Entered by hand rather than recorded by a device
    #[serde(default)]
    pub is_manual: bool,
    /// Local start time of the activity
    pub start_date_local: NaiveDateTime,
}

impl ActivitySample {
    /// Create a device-recorded activity; average speed is derived from distance and time
    #[must_use]
    pub fn new(
        sport_type: SportType,
        distance_meters: f64,
        moving_time_seconds: u32,
        start_date_local: NaiveDateTime,
    ) -> Self {
        let average_speed = (moving_time_seconds > 0)
            .then(|| distance_meters / f64::from(moving_time_seconds));
        Self {
            sport_type,
            distance_meters,
            moving_time_seconds,
            average_speed,
            is_manual: false,
            start_date_local,
        }
    }

    /// Mark the activity as a manual entry
    #[must_use]
    pub const fn manual(mut self) -> Self {
        self.is_manual = true;
        self
    }

    /// Override the provider-reported average speed
    #[must_use]
    pub const fn with_average_speed(mut self, average_speed: Option<f64>) -> Self {
        self.average_speed = average_speed;
        self
    }

    /// Pace in seconds per kilometer implied by moving time and distance
    #[must_use]
    pub fn pace_seconds_per_km(&self) -> Option<f64> {
        (self.distance_meters > 0.0)
            .then(|| f64::from(self.moving_time_seconds) / (self.distance_meters / 1000.0))
    }
}
