// ABOUTME: Jack Daniels VDOT calculation from a race result and race-time prediction from VDOT
// ABOUTME: Prediction inverts the race formula by scanning finish times in fixed steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use run_coach_core::constants::race_distances::{FIVE_K, HALF_MARATHON, MARATHON, TEN_K};
use run_coach_core::models::RaceResult;
use serde::{Deserialize, Serialize};

/// Jack Daniels' VO2 formula coefficient for velocity squared term
const DANIELS_A: f64 = 0.000_104;

/// Jack Daniels' VO2 formula coefficient for velocity term
const DANIELS_B: f64 = 0.182_258;

/// Jack Daniels' VO2 formula constant term
const DANIELS_C: f64 = -4.60;

/// Shortest finish time considered when predicting (seconds)
const PREDICTION_START_SECONDS: u32 = 120;

/// Finish-time step when predicting (seconds)
const PREDICTION_STEP_SECONDS: u32 = 10;

/// Returned when no scanned time is closer (seconds)
const PREDICTION_DEFAULT_SECONDS: u32 = 600;

/// Prediction stops once the VDOT difference falls below this
const PREDICTION_TOLERANCE: f64 = 0.1;

/// Predicted finish time for a standard race distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalentTime {
    /// Race distance in meters
    pub distance_meters: u32,
    /// Predicted finish time in seconds
    pub time_seconds: u32,
}

/// Daniels race-formula VDOT calculator
///
/// # Scientific References
///
/// - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
#[derive(Debug, Clone, Copy, Default)]
pub struct VdotCalculator;

impl VdotCalculator {
    /// Calculate VDOT from a race result, rounded to one decimal
    ///
    /// Formula:
    /// - `%VO2max = 0.8 + 0.1894393·e^(−0.012778·t) + 0.2989558·e^(−0.1932605·t)`
    /// - `VO2 = −4.6 + 0.182258·v + 0.000104·v²`
    /// - `VDOT = VO2 / %VO2max`
    ///
    /// with `v` in meters per minute and `t` in minutes. The result is not
    /// clamped; callers that need the supported range clamp it themselves.
    #[must_use]
    pub fn calculate_from_race(race: &RaceResult) -> f64 {
        Self::rounded_vdot(
            f64::from(race.distance_meters),
            f64::from(race.time_seconds),
        )
    }

    /// Predict the finish time (seconds) for `distance_meters` at the given VDOT
    ///
    /// Scans finish times from two minutes upward in ten-second steps, up to
    /// a pace of one minute per 100 m, and returns the time whose VDOT is
    /// closest to the target.
    #[must_use]
    pub fn predict_time(vdot: f64, distance_meters: u32) -> u32 {
        let distance = f64::from(distance_meters);
        let ceiling = distance / 100.0 * 60.0;

        let mut best_time = PREDICTION_DEFAULT_SECONDS;
        let mut best_diff = f64::INFINITY;
        let mut time = PREDICTION_START_SECONDS;
        while f64::from(time) <= ceiling {
            let diff = (Self::rounded_vdot(distance, f64::from(time)) - vdot).abs();
            if diff < best_diff {
                best_diff = diff;
                best_time = time;
            }
            if diff < PREDICTION_TOLERANCE {
                break;
            }
            time += PREDICTION_STEP_SECONDS;
        }
        best_time
    }

    /// Predicted times for 5K, 10K, half marathon, and marathon
    #[must_use]
    pub fn equivalent_times(vdot: f64) -> Vec<EquivalentTime> {
        [FIVE_K, TEN_K, HALF_MARATHON, MARATHON]
            .into_iter()
            .map(|distance_meters| EquivalentTime {
                distance_meters,
                time_seconds: Self::predict_time(vdot, distance_meters),
            })
            .collect()
    }

    fn rounded_vdot(distance_meters: f64, time_seconds: f64) -> f64 {
        (Self::raw_vdot(distance_meters, time_seconds) * 10.0).round() / 10.0
    }

    fn raw_vdot(distance_meters: f64, time_seconds: f64) -> f64 {
        let velocity = distance_meters / time_seconds * 60.0;
        let minutes = time_seconds / 60.0;

        let percent_max = 0.298_955_8f64.mul_add(
            (-0.193_260_5 * minutes).exp(),
            0.189_439_3f64.mul_add((-0.012_778 * minutes).exp(), 0.8),
        );
        let vo2 = (DANIELS_A * velocity).mul_add(velocity, DANIELS_B.mul_add(velocity, DANIELS_C));

        vo2 / percent_max
    }
}
