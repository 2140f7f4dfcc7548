// ABOUTME: Converts a VDOT score into training paces in seconds per kilometer
// ABOUTME: Also formats paces as M:SS and estimates segment durations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use run_coach_core::models::{PaceRange, TrainingPaces};

use crate::config::PaceFractions;

/// Daniels velocity-at-VO2max polynomial, constant term (m/min)
const VVO2MAX_C: f64 = 29.54;

/// Daniels velocity-at-VO2max polynomial, linear coefficient
const VVO2MAX_B: f64 = 5.000_663;

/// Daniels velocity-at-VO2max polynomial, quadratic coefficient
const VVO2MAX_A: f64 = -0.007_546;

/// Training-pace calculator
///
/// Each pace is `60000 / (vVO2max × fraction)` rounded to whole seconds, with
/// `vVO2max = 29.54 + 5.000663·vdot − 0.007546·vdot²` in meters per minute.
/// Input VDOT is not clamped; the estimator guarantees the supported range.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaceCalculator {
    fractions: PaceFractions,
}

impl PaceCalculator {
    /// Calculator using custom pace fractions
    #[must_use]
    pub const fn new(fractions: PaceFractions) -> Self {
        Self { fractions }
    }

    /// Training paces for a VDOT score
    #[must_use]
    pub fn training_paces(&self, vdot: f64) -> TrainingPaces {
        let vvo2max = VVO2MAX_A.mul_add(vdot * vdot, VVO2MAX_B.mul_add(vdot, VVO2MAX_C));
        let pace = |fraction: f64| (60_000.0 / (vvo2max * fraction)).round() as u32;

        TrainingPaces {
            easy: PaceRange {
                min: pace(self.fractions.easy_fast),
                max: pace(self.fractions.easy_slow),
            },
            marathon: pace(self.fractions.marathon),
            threshold: pace(self.fractions.threshold),
            interval: pace(self.fractions.interval),
            repetition: pace(self.fractions.repetition),
        }
    }

    /// Seconds needed to cover `distance_meters` at `pace_sec_per_km`, rounded
    #[must_use]
    pub fn segment_duration(distance_meters: u32, pace_sec_per_km: f64) -> u32 {
        (f64::from(distance_meters) / 1000.0 * pace_sec_per_km).round() as u32
    }

    /// Format a pace as `M:SS`
    #[must_use]
    pub fn format_pace(sec_per_km: u32) -> String {
        format!("{}:{:02}", sec_per_km / 60, sec_per_km % 60)
    }
}
