// ABOUTME: Plan sizing and week-by-week phase assignment
// ABOUTME: Maps race distance to plan length and plan progress to base/build/peak/taper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use run_coach_core::models::TrainingPhase;

use crate::config::phase_thresholds::{BASE_END, BUILD_END, PEAK_END, RECOVERY_WEEK_INTERVAL};

/// Plan length in weeks for a goal race distance
///
/// `>= 40 km → 16`, `>= 20 km → 12`, `>= 10 km → 8`, otherwise `6`.
#[must_use]
pub const fn plan_duration_weeks(race_distance_meters: u32) -> u32 {
    match race_distance_meters {
        40_000.. => 16,
        20_000.. => 12,
        10_000.. => 8,
        _ => 6,
    }
}

/// Phase of `week_number` (1-based) in a plan of `total_weeks`
#[must_use]
pub fn phase_for_week(week_number: u32, total_weeks: u32) -> TrainingPhase {
    let progress = plan_progress(week_number, total_weeks);
    if progress < BASE_END {
        TrainingPhase::Base
    } else if progress < BUILD_END {
        TrainingPhase::Build
    } else if progress < PEAK_END {
        TrainingPhase::Peak
    } else {
        TrainingPhase::Taper
    }
}

/// Every fourth week is a recovery week
#[must_use]
pub const fn is_recovery_week(week_number: u32) -> bool {
    week_number % RECOVERY_WEEK_INTERVAL == 0
}

/// Fraction of the plan completed at the end of `week_number`
#[must_use]
pub fn plan_progress(week_number: u32, total_weeks: u32) -> f64 {
    f64::from(week_number) / f64::from(total_weeks.max(1))
}
