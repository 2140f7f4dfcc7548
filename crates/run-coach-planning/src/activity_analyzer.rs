// ABOUTME: Estimates fitness from recent activity history when no race or manual value exists
// ABOUTME: Filters plausible runs, derives distance-weighted pace, volume, and an easy-pace VDOT
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use run_coach_core::constants::activity_filters::{
    FASTEST_PACE_SEC_PER_KM, MIN_DISTANCE_METERS, MIN_MOVING_TIME_SECONDS, MIN_VALID_RUNS,
    SLOWEST_PACE_SEC_PER_KM,
};
use run_coach_core::constants::race_distances::{FIVE_K, HALF_MARATHON, MARATHON, TEN_K};
use run_coach_core::constants::vdot_bounds::{FALLBACK_VDOT, MIN_VDOT};
use run_coach_core::models::{ActivitySample, SportType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pace_calculator::PaceCalculator;

/// Conservative defaults returned when history is too thin
mod fallback {
    /// Average pace (6:00/km)
    pub const AVERAGE_PACE_SEC_PER_KM: f64 = 360.0;
    /// Weekly volume (20 km)
    pub const WEEKLY_VOLUME_METERS: f64 = 20_000.0;
    /// Longest run (5 km)
    pub const LONGEST_RUN_METERS: f64 = 5_000.0;
}

/// Number of half-point steps in the 30-85 VDOT search
const VDOT_SEARCH_STEPS: u32 = 110;

/// Milliseconds in a week
const WEEK_MILLIS: f64 = 7.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Minimum valid runs before race detection is attempted
const MIN_RUNS_FOR_RACE_DETECTION: usize = 5;

/// A race effort is faster than this fraction of the average pace
const RACE_PACE_FACTOR: f64 = 0.85;

/// Distance tolerance for 5K/10K race detection (meters)
const SHORT_RACE_TOLERANCE_METERS: f64 = 200.0;

/// Distance tolerance for half and full marathon race detection (meters)
const LONG_RACE_TOLERANCE_METERS: f64 = 500.0;

/// Summary of recent training derived from activity history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityAnalysis {
    /// Estimated VDOT
    pub vdot: f64,
    /// Distance-weighted average pace (seconds per km)
    pub average_pace_sec_per_km: f64,
    /// Average weekly distance over the covered span (meters)
    pub weekly_volume_meters: f64,
    /// Number of valid runs; zero when the fallback was used
    pub activity_count: usize,
    /// Longest valid run (meters)
    pub longest_run_meters: f64,
}

impl ActivityAnalysis {
    /// Conservative estimate used when fewer than three valid runs exist
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            vdot: FALLBACK_VDOT,
            average_pace_sec_per_km: fallback::AVERAGE_PACE_SEC_PER_KM,
            weekly_volume_meters: fallback::WEEKLY_VOLUME_METERS,
            activity_count: 0,
            longest_run_meters: fallback::LONGEST_RUN_METERS,
        }
    }

    /// Whether this analysis came from the fallback rather than real runs
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.activity_count == 0
    }
}

/// Activity-history analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityAnalyzer {
    pace_calculator: PaceCalculator,
}

impl ActivityAnalyzer {
    /// Analyzer searching VDOT with the given pace calculator
    #[must_use]
    pub const fn new(pace_calculator: PaceCalculator) -> Self {
        Self { pace_calculator }
    }

    /// Analyze recent activities
    ///
    /// Insufficient history is not an error: fewer than three valid runs
    /// yields `ActivityAnalysis::fallback()`.
    #[must_use]
    pub fn analyze(&self, activities: &[ActivitySample]) -> ActivityAnalysis {
        let valid_runs = Self::filter_valid_runs(activities);

        if valid_runs.len() < MIN_VALID_RUNS {
            debug!(
                valid_runs = valid_runs.len(),
                total_activities = activities.len(),
                "Not enough valid runs, using fallback fitness estimate"
            );
            return ActivityAnalysis::fallback();
        }

        let total_distance: f64 = valid_runs.iter().map(|run| run.distance_meters).sum();
        let weighted_pace: f64 = valid_runs
            .iter()
            .map(|run| run_pace(run) * run.distance_meters)
            .sum();
        let average_pace = weighted_pace / total_distance;

        let vdot = self.vdot_from_easy_pace(average_pace);
        let weeks = weeks_covered(&valid_runs);
        let longest_run = valid_runs
            .iter()
            .map(|run| run.distance_meters)
            .fold(0.0, f64::max);

        debug!(
            valid_runs = valid_runs.len(),
            average_pace,
            weeks,
            vdot,
            "Estimated fitness from activity history"
        );

        ActivityAnalysis {
            vdot,
            average_pace_sec_per_km: average_pace,
            weekly_volume_meters: total_distance / weeks,
            activity_count: valid_runs.len(),
            longest_run_meters: longest_run,
        }
    }

    /// Runs that look like hard race efforts at standard race distances
    ///
    /// Requires at least five valid runs; compares each run against the plain
    /// (unweighted) average pace.
    #[must_use]
    pub fn find_recent_races(activities: &[ActivitySample]) -> Vec<ActivitySample> {
        let valid_runs = Self::filter_valid_runs(activities);
        if valid_runs.len() < MIN_RUNS_FOR_RACE_DETECTION {
            return Vec::new();
        }

        let average_pace =
            valid_runs.iter().map(|run| run_pace(run)).sum::<f64>() / valid_runs.len() as f64;

        valid_runs
            .into_iter()
            .filter(|run| {
                run_pace(run) < average_pace * RACE_PACE_FACTOR
                    && is_race_distance(run.distance_meters)
            })
            .cloned()
            .collect()
    }

    /// Runs plausible enough to estimate fitness from
    ///
    /// Keeps device-recorded `Run` activities of at least 2 km and 10 minutes
    /// with a positive average speed and a pace between 3:00 and 8:00 per km.
    #[must_use]
    pub fn filter_valid_runs(activities: &[ActivitySample]) -> Vec<&ActivitySample> {
        activities.iter().filter(|activity| is_valid_run(activity)).collect()
    }

    /// VDOT whose easy-pace midpoint is nearest the given pace
    ///
    /// Scans 30..=85 in half-point steps; ties keep the lower VDOT.
    #[must_use]
    pub fn vdot_from_easy_pace(&self, easy_pace_sec_per_km: f64) -> f64 {
        let mut best_vdot = FALLBACK_VDOT;
        let mut best_diff = f64::INFINITY;

        for step in 0..=VDOT_SEARCH_STEPS {
            let vdot = f64::from(step).mul_add(0.5, MIN_VDOT);
            let midpoint = self.pace_calculator.training_paces(vdot).easy_midpoint();
            let diff = (midpoint - easy_pace_sec_per_km).abs();
            if diff < best_diff {
                best_diff = diff;
                best_vdot = vdot;
            }
        }

        best_vdot
    }
}

fn is_valid_run(activity: &ActivitySample) -> bool {
    if activity.sport_type != SportType::Run || activity.is_manual {
        return false;
    }
    if activity.distance_meters < MIN_DISTANCE_METERS
        || activity.moving_time_seconds < MIN_MOVING_TIME_SECONDS
    {
        return false;
    }
    if !activity.average_speed.is_some_and(|speed| speed > 0.0) {
        return false;
    }
    activity
        .pace_seconds_per_km()
        .is_some_and(|pace| (FASTEST_PACE_SEC_PER_KM..=SLOWEST_PACE_SEC_PER_KM).contains(&pace))
}

fn run_pace(run: &ActivitySample) -> f64 {
    f64::from(run.moving_time_seconds) / (run.distance_meters / 1000.0)
}

fn weeks_covered(runs: &[&ActivitySample]) -> f64 {
    let mut dates = runs.iter().map(|run| run.start_date_local);
    let Some(first) = dates.next() else {
        return 1.0;
    };
    let (earliest, latest) = dates.fold((first, first), |(lo, hi), date| {
        (lo.min(date), hi.max(date))
    });

    let weeks = (latest - earliest).num_milliseconds() as f64 / WEEK_MILLIS;
    weeks.ceil().max(1.0)
}

fn is_race_distance(distance_meters: f64) -> bool {
    let near = |target: u32, tolerance: f64| (distance_meters - f64::from(target)).abs() < tolerance;
    near(FIVE_K, SHORT_RACE_TOLERANCE_METERS)
        || near(TEN_K, SHORT_RACE_TOLERANCE_METERS)
        || near(HALF_MARATHON, LONG_RACE_TOLERANCE_METERS)
        || near(MARATHON, LONG_RACE_TOLERANCE_METERS)
}
