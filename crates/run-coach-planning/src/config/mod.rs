// ABOUTME: Tunable tables for the planning engine: pace fractions, phase cut-offs, workout distances
// ABOUTME: Defaults follow Daniels' Running Formula and the standard base/build/peak/taper split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Fractions of velocity at `VO2max` used for each training pace
pub mod pace_fractions {
    /// Faster end of the easy range
    pub const EASY_FAST: f64 = 0.74;
    /// Slower end of the easy range
    pub const EASY_SLOW: f64 = 0.59;
    /// Marathon pace
    pub const MARATHON: f64 = 0.80;
    /// Threshold pace
    pub const THRESHOLD: f64 = 0.85;
    /// Interval pace
    pub const INTERVAL: f64 = 0.98;
    /// Repetition pace
    pub const REPETITION: f64 = 1.10;
}

/// Plan-progress cut-offs between phases (`week / total_weeks`)
pub mod phase_thresholds {
    /// Base phase ends here
    pub const BASE_END: f64 = 0.4;
    /// Build phase ends here
    pub const BUILD_END: f64 = 0.75;
    /// Peak phase ends here; taper follows
    pub const PEAK_END: f64 = 0.9;
    /// Every Nth week is a recovery week
    pub const RECOVERY_WEEK_INTERVAL: u32 = 4;
}

/// Workout distances in meters
pub mod workout_distances {
    /// Warmup before quality sessions
    pub const WARMUP: u32 = 2_000;
    /// Cooldown after quality sessions
    pub const COOLDOWN: u32 = 1_000;
    /// Shortest long run
    pub const LONG_RUN_FLOOR: u32 = 8_000;
    /// Base-phase tempo
    pub const BASE_TEMPO: u32 = 8_000;
    /// Build-phase tempo
    pub const BUILD_TEMPO: u32 = 10_000;
    /// Recovery-week tempo
    pub const RECOVERY_TEMPO: u32 = 6_000;
    /// Repetition distance for build and peak intervals
    pub const LONG_INTERVAL: u32 = 1_000;
    /// Repetition distance for taper intervals
    pub const SHORT_INTERVAL: u32 = 400;
    /// Easy run base distance
    pub const EASY_BASE: u32 = 8_000;
    /// Easy run base distance in recovery weeks
    pub const EASY_RECOVERY_BASE: u32 = 6_000;
    /// Maximum random extension of an easy run
    pub const EASY_JITTER: u32 = 2_000;
}

/// Pace fractions used by the pace calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceFractions {
    /// Faster end of the easy range
    pub easy_fast: f64,
    /// Slower end of the easy range
    pub easy_slow: f64,
    /// Marathon pace
    pub marathon: f64,
    /// Threshold pace
    pub threshold: f64,
    /// Interval pace
    pub interval: f64,
    /// Repetition pace
    pub repetition: f64,
}

impl Default for PaceFractions {
    fn default() -> Self {
        Self {
            easy_fast: pace_fractions::EASY_FAST,
            easy_slow: pace_fractions::EASY_SLOW,
            marathon: pace_fractions::MARATHON,
            threshold: pace_fractions::THRESHOLD,
            interval: pace_fractions::INTERVAL,
            repetition: pace_fractions::REPETITION,
        }
    }
}
