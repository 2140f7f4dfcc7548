// ABOUTME: Domain constants for race distances, VDOT bounds, and activity filtering
// ABOUTME: Shared by the planning engine and application crate so limits live in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application-wide constants organized by domain

/// Standard race distances in meters
pub mod race_distances {
    /// 5 kilometers
    pub const FIVE_K: u32 = 5_000;
    /// 10 kilometers
    pub const TEN_K: u32 = 10_000;
    /// Half marathon
    pub const HALF_MARATHON: u32 = 21_097;
    /// Marathon
    pub const MARATHON: u32 = 42_195;
}

/// Supported VDOT range
pub mod vdot_bounds {
    /// Lowest VDOT the engine plans with
    pub const MIN_VDOT: f64 = 30.0;
    /// Highest VDOT the engine plans with
    pub const MAX_VDOT: f64 = 85.0;
    /// Conservative default when history is too thin to estimate
    pub const FALLBACK_VDOT: f64 = 40.0;
}

/// Plausibility bounds for a recent race result
pub mod race_result_bounds {
    /// Shortest accepted race (meters)
    pub const MIN_DISTANCE_METERS: u32 = 800;
    /// Longest accepted race (meters)
    pub const MAX_DISTANCE_METERS: u32 = 42_195;
    /// Shortest accepted race time (seconds)
    pub const MIN_TIME_SECONDS: u32 = 120;
}

/// Filters applied to activity history before estimating fitness
pub mod activity_filters {
    /// Minimum run distance in meters
    pub const MIN_DISTANCE_METERS: f64 = 2_000.0;
    /// Minimum moving time in seconds
    pub const MIN_MOVING_TIME_SECONDS: u32 = 600;
    /// Fastest plausible pace (seconds per km); anything faster is a data error
    pub const FASTEST_PACE_SEC_PER_KM: f64 = 180.0;
    /// Slowest pace still counted as running (seconds per km)
    pub const SLOWEST_PACE_SEC_PER_KM: f64 = 480.0;
    /// Minimum valid runs needed for an estimate
    pub const MIN_VALID_RUNS: usize = 3;
}

/// Sessions-per-week bounds
pub mod training_volume {
    /// Fewest sessions per week a plan can be built with
    pub const MIN_SESSIONS_PER_WEEK: u32 = 3;
    /// Most sessions per week a plan can be built with
    pub const MAX_SESSIONS_PER_WEEK: u32 = 6;
    /// Sessions per week when the caller does not choose
    pub const DEFAULT_SESSIONS_PER_WEEK: u32 = 4;
}
