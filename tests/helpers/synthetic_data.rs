// ABOUTME: Synthetic activity history generator for fitness-estimation tests
// ABOUTME: Creates reproducible run histories with configurable pace, volume, and noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use chrono::{Duration, NaiveDateTime};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use run_coach_core::models::{ActivitySample, SportType};

/// Builder for deterministic synthetic activity histories
///
/// The same seed always yields the same activities, so analyzer tests can
/// assert exact counts while still exercising noisy paces.
#[derive(Debug, Clone)]
pub struct SyntheticDataBuilder {
    rng: ChaCha8Rng,
}

impl SyntheticDataBuilder {
    /// Create new builder with deterministic seed for reproducibility
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Start a synthetic run
    #[must_use]
    pub fn generate_run(&mut self) -> ActivityBuilder<'_> {
        ActivityBuilder::new(SportType::Run, &mut self.rng)
    }

    /// Start a synthetic ride
    #[must_use]
    pub fn generate_ride(&mut self) -> ActivityBuilder<'_> {
        ActivityBuilder::new(SportType::Ride, &mut self.rng)
    }

    /// Steady training: `runs_per_week` runs for `weeks` weeks around one pace
    ///
    /// Distances vary between 5 and 12 km and paces by up to `pace_noise`
    /// seconds per km either side of `pace_sec_per_km`.
    #[must_use]
    pub fn steady_runner(
        &mut self,
        start: NaiveDateTime,
        weeks: i64,
        runs_per_week: i64,
        pace_sec_per_km: f64,
        pace_noise: f64,
    ) -> Vec<ActivitySample> {
        let mut activities = Vec::new();
        for week in 0..weeks {
            for run in 0..runs_per_week {
                let distance_km = self.rng.gen_range(5.0..12.0);
                let noise = if pace_noise > 0.0 {
                    self.rng.gen_range(-pace_noise..pace_noise)
                } else {
                    0.0
                };
                let activity = self
                    .generate_run()
                    .distance_km(distance_km)
                    .pace_sec_per_km(pace_sec_per_km + noise)
                    .start_date(start + Duration::days(week * 7 + run * 2))
                    .build();
                activities.push(activity);
            }
        }
        activities
    }
}

/// Builder for a single activity
pub struct ActivityBuilder<'a> {
    sport_type: SportType,
    distance_meters: f64,
    pace_sec_per_km: f64,
    start_date: NaiveDateTime,
    manual: bool,
    rng: &'a mut ChaCha8Rng,
}

impl<'a> ActivityBuilder<'a> {
    fn new(sport_type: SportType, rng: &'a mut ChaCha8Rng) -> Self {
        Self {
            sport_type,
            distance_meters: 8_000.0,
            pace_sec_per_km: 330.0,
            start_date: NaiveDateTime::default(),
            manual: false,
            rng,
        }
    }

    /// Distance in kilometers
    #[must_use]
    pub fn distance_km(mut self, km: f64) -> Self {
        self.distance_meters = km * 1000.0;
        self
    }

    /// Distance in meters
    #[must_use]
    pub fn distance_meters(mut self, meters: f64) -> Self {
        self.distance_meters = meters;
        self
    }

    /// Pace in seconds per kilometer
    #[must_use]
    pub fn pace_sec_per_km(mut self, pace: f64) -> Self {
        self.pace_sec_per_km = pace;
        self
    }

    /// Local start time
    #[must_use]
    pub fn start_date(mut self, start: NaiveDateTime) -> Self {
        self.start_date = start;
        self
    }

    /// Mark as manually entered
    #[must_use]
    pub fn manual(mut self) -> Self {
        self.manual = true;
        self
    }

    /// Up to `seconds` of random start-time jitter
    #[must_use]
    pub fn jitter_start(mut self, seconds: i64) -> Self {
        let offset = self.rng.gen_range(0..=seconds);
        self.start_date += Duration::seconds(offset);
        self
    }

    /// Build the activity
    #[must_use]
    pub fn build(self) -> ActivitySample {
        let moving_time = (self.distance_meters / 1000.0 * self.pace_sec_per_km).round() as u32;
        let activity = ActivitySample::new(
            self.sport_type,
            self.distance_meters,
            moving_time,
            self.start_date,
        );
        if self.manual {
            activity.manual()
        } else {
            activity
        }
    }
}
