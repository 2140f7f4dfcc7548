// ABOUTME: Tests for activity-history fitness analysis
// ABOUTME: Covers run filtering, the thin-history fallback, easy-pace VDOT search, and race detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::datetime;
use helpers::synthetic_data::SyntheticDataBuilder;
use run_coach_core::models::{ActivitySample, SportType};
use run_coach_planning::{ActivityAnalyzer, PaceCalculator};

fn run(distance_meters: f64, pace_sec_per_km: f64, day: u32) -> ActivitySample {
    let moving_time = (distance_meters / 1000.0 * pace_sec_per_km).round() as u32;
    ActivitySample::new(SportType::Run, distance_meters, moving_time, datetime(2026, 2, day, 7))
}

#[test]
fn test_two_runs_use_fallback() {
    let activities = vec![run(8_000.0, 330.0, 2), run(10_000.0, 340.0, 4)];
    let analysis = ActivityAnalyzer::default().analyze(&activities);

    assert!(analysis.is_fallback());
    assert!((analysis.vdot - 40.0).abs() < f64::EPSILON);
    assert_eq!(analysis.activity_count, 0);
    assert!((analysis.average_pace_sec_per_km - 360.0).abs() < f64::EPSILON);
    assert!((analysis.weekly_volume_meters - 20_000.0).abs() < f64::EPSILON);
    assert!((analysis.longest_run_meters - 5_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_history_uses_fallback() {
    assert!(ActivityAnalyzer::default().analyze(&[]).is_fallback());
}

#[test]
fn test_filter_rejects_implausible_runs() {
    let activities = vec![
        run(8_000.0, 330.0, 2),
        run(8_000.0, 330.0, 3).manual(),
        SyntheticDataBuilder::new(3)
            .generate_ride()
            .distance_km(8.0)
            .pace_sec_per_km(330.0)
            .start_date(datetime(2026, 2, 4, 7))
            .build(),
        ActivitySample::new(SportType::TrailRun, 8_000.0, 2_800, datetime(2026, 2, 5, 7)),
        run(1_500.0, 330.0, 6),
        run(2_500.0, 200.0, 7),
        run(8_000.0, 170.0, 8),
        run(8_000.0, 500.0, 9),
        run(8_000.0, 330.0, 10).with_average_speed(None),
        run(8_000.0, 330.0, 11).with_average_speed(Some(0.0)),
    ];

    let valid = ActivityAnalyzer::filter_valid_runs(&activities);
    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].start_date_local, datetime(2026, 2, 2, 7));
}

#[test]
fn test_pace_bounds_are_inclusive() {
    let activities = vec![run(8_000.0, 180.0, 2), run(8_000.0, 480.0, 3)];
    assert_eq!(ActivityAnalyzer::filter_valid_runs(&activities).len(), 2);
}

#[test]
fn test_easy_pace_round_trip() {
    let analyzer = ActivityAnalyzer::default();
    let calculator = PaceCalculator::default();
    for vdot in [35.0, 42.5, 50.0, 60.0] {
        let midpoint = calculator.training_paces(vdot).easy_midpoint();
        let estimated = analyzer.vdot_from_easy_pace(midpoint);
        assert!((estimated - vdot).abs() <= 0.5, "{vdot} -> {estimated}");
    }
}

#[test]
fn test_easy_pace_search_is_bounded() {
    let analyzer = ActivityAnalyzer::default();
    assert!((analyzer.vdot_from_easy_pace(100.0) - 85.0).abs() < f64::EPSILON);
    assert!((analyzer.vdot_from_easy_pace(900.0) - 30.0).abs() < f64::EPSILON);
}

#[test]
fn test_steady_history_recovers_fitness() {
    let midpoint = PaceCalculator::default().training_paces(45.0).easy_midpoint();
    let mut builder = SyntheticDataBuilder::new(7);
    let activities = builder.steady_runner(datetime(2026, 1, 5, 7), 4, 3, midpoint, 0.0);

    let analysis = ActivityAnalyzer::default().analyze(&activities);
    assert_eq!(analysis.activity_count, 12);
    assert!((analysis.vdot - 45.0).abs() <= 0.5, "vdot {}", analysis.vdot);
    assert!((analysis.average_pace_sec_per_km - midpoint).abs() < 1.0);

    let total: f64 = activities.iter().map(|a| a.distance_meters).sum();
    assert!((analysis.weekly_volume_meters - total / 4.0).abs() < 1e-6);

    let longest = activities
        .iter()
        .map(|a| a.distance_meters)
        .fold(0.0, f64::max);
    assert!((analysis.longest_run_meters - longest).abs() < f64::EPSILON);
}

#[test]
fn test_noisy_history_stays_close() {
    let midpoint = PaceCalculator::default().training_paces(50.0).easy_midpoint();
    let mut builder = SyntheticDataBuilder::new(42);
    let activities = builder.steady_runner(datetime(2026, 1, 5, 7), 6, 4, midpoint, 8.0);

    let analysis = ActivityAnalyzer::default().analyze(&activities);
    assert_eq!(analysis.activity_count, 24);
    assert!((analysis.vdot - 50.0).abs() <= 1.5, "vdot {}", analysis.vdot);
}

#[test]
fn test_single_day_history_counts_one_week() {
    let activities = vec![
        run(5_000.0, 330.0, 2),
        run(6_000.0, 330.0, 2),
        run(7_000.0, 330.0, 2),
    ];
    let analysis = ActivityAnalyzer::default().analyze(&activities);
    assert!((analysis.weekly_volume_meters - 18_000.0).abs() < 1e-6);
}

#[test]
fn test_find_recent_races() {
    let mut activities: Vec<ActivitySample> =
        (1..=6).map(|day| run(8_000.0, 400.0, day)).collect();
    activities.push(run(5_000.0, 300.0, 10));
    activities.push(run(7_000.0, 300.0, 12));

    let races = ActivityAnalyzer::find_recent_races(&activities);
    assert_eq!(races.len(), 1);
    assert!((races[0].distance_meters - 5_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_race_detection_needs_five_runs() {
    let activities = vec![
        run(8_000.0, 400.0, 1),
        run(8_000.0, 400.0, 2),
        run(8_000.0, 400.0, 3),
        run(5_000.0, 300.0, 4),
    ];
    assert!(ActivityAnalyzer::find_recent_races(&activities).is_empty());
}
