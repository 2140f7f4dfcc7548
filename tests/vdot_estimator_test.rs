// ABOUTME: Tests for priority-ordered fitness estimation
// ABOUTME: Covers manual bounds, race validation and clamping, history fallback, and input resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::datetime;
use helpers::synthetic_data::SyntheticDataBuilder;
use run_coach_core::errors::ErrorCode;
use run_coach_core::models::RaceResult;
use run_coach_planning::{
    PaceCalculator, VdotEstimator, VdotInputs, VdotProvenance, VdotSource,
};

#[test]
fn test_manual_vdot_is_used_verbatim() {
    let estimate = VdotEstimator::default()
        .estimate(&VdotSource::Manual(47.3))
        .unwrap();
    assert!((estimate.vdot - 47.3).abs() < f64::EPSILON);
    assert_eq!(estimate.provenance, VdotProvenance::Manual);
    assert!(estimate.analysis.is_none());
}

#[test]
fn test_manual_vdot_bounds() {
    let estimator = VdotEstimator::default();
    assert!(estimator.estimate(&VdotSource::Manual(30.0)).is_ok());
    assert!(estimator.estimate(&VdotSource::Manual(85.0)).is_ok());

    let error = estimator.estimate(&VdotSource::Manual(29.9)).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(estimator.estimate(&VdotSource::Manual(90.0)).is_err());
}

#[test]
fn test_race_result_estimate() {
    let estimate = VdotEstimator::default()
        .estimate(&VdotSource::RaceResult(RaceResult::new(10_000, 2_400)))
        .unwrap();
    assert!((estimate.vdot - 51.9).abs() < 1e-9);
    assert_eq!(estimate.provenance, VdotProvenance::RaceResult);
}

#[test]
fn test_slow_race_is_clamped_to_minimum() {
    let estimate = VdotEstimator::default()
        .estimate(&VdotSource::RaceResult(RaceResult::new(5_000, 3_000)))
        .unwrap();
    assert!((estimate.vdot - 30.0).abs() < f64::EPSILON);
}

#[test]
fn test_fast_race_is_clamped_to_maximum() {
    let estimate = VdotEstimator::default()
        .estimate(&VdotSource::RaceResult(RaceResult::new(5_000, 600)))
        .unwrap();
    assert!((estimate.vdot - 85.0).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_race_is_rejected() {
    let estimator = VdotEstimator::default();
    let too_short = estimator.estimate(&VdotSource::RaceResult(RaceResult::new(400, 1_200)));
    assert!(too_short.unwrap_err().is_invalid_input());

    let too_quick = estimator.estimate(&VdotSource::RaceResult(RaceResult::new(5_000, 60)));
    assert!(too_quick.unwrap_err().is_invalid_input());
}

#[test]
fn test_thin_history_falls_back() {
    let estimate = VdotEstimator::default()
        .estimate(&VdotSource::ActivityHistory(Vec::new()))
        .unwrap();
    assert!((estimate.vdot - 40.0).abs() < f64::EPSILON);
    assert_eq!(estimate.provenance, VdotProvenance::ActivityHistory);
    assert!(estimate.analysis.unwrap().is_fallback());
}

#[test]
fn test_history_estimate_carries_analysis() {
    let midpoint = PaceCalculator::default().training_paces(48.0).easy_midpoint();
    let activities =
        SyntheticDataBuilder::new(3).steady_runner(datetime(2026, 1, 5, 6), 3, 4, midpoint, 0.0);

    let estimate = VdotEstimator::default()
        .estimate(&VdotSource::ActivityHistory(activities))
        .unwrap();
    let analysis = estimate.analysis.unwrap();
    assert_eq!(analysis.activity_count, 12);
    assert!((estimate.vdot - analysis.vdot).abs() < f64::EPSILON);
    assert!((estimate.vdot - 48.0).abs() <= 0.5);
}

#[test]
fn test_inputs_resolution_order() {
    let both = VdotInputs {
        manual_vdot: Some(50.0),
        recent_race_distance: Some(5_000),
        recent_race_time: Some(1_200),
    };
    assert_eq!(
        both.explicit_source().unwrap(),
        Some(VdotSource::Manual(50.0))
    );

    assert_eq!(
        VdotInputs::race(5_000, 1_200).explicit_source().unwrap(),
        Some(VdotSource::RaceResult(RaceResult::new(5_000, 1_200)))
    );

    let empty = VdotInputs::default();
    assert!(empty.needs_history());
    assert_eq!(empty.explicit_source().unwrap(), None);
}

#[test]
fn test_partial_race_inputs_are_rejected() {
    let partial = VdotInputs {
        manual_vdot: None,
        recent_race_distance: Some(5_000),
        recent_race_time: None,
    };
    assert!(!partial.needs_history());
    assert!(partial.explicit_source().unwrap_err().is_invalid_input());
}

#[test]
fn test_inputs_deserialize_from_request_fields() {
    let inputs: VdotInputs = serde_json::from_str(
        r#"{"recent_race_distance": 10000, "recent_race_time": 2400}"#,
    )
    .unwrap();
    assert_eq!(inputs, VdotInputs::race(10_000, 2_400));
}
