// ABOUTME: Training-plan generation engine for the Run Coach platform
// ABOUTME: Turns a race goal and a fitness estimate into a dated, periodized schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Run Coach Planning
//!
//! The engine is synchronous and free of I/O. Control flows leaf-first:
//!
//! 1. `VdotEstimator` resolves a manual value, race result, or activity history
//!    into a single VDOT score
//! 2. `PaceCalculator` turns the score into a training pace table
//! 3. `WorkoutGenerator` builds each week's long run, quality session, and easy runs
//! 4. `PlanGenerator` sizes the plan, calls the generator per week, and dates every workout
//!
//! Randomness (easy-run jitter, build-phase session choice) goes through
//! `RandomSource` so plans are reproducible under a fixed seed.

/// Race-formula VDOT calculation and race-time prediction
pub mod algorithms;

/// Activity-history analysis for fitness estimation
pub mod activity_analyzer;

/// Completion tracking against synced activities
pub mod completion;

/// Pace fractions and workout distance tables
pub mod config;

/// VDOT to training-pace conversion
pub mod pace_calculator;

/// Plan sizing and phase assignment
pub mod periodization;

/// Plan orchestration
pub mod plan_generator;

/// Injectable randomness
pub mod random;

/// Day-of-week placement of sessions
pub mod schedule;

/// Priority-ordered fitness estimation
pub mod vdot_estimator;

/// Weekly workout construction
pub mod workout_generator;

pub use activity_analyzer::{ActivityAnalysis, ActivityAnalyzer};
pub use algorithms::VdotCalculator;
pub use completion::{summarize_week, todays_workout, ActivityMatcher, TodayLookup, WeekSummary};
pub use pace_calculator::PaceCalculator;
pub use periodization::{is_recovery_week, phase_for_week, plan_duration_weeks};
pub use plan_generator::{GeneratedPlan, PlanGenerator, PlanRequest};
pub use random::{RandomSource, SeededRandom, SequenceRandom};
pub use vdot_estimator::{VdotEstimate, VdotEstimator, VdotInputs, VdotProvenance, VdotSource};
pub use workout_generator::WorkoutGenerator;
