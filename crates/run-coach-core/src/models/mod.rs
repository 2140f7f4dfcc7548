// ABOUTME: Core data models for activities, race results, paces, workouts, and plans
// ABOUTME: Re-exports every model so callers can import from run_coach_core::models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Activity samples supplied by the activity history collaborator
pub mod activity;
/// Training paces derived from a fitness score
pub mod paces;
/// Plan request and generated plan types
pub mod plan;
/// Recent race results used for fitness estimation
pub mod race;
/// Sport type enumeration
pub mod sport;
/// Workout, segment, and structure types
pub mod workout;

pub use activity::ActivitySample;
pub use paces::{PaceRange, TrainingPaces};
pub use plan::{TrainingIntensity, TrainingPhase, TrainingPlanSpec};
pub use race::RaceResult;
pub use sport::SportType;
pub use workout::{
    GeneratedWorkout, PaceZone, RecoverySpec, ScheduledWorkout, SegmentKind, WorkoutSegment,
    WorkoutStructure, WorkoutType,
};
