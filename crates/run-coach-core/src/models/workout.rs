// ABOUTME: Structured workout models produced by the workout generator
// ABOUTME: Pace zones, segments, warmup/main/cooldown structure, and dated plan entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target effort zone, each a different fraction of velocity at VO2max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceZone {
    /// Conversational aerobic running
    Easy,
    /// Goal marathon effort
    Marathon,
    /// Comfortably hard, lactate threshold
    Threshold,
    /// VO2max intervals
    Interval,
    /// Short, fast repetitions
    Repetition,
}

impl PaceZone {
    /// Lowercase zone name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Marathon => "marathon",
            Self::Threshold => "threshold",
            Self::Interval => "interval",
            Self::Repetition => "repetition",
        }
    }
}

impl fmt::Display for PaceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a workout segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// One uninterrupted block
    Continuous,
    /// Repeated efforts separated by recoveries
    Interval,
}

/// Recovery jog between interval repetitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverySpec {
    /// Recovery distance in meters
    pub distance_meters: u32,
    /// Recovery effort
    pub pace_zone: PaceZone,
}

/// A single block of a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSegment {
    /// Continuous block or interval set
    pub kind: SegmentKind,
    /// Distance of the block, or of one repetition for interval sets
    pub distance_meters: u32,
    /// Target effort
    pub pace_zone: PaceZone,
    /// Number of repetitions (interval sets only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<u32>,
    /// Recovery between repetitions (interval sets only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery: Option<RecoverySpec>,
    /// Free-text instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WorkoutSegment {
    /// A continuous block at a single effort
    #[must_use]
    pub const fn continuous(distance_meters: u32, pace_zone: PaceZone) -> Self {
        Self {
            kind: SegmentKind::Continuous,
            distance_meters,
            pace_zone,
            repetitions: None,
            recovery: None,
            description: None,
        }
    }

    /// An interval set of `repetitions` efforts with a recovery between each
    #[must_use]
    pub const fn intervals(
        distance_meters: u32,
        pace_zone: PaceZone,
        repetitions: u32,
        recovery: RecoverySpec,
    ) -> Self {
        Self {
            kind: SegmentKind::Interval,
            distance_meters,
            pace_zone,
            repetitions: Some(repetitions),
            recovery: Some(recovery),
            description: None,
        }
    }

    /// Attach instructions to the segment
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Warmup, main set, and cooldown of a workout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutStructure {
    /// Warmup segments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warmup: Vec<WorkoutSegment>,
    /// Main set
    pub main: Vec<WorkoutSegment>,
    /// Cooldown segments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cooldown: Vec<WorkoutSegment>,
}

/// Workout category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Weekly long run
    #[serde(rename = "Long Run")]
    LongRun,
    /// Continuous tempo effort
    #[serde(rename = "Tempo Run")]
    TempoRun,
    /// Interval session
    #[serde(rename = "Intervals")]
    Intervals,
    /// Easy aerobic run
    #[serde(rename = "Easy Run")]
    EasyRun,
}

impl WorkoutType {
    /// Display name used in plans
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LongRun => "Long Run",
            Self::TempoRun => "Tempo Run",
            Self::Intervals => "Intervals",
            Self::EasyRun => "Easy Run",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully specified workout, not yet placed on the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedWorkout {
    /// Workout category
    pub workout_type: WorkoutType,
    /// Total distance including warmup, recoveries, and cooldown
    pub total_distance_meters: u32,
    /// Estimated duration in seconds
    pub estimated_duration_seconds: u32,
    /// Human-readable summary
    pub description: String,
    /// Headline target pace (seconds per km)
    pub target_pace_sec_per_km: u32,
    /// Headline effort zone
    pub pace_zone: PaceZone,
    /// Segment breakdown
    pub structure: WorkoutStructure,
}

/// A generated workout placed on the plan calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledWorkout {
    /// Plan week, starting at 1
    pub week_number: u32,
    /// Calendar date of the session
    pub scheduled_date: NaiveDate,
    /// The workout itself
    #[serde(flatten)]
    pub workout: GeneratedWorkout,
    /// Date the workout was completed; owned by the persistence collaborator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<NaiveDate>,
}

impl ScheduledWorkout {
    /// Whether the workout has been completed
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_on.is_some()
    }
}
