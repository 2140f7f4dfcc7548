// ABOUTME: Workout completion tracking against synced activities
// ABOUTME: Auto-matches runs to same-day workouts, summarizes weeks, and finds today's session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use run_coach_core::models::{ActivitySample, ScheduledWorkout};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::schedule::week_start;

/// Allowed relative difference between activity and workout distance
const DISTANCE_TOLERANCE: f64 = 0.1;

/// Matches synced activities to scheduled workouts
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityMatcher;

impl ActivityMatcher {
    /// Index of the workout an activity completes, if any
    ///
    /// Candidates are uncompleted workouts scheduled on the activity's local
    /// date. The first whose distance is within ±10% of the activity's rounded
    /// distance wins. Only run-like activities match.
    #[must_use]
    pub fn find_match(activity: &ActivitySample, workouts: &[ScheduledWorkout]) -> Option<usize> {
        if !activity.sport_type.is_run_like() {
            return None;
        }

        let activity_date = activity.start_date_local.date();
        let activity_distance = activity.distance_meters.round();

        workouts.iter().position(|workout| {
            if workout.is_completed() || workout.scheduled_date != activity_date {
                return false;
            }
            let planned = f64::from(workout.workout.total_distance_meters);
            let lower = planned * (1.0 - DISTANCE_TOLERANCE);
            let upper = planned * (1.0 + DISTANCE_TOLERANCE);
            (lower..=upper).contains(&activity_distance)
        })
    }

    /// Mark the matching workout completed on the activity's date
    ///
    /// Returns the index of the completed workout.
    pub fn apply_match(
        activity: &ActivitySample,
        workouts: &mut [ScheduledWorkout],
    ) -> Option<usize> {
        let index = Self::find_match(activity, workouts)?;
        let completed_on = activity.start_date_local.date();
        if let Some(workout) = workouts.get_mut(index) {
            workout.completed_on = Some(completed_on);
            debug!(
                week_number = workout.week_number,
                scheduled_date = %workout.scheduled_date,
                workout_type = %workout.workout.workout_type,
                "Matched activity to workout"
            );
        }
        Some(index)
    }
}

/// Progress summary for one plan week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Plan week, starting at 1
    pub week_number: u32,
    /// First day of the week
    pub start: NaiveDate,
    /// Last day of the week
    pub end: NaiveDate,
    /// Workouts scheduled in the week
    pub total_workouts: usize,
    /// Workouts completed
    pub completed: usize,
    /// Planned distance in meters
    pub total_distance_meters: u32,
}

/// Summarize `week_number` of a plan starting on `plan_start`
#[must_use]
pub fn summarize_week(
    plan_start: NaiveDate,
    week_number: u32,
    workouts: &[ScheduledWorkout],
) -> WeekSummary {
    let start = week_start(plan_start, week_number);
    let end = start
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX);

    let week: Vec<&ScheduledWorkout> = workouts
        .iter()
        .filter(|workout| workout.week_number == week_number)
        .collect();

    WeekSummary {
        week_number,
        start,
        end,
        total_workouts: week.len(),
        completed: week.iter().filter(|workout| workout.is_completed()).count(),
        total_distance_meters: week
            .iter()
            .map(|workout| workout.workout.total_distance_meters)
            .sum(),
    }
}

/// Today's session, or the next one when today is a rest day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodayLookup<'a> {
    /// A workout is scheduled today
    Scheduled(&'a ScheduledWorkout),
    /// Nothing today; the next scheduled workout, if the plan continues
    Rest {
        /// Earliest workout after today
        next: Option<&'a ScheduledWorkout>,
    },
}

/// Find the workout scheduled for `today`
#[must_use]
pub fn todays_workout(workouts: &[ScheduledWorkout], today: NaiveDate) -> TodayLookup<'_> {
    if let Some(workout) = workouts.iter().find(|workout| workout.scheduled_date == today) {
        return TodayLookup::Scheduled(workout);
    }

    let next = workouts
        .iter()
        .filter(|workout| workout.scheduled_date > today)
        .min_by_key(|workout| workout.scheduled_date);
    TodayLookup::Rest { next }
}
