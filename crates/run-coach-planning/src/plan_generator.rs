// ABOUTME: Orchestrates plan creation from race goal and fitness source to dated workouts
// ABOUTME: Sizes the plan, estimates VDOT, derives paces, and schedules every week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use run_coach_core::constants::race_distances::{FIVE_K, HALF_MARATHON, MARATHON, TEN_K};
use run_coach_core::errors::{AppError, AppResult};
use run_coach_core::models::{ScheduledWorkout, TrainingIntensity, TrainingPlanSpec};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::algorithms::{EquivalentTime, VdotCalculator};
use crate::pace_calculator::PaceCalculator;
use crate::periodization::plan_duration_weeks;
use crate::random::RandomSource;
use crate::schedule::session_date;
use crate::vdot_estimator::{VdotEstimate, VdotEstimator, VdotSource};
use crate::workout_generator::WorkoutGenerator;

/// Everything needed to generate a plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Plan name
    pub name: String,
    /// Goal race distance in meters
    pub race_distance_meters: u32,
    /// Race day
    pub race_date: NaiveDate,
    /// Resolved fitness source
    pub vdot_source: VdotSource,
    /// Weekly volume preset
    pub intensity: TrainingIntensity,
}

/// A generated plan ready for the persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Plan header
    pub spec: TrainingPlanSpec,
    /// Fitness estimate the paces were derived from
    pub vdot_estimate: VdotEstimate,
    /// Predicted race times at the plan's VDOT
    pub equivalent_times: Vec<EquivalentTime>,
    /// Every workout, ordered by week then slot
    pub workouts: Vec<ScheduledWorkout>,
}

impl GeneratedPlan {
    /// Workouts of a single week
    pub fn week(&self, week_number: u32) -> impl Iterator<Item = &ScheduledWorkout> {
        self.workouts
            .iter()
            .filter(move |workout| workout.week_number == week_number)
    }

    /// Total planned distance of a week in meters
    #[must_use]
    pub fn week_distance(&self, week_number: u32) -> u32 {
        self.week(week_number)
            .map(|workout| workout.workout.total_distance_meters)
            .sum()
    }
}

/// Default plan name for a race distance
#[must_use]
pub fn default_plan_name(race_distance_meters: u32) -> String {
    match race_distance_meters {
        FIVE_K => "5K Training Plan".to_owned(),
        TEN_K => "10K Training Plan".to_owned(),
        HALF_MARATHON => "Half Marathon Training Plan".to_owned(),
        MARATHON => "Marathon Training Plan".to_owned(),
        other => format!("{:.1}km Training Plan", f64::from(other) / 1000.0),
    }
}

/// Plan orchestrator
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGenerator {
    estimator: VdotEstimator,
    pace_calculator: PaceCalculator,
}

impl PlanGenerator {
    /// Generator with custom estimator and pace calculator
    #[must_use]
    pub const fn new(estimator: VdotEstimator, pace_calculator: PaceCalculator) -> Self {
        Self {
            estimator,
            pace_calculator,
        }
    }

    /// Generate a complete plan
    ///
    /// `today` is the caller's current date; the race must be strictly after it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the race date is not in the future,
    /// the race distance is zero, or the fitness source is invalid
    pub fn create_plan<R>(
        &self,
        request: &PlanRequest,
        today: NaiveDate,
        rng: &mut R,
    ) -> AppResult<GeneratedPlan>
    where
        R: RandomSource + ?Sized,
    {
        if request.race_date <= today {
            return Err(AppError::invalid_input("Race date must be in the future"));
        }
        if request.race_distance_meters == 0 {
            return Err(AppError::invalid_input("Race distance must be positive"));
        }

        let total_weeks = plan_duration_weeks(request.race_distance_meters);
        let start_date = request
            .race_date
            .checked_sub_days(Days::new(u64::from(total_weeks) * 7))
            .ok_or_else(|| AppError::invalid_input("Race date is too early to plan for"))?;

        let vdot_estimate = self.estimator.estimate(&request.vdot_source)?;
        let paces = self.pace_calculator.training_paces(vdot_estimate.vdot);
        let sessions_per_week = request.intensity.sessions_per_week();

        let generator = WorkoutGenerator::new(total_weeks, request.race_distance_meters, paces);
        let mut workouts = Vec::with_capacity((total_weeks * sessions_per_week) as usize);
        for week_number in 1..=total_weeks {
            let week = generator.generate_week(week_number, sessions_per_week, rng);
            workouts.extend(week.into_iter().enumerate().map(|(slot, workout)| {
                ScheduledWorkout {
                    week_number,
                    scheduled_date: session_date(start_date, week_number, sessions_per_week, slot),
                    workout,
                    completed_on: None,
                }
            }));
        }

        info!(
            race_distance_meters = request.race_distance_meters,
            race_date = %request.race_date,
            total_weeks,
            sessions_per_week,
            vdot = vdot_estimate.vdot,
            provenance = ?vdot_estimate.provenance,
            workouts = workouts.len(),
            "Generated training plan"
        );

        Ok(GeneratedPlan {
            spec: TrainingPlanSpec {
                name: request.name.clone(),
                total_weeks,
                start_date,
                race_date: request.race_date,
                race_distance_meters: request.race_distance_meters,
                vdot: vdot_estimate.vdot,
                paces,
                sessions_per_week,
            },
            equivalent_times: VdotCalculator::equivalent_times(vdot_estimate.vdot),
            vdot_estimate,
            workouts,
        })
    }
}
