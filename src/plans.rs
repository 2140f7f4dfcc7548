// ABOUTME: Plan service wiring caller requests, activity history, and the planning engine
// ABOUTME: Resolves the fitness source lazily and hands a generated plan back for persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use run_coach_core::errors::{AppError, AppResult};
use run_coach_core::models::{ActivitySample, TrainingIntensity};
use run_coach_planning::plan_generator::default_plan_name;
use run_coach_planning::{
    GeneratedPlan, PlanGenerator, PlanRequest, RandomSource, SeededRandom, VdotInputs, VdotSource,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::history::{ActivityHistoryProvider, LookbackWindow};
use crate::sync::spawn_initial_sync;

/// Caller-facing plan request (manual-entry path)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    /// Plan name; derived from the race distance when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Goal race distance in meters
    pub race_distance_meters: u32,
    /// Race day
    pub race_date: NaiveDate,
    /// Manual VDOT or recent race; activity history is used when both are absent
    #[serde(flatten)]
    pub vdot_inputs: VdotInputs,
    /// Sessions-per-week preset; the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_intensity: Option<TrainingIntensity>,
}

impl CreatePlanRequest {
    /// Request with fitness taken from activity history
    #[must_use]
    pub const fn new(race_distance_meters: u32, race_date: NaiveDate) -> Self {
        Self {
            name: None,
            race_distance_meters,
            race_date,
            vdot_inputs: VdotInputs {
                manual_vdot: None,
                recent_race_distance: None,
                recent_race_time: None,
            },
            training_intensity: None,
        }
    }

    /// Set the fitness inputs
    #[must_use]
    pub const fn with_vdot_inputs(mut self, vdot_inputs: VdotInputs) -> Self {
        self.vdot_inputs = vdot_inputs;
        self
    }

    /// Set the intensity preset
    #[must_use]
    pub const fn with_intensity(mut self, intensity: TrainingIntensity) -> Self {
        self.training_intensity = Some(intensity);
        self
    }
}

/// Plan creation service
pub struct PlanService {
    history: Arc<dyn ActivityHistoryProvider>,
    config: PlannerConfig,
    generator: PlanGenerator,
}

impl PlanService {
    /// Service reading history from `history`
    #[must_use]
    pub fn new(history: Arc<dyn ActivityHistoryProvider>, config: PlannerConfig) -> Self {
        Self {
            history,
            config,
            generator: PlanGenerator::default(),
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Create a plan using the configured randomness (seeded or entropy)
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for invalid requests and
    /// `AppError::ExternalServiceError` if activity history cannot be loaded
    pub async fn create_plan(
        &self,
        request: &CreatePlanRequest,
        today: NaiveDate,
    ) -> AppResult<GeneratedPlan> {
        let mut rng = SeededRandom::from_optional_seed(self.config.random_seed);
        self.create_plan_with_rng(request, today, &mut rng).await
    }

    /// Create a plan with an explicit randomness source
    ///
    /// Activity history is only fetched when the request names neither a
    /// manual VDOT nor a recent race.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for invalid requests and
    /// `AppError::ExternalServiceError` if activity history cannot be loaded
    pub async fn create_plan_with_rng<R>(
        &self,
        request: &CreatePlanRequest,
        today: NaiveDate,
        rng: &mut R,
    ) -> AppResult<GeneratedPlan>
    where
        R: RandomSource + Send + ?Sized,
    {
        if request.race_date <= today {
            return Err(AppError::invalid_input("Race date must be in the future"));
        }
        if request.race_distance_meters == 0 {
            return Err(AppError::invalid_input("Race distance must be positive"));
        }

        let vdot_source = match request.vdot_inputs.explicit_source()? {
            Some(source) => source,
            None => VdotSource::ActivityHistory(self.load_history().await?),
        };

        let plan_request = PlanRequest {
            name: request
                .name
                .clone()
                .unwrap_or_else(|| default_plan_name(request.race_distance_meters)),
            race_distance_meters: request.race_distance_meters,
            race_date: request.race_date,
            vdot_source,
            intensity: request
                .training_intensity
                .unwrap_or_else(|| self.config.default_intensity()),
        };

        let plan = self.generator.create_plan(&plan_request, today, rng)?;
        info!(
            plan_name = %plan.spec.name,
            total_weeks = plan.spec.total_weeks,
            vdot = plan.spec.vdot,
            "Created training plan"
        );
        Ok(plan)
    }

    /// Start the background sync run after an account is connected
    pub fn start_initial_sync(&self) -> JoinHandle<()> {
        spawn_initial_sync(Arc::clone(&self.history), self.config.initial_sync_count)
    }

    async fn load_history(&self) -> AppResult<Vec<ActivitySample>> {
        let window = LookbackWindow::Days(self.config.lookback_days);
        let activities = self
            .history
            .recent_activities(window)
            .await
            .map_err(|error| {
                AppError::external_service(
                    self.history.provider_name(),
                    format!("Failed to load activity history: {}", error.message),
                )
                .with_source(error)
            })?;
        debug!(
            provider = self.history.provider_name(),
            lookback_days = self.config.lookback_days,
            activities = activities.len(),
            "Loaded activity history for fitness estimation"
        );
        Ok(activities)
    }
}
