// ABOUTME: Plan generation command for run-coach
// ABOUTME: Builds a plan request from flags, runs the plan service, and prints the schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use run_coach::config::PlannerConfig;
use run_coach::plans::{CreatePlanRequest, PlanService};
use run_coach_core::models::TrainingIntensity;
use tracing::info;

use crate::helpers::display::display_plan;
use crate::helpers::input::FitnessArgs;

/// Plan flags other than the fitness source
pub struct PlanOptions {
    pub distance: u32,
    pub race_date: NaiveDate,
    pub name: Option<String>,
    pub sessions: Option<u32>,
    pub today: NaiveDate,
    pub json: bool,
}

/// Generate and print a training plan
pub async fn generate(
    config: PlannerConfig,
    fitness: &FitnessArgs,
    options: PlanOptions,
) -> Result<()> {
    let history = fitness.history(options.today).await?;
    let service = PlanService::new(Arc::new(history), config);

    let mut request = CreatePlanRequest::new(options.distance, options.race_date)
        .with_vdot_inputs(fitness.vdot_inputs());
    request.name = options.name;
    if let Some(sessions) = options.sessions {
        request = request.with_intensity(TrainingIntensity::try_from(sessions)?);
    }

    info!(
        race_distance_meters = options.distance,
        race_date = %options.race_date,
        "Generating training plan"
    );
    let plan = service.create_plan(&request, options.today).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }
    Ok(())
}
