// ABOUTME: Pace table command for run-coach
// ABOUTME: Resolves a fitness estimate and prints the five training paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use run_coach_planning::{PaceCalculator, VdotEstimator};

use crate::helpers::display::display_paces;
use crate::helpers::input::FitnessArgs;

/// Print training paces for the given fitness source
pub async fn show(fitness: &FitnessArgs) -> Result<()> {
    let source = fitness.vdot_source().await?;
    let estimate = VdotEstimator::default().estimate(&source)?;
    let paces = PaceCalculator::default().training_paces(estimate.vdot);
    display_paces(estimate.vdot, &paces);
    Ok(())
}
