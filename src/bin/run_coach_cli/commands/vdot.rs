// ABOUTME: Fitness estimate command for run-coach
// ABOUTME: Prints the resolved VDOT, its source, and equivalent race predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use run_coach_planning::{VdotCalculator, VdotEstimator};

use crate::helpers::display::{display_equivalent_times, display_estimate};
use crate::helpers::input::FitnessArgs;

/// Estimate VDOT and print race predictions
pub async fn estimate(fitness: &FitnessArgs) -> Result<()> {
    let source = fitness.vdot_source().await?;
    let estimate = VdotEstimator::default().estimate(&source)?;
    display_estimate(&estimate);
    display_equivalent_times(&VdotCalculator::equivalent_times(estimate.vdot));
    Ok(())
}
