// ABOUTME: Calculation algorithms used by the planning engine
// ABOUTME: Currently the Daniels race-formula VDOT calculator and its inverse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Daniels VDOT formula and race-time prediction
pub mod vdot;

pub use vdot::{EquivalentTime, VdotCalculator};
