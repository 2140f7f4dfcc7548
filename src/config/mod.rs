// ABOUTME: Configuration module for the Run Coach application crate
// ABOUTME: Environment-only configuration with validation, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Planner settings loaded from environment variables
pub mod environment;

pub use environment::PlannerConfig;
