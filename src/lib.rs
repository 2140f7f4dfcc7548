// ABOUTME: Main library entry point for the Run Coach training-plan application
// ABOUTME: Wires configuration, logging, activity history, and plan creation around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Run Coach
//!
//! Generates periodized running plans from a race goal and a fitness estimate.
//! The pure engine lives in `run_coach_planning`; this crate adds the ambient
//! pieces around it.
//!
//! ## Architecture
//!
//! - **config**: Planner settings from `RUN_COACH_*` environment variables
//! - **logging**: `tracing` subscriber setup
//! - **history**: The activity history collaborator boundary
//! - **sync**: Fire-and-forget initial activity sync
//! - **plans**: Plan creation service used by the CLI and embedding callers
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use run_coach::config::PlannerConfig;
//! use run_coach::history::InMemoryHistory;
//! use run_coach::plans::{CreatePlanRequest, PlanService};
//! use run_coach_planning::VdotInputs;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let service = PlanService::new(Arc::new(InMemoryHistory::default()), PlannerConfig::default());
//! let race_date = NaiveDate::from_ymd_opt(2026, 6, 7).unwrap_or_default();
//! let request = CreatePlanRequest::new(10_000, race_date).with_vdot_inputs(VdotInputs::manual(45.0));
//! let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default();
//! let plan = service.create_plan(&request, today).await?;
//! println!("{} weeks, VDOT {}", plan.spec.total_weeks, plan.spec.vdot);
//! # Ok(())
//! # }
//! ```

/// Environment-based planner configuration
pub mod config;

/// Activity history provider trait and in-memory implementation
pub mod history;

/// Structured logging setup
pub mod logging;

/// Plan creation service
pub mod plans;

/// Background initial activity sync
pub mod sync;

pub use run_coach_core::errors::{AppError, AppResult, ErrorCode};
pub use run_coach_planning::{GeneratedPlan, VdotInputs};
