// ABOUTME: Core types and constants for the Run Coach training-plan engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Run Coach Core
//!
//! Foundation crate providing the shared types used by the planning engine and
//! the application crate. It holds no algorithms and changes infrequently,
//! which keeps incremental builds of the engine cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ConfigError`
//! - **constants**: Race distances and validation bounds
//! - **models**: Activities, race results, paces, workouts, and plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants (race distances, VDOT bounds, activity filters)
pub mod constants;

/// Core data models (activities, paces, workouts, plans)
pub mod models;
