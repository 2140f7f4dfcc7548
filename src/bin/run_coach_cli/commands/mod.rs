// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for run-coach
// ABOUTME: Provides access to plan, pace, VDOT, and progress commands

pub mod paces;
pub mod plan;
pub mod progress;
pub mod vdot;
