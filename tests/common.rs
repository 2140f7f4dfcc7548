// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, fixed dates, and plan-service construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `run_coach`

use chrono::{NaiveDate, NaiveDateTime};
use run_coach::config::PlannerConfig;
use run_coach::history::ActivityHistoryProvider;
use run_coach::plans::PlanService;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Date and time shorthand
pub fn datetime(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, 0, 0).unwrap()
}

/// Fixed "today" used across plan tests
pub fn test_today() -> NaiveDate {
    date(2026, 3, 1)
}

/// Planner configuration with a fixed seed
pub fn seeded_config(seed: u64) -> PlannerConfig {
    PlannerConfig {
        random_seed: Some(seed),
        ..PlannerConfig::default()
    }
}

/// Plan service over the given history with a fixed seed
pub fn create_test_service(history: Arc<dyn ActivityHistoryProvider>) -> PlanService {
    init_test_logging();
    PlanService::new(history, seeded_config(42))
}
