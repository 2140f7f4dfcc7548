// ABOUTME: Activity history test doubles for plan-service and sync tests
// ABOUTME: Failing and call-counting providers implementing the history trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use async_trait::async_trait;
use run_coach::history::{ActivityHistoryProvider, LookbackWindow};
use run_coach_core::errors::{AppError, AppResult};
use run_coach_core::models::ActivitySample;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Provider whose every fetch fails
#[derive(Debug, Default)]
pub struct FailingHistory {
    calls: AtomicUsize,
}

impl FailingHistory {
    /// Number of fetch attempts so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ActivityHistoryProvider for FailingHistory {
    async fn recent_activities(&self, _window: LookbackWindow) -> AppResult<Vec<ActivitySample>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::internal("upstream unavailable"))
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }
}

/// Provider that records the windows it was asked for
#[derive(Debug, Default)]
pub struct RecordingHistory {
    activities: Vec<ActivitySample>,
    windows: Mutex<Vec<LookbackWindow>>,
}

impl RecordingHistory {
    /// Provider returning `activities` for every window
    pub fn new(activities: Vec<ActivitySample>) -> Self {
        Self {
            activities,
            windows: Mutex::new(Vec::new()),
        }
    }

    /// Windows requested so far
    pub fn windows(&self) -> Vec<LookbackWindow> {
        self.windows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActivityHistoryProvider for RecordingHistory {
    async fn recent_activities(&self, window: LookbackWindow) -> AppResult<Vec<ActivitySample>> {
        self.windows.lock().unwrap().push(window);
        Ok(self.activities.clone())
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}
