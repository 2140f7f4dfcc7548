// ABOUTME: Activity history collaborator boundary used for fitness estimation and initial sync
// ABOUTME: Async provider trait, lookback windows, and a Vec-backed in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Activity History
//!
//! The planning engine never fetches activities itself. Callers supply them
//! through `ActivityHistoryProvider`, which a Strava-backed store, a database,
//! or the in-memory provider below can implement.
//!
//! ## Thread Safety
//!
//! `InMemoryHistory` guards its activities with a `RwLock` so one instance can
//! serve concurrent plan requests and background syncs.

use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDateTime};
use run_coach_core::errors::{AppError, AppResult};
use run_coach_core::models::ActivitySample;
use std::cmp::Reverse;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tokio::fs;
use tracing::debug;

/// Which slice of history to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookbackWindow {
    /// Activities started within the last N days
    Days(u32),
    /// The N most recent activities
    MostRecent(usize),
}

/// Source of synced activities
#[async_trait]
pub trait ActivityHistoryProvider: Send + Sync {
    /// Activities inside the window, most recent first
    async fn recent_activities(&self, window: LookbackWindow) -> AppResult<Vec<ActivitySample>>;

    /// Name used in logs and error messages
    fn provider_name(&self) -> &'static str;
}

/// Provider name reported by `InMemoryHistory`
const IN_MEMORY_PROVIDER: &str = "in_memory";

/// Vec-backed activity history
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    activities: Arc<RwLock<Vec<ActivitySample>>>,
    as_of: Option<NaiveDateTime>,
}

impl InMemoryHistory {
    /// Provider pre-loaded with activities
    #[must_use]
    pub fn with_activities(activities: Vec<ActivitySample>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
            as_of: None,
        }
    }

    /// Load activities from a JSON array file
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the file cannot be read or is not a
    /// JSON array of activities
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|error| {
            AppError::invalid_input(format!("Cannot read {}: {error}", path.display()))
                .with_source(error)
        })?;
        let activities: Vec<ActivitySample> = serde_json::from_str(&raw).map_err(|error| {
            AppError::invalid_input(format!("Invalid activities in {}: {error}", path.display()))
                .with_source(error)
        })?;

        debug!(count = activities.len(), path = %path.display(), "Loaded activities from file");
        Ok(Self::with_activities(activities))
    }

    /// Measure day windows from a fixed instant instead of the local clock
    #[must_use]
    pub const fn as_of(mut self, reference: NaiveDateTime) -> Self {
        self.as_of = Some(reference);
        self
    }

    /// Append an activity
    ///
    /// # Errors
    ///
    /// Returns `AppError::InternalError` if the lock is poisoned
    pub fn add_activity(&self, activity: ActivitySample) -> AppResult<()> {
        self.activities
            .write()
            .map_err(|_| AppError::internal("Activity history lock poisoned"))?
            .push(activity);
        Ok(())
    }

    /// Number of stored activities
    ///
    /// # Errors
    ///
    /// Returns `AppError::InternalError` if the lock is poisoned
    pub fn len(&self) -> AppResult<usize> {
        Ok(self
            .activities
            .read()
            .map_err(|_| AppError::internal("Activity history lock poisoned"))?
            .len())
    }

    /// Whether the history holds no activities
    ///
    /// # Errors
    ///
    /// Returns `AppError::InternalError` if the lock is poisoned
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl ActivityHistoryProvider for InMemoryHistory {
    async fn recent_activities(&self, window: LookbackWindow) -> AppResult<Vec<ActivitySample>> {
        let mut activities = self
            .activities
            .read()
            .map_err(|_| AppError::internal("Activity history lock poisoned"))?
            .clone();
        activities.sort_by_key(|activity| Reverse(activity.start_date_local));

        match window {
            LookbackWindow::Days(days) => {
                let reference = self.as_of.unwrap_or_else(|| Local::now().naive_local());
                let cutoff = reference
                    .checked_sub_signed(Duration::days(i64::from(days)))
                    .unwrap_or(NaiveDateTime::MIN);
                activities.retain(|activity| activity.start_date_local >= cutoff);
            }
            LookbackWindow::MostRecent(count) => activities.truncate(count),
        }

        Ok(activities)
    }

    fn provider_name(&self) -> &'static str {
        IN_MEMORY_PROVIDER
    }
}
