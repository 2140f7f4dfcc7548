// ABOUTME: Fire-and-forget initial activity sync after an account is connected
// ABOUTME: Spawns a detached tokio task whose failures are logged and never propagated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::history::{ActivityHistoryProvider, LookbackWindow};

/// Fetch the `count` most recent activities in the background
///
/// The caller may ignore the returned handle; the task never panics on
/// provider failure and never reports errors back.
pub fn spawn_initial_sync(
    provider: Arc<dyn ActivityHistoryProvider>,
    count: usize,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match provider
            .recent_activities(LookbackWindow::MostRecent(count))
            .await
        {
            Ok(activities) => info!(
                provider = provider.provider_name(),
                requested = count,
                synced = activities.len(),
                "Initial activity sync completed"
            ),
            Err(error) => warn!(
                provider = provider.provider_name(),
                requested = count,
                error = %error,
                "Initial activity sync failed"
            ),
        }
    })
}
