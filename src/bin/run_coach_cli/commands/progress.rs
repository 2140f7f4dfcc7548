// ABOUTME: Plan progress command for run-coach
// ABOUTME: Auto-completes workouts from activities, then shows the current week and today's session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use run_coach::history::{ActivityHistoryProvider, InMemoryHistory, LookbackWindow};
use run_coach_planning::{summarize_week, todays_workout, ActivityMatcher, GeneratedPlan};
use tokio::fs;
use tracing::info;

use crate::helpers::display::{display_today, display_week_summary};

/// Plan week containing `today`, clamped to the plan's span
fn current_week(plan: &GeneratedPlan, today: NaiveDate) -> u32 {
    let elapsed_days = (today - plan.spec.start_date).num_days().max(0);
    let week = u32::try_from(elapsed_days / 7).unwrap_or(u32::MAX).saturating_add(1);
    week.clamp(1, plan.spec.total_weeks.max(1))
}

/// Match activities to the plan and report progress
pub async fn report(plan_path: &Path, activities: Option<&Path>, today: NaiveDate) -> Result<()> {
    let raw = fs::read_to_string(plan_path)
        .await
        .with_context(|| format!("Cannot read plan {}", plan_path.display()))?;
    let mut plan: GeneratedPlan = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid plan in {}", plan_path.display()))?;

    if let Some(path) = activities {
        let history = InMemoryHistory::from_json_file(path).await?;
        let samples = history
            .recent_activities(LookbackWindow::MostRecent(usize::MAX))
            .await?;
        let matched = samples
            .iter()
            .filter_map(|activity| ActivityMatcher::apply_match(activity, &mut plan.workouts))
            .count();
        info!(
            activities = samples.len(),
            matched, "Matched activities to scheduled workouts"
        );
    }

    println!("{}", plan.spec.name);
    let week = current_week(&plan, today);
    display_week_summary(&summarize_week(plan.spec.start_date, week, &plan.workouts));
    display_today(&todays_workout(&plan.workouts, today));
    Ok(())
}
