// ABOUTME: Fitness-source arguments shared by the plan, paces, and vdot commands
// ABOUTME: Parses race times and resolves flags into VDOT inputs or an activity history file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use run_coach::history::{ActivityHistoryProvider, InMemoryHistory, LookbackWindow};
use run_coach_planning::{VdotInputs, VdotSource};

/// Where the runner's fitness comes from
#[derive(Debug, Clone, Args)]
pub struct FitnessArgs {
    /// Manual VDOT (30-85); takes priority over everything else
    #[arg(long)]
    pub vdot: Option<f64>,

    /// Recent race distance in meters
    #[arg(long, requires = "race_time")]
    pub race_distance: Option<u32>,

    /// Recent race time as seconds, MM:SS, or H:MM:SS
    #[arg(long, requires = "race_distance", value_parser = parse_race_time)]
    pub race_time: Option<u32>,

    /// JSON array of synced activities used when no VDOT or race is given
    #[arg(long)]
    pub activities: Option<PathBuf>,
}

impl FitnessArgs {
    /// Manual and race fields as engine inputs
    pub const fn vdot_inputs(&self) -> VdotInputs {
        VdotInputs {
            manual_vdot: self.vdot,
            recent_race_distance: self.race_distance,
            recent_race_time: self.race_time,
        }
    }

    /// Activity history from `--activities`, empty when the flag is absent
    ///
    /// Day windows are measured from `today`.
    pub async fn history(&self, today: NaiveDate) -> Result<InMemoryHistory> {
        let history = match &self.activities {
            Some(path) => InMemoryHistory::from_json_file(path).await?,
            None => InMemoryHistory::default(),
        };
        Ok(history.as_of(today.and_time(NaiveTime::MIN)))
    }

    /// Resolve a single fitness source without a lookback window
    pub async fn vdot_source(&self) -> Result<VdotSource> {
        if let Some(source) = self.vdot_inputs().explicit_source()? {
            return Ok(source);
        }
        let Some(path) = &self.activities else {
            bail!("Provide --vdot, --race-distance with --race-time, or --activities");
        };
        let activities = InMemoryHistory::from_json_file(path)
            .await?
            .recent_activities(LookbackWindow::MostRecent(usize::MAX))
            .await?;
        Ok(VdotSource::ActivityHistory(activities))
    }
}

/// Parse `1200`, `20:00`, or `1:30:00` into seconds
pub fn parse_race_time(value: &str) -> Result<u32, String> {
    let parts = value
        .trim()
        .split(':')
        .map(str::parse::<u32>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("'{value}' is not a time (use seconds, MM:SS, or H:MM:SS)"))?;

    let seconds = match parts.as_slice() {
        [seconds] => *seconds,
        [minutes, seconds] if *seconds < 60 => minutes * 60 + seconds,
        [hours, minutes, seconds] if *minutes < 60 && *seconds < 60 => {
            hours * 3600 + minutes * 60 + seconds
        }
        _ => return Err(format!("'{value}' is not a time (use seconds, MM:SS, or H:MM:SS)")),
    };

    if seconds == 0 {
        return Err("Race time must be positive".to_owned());
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_race_time() {
        assert_eq!(parse_race_time("1200"), Ok(1200));
        assert_eq!(parse_race_time("20:00"), Ok(1200));
        assert_eq!(parse_race_time("1:30:05"), Ok(5405));
        assert!(parse_race_time("20:75").is_err());
        assert!(parse_race_time("fast").is_err());
        assert!(parse_race_time("0").is_err());
    }
}
