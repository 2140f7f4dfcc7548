// ABOUTME: Resolves a manual value, race result, or activity history into one VDOT score
// ABOUTME: Sources are a tagged union resolved once; the result is always within 30-85
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # VDOT Estimation
//!
//! Fitness comes from exactly one source, chosen in priority order:
//!
//! 1. A manual VDOT supplied by the runner
//! 2. A recent race result, scored with the Daniels race formula
//! 3. Recent activity history, scored from distance-weighted easy pace
//!
//! `VdotInputs` turns raw request fields into a `VdotSource` so callers only
//! fetch activity history when neither of the first two is present.

use run_coach_core::constants::vdot_bounds::{MAX_VDOT, MIN_VDOT};
use run_coach_core::errors::{AppError, AppResult};
use run_coach_core::models::{ActivitySample, RaceResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::activity_analyzer::{ActivityAnalysis, ActivityAnalyzer};
use crate::algorithms::VdotCalculator;

/// Where a fitness estimate comes from
#[derive(Debug, Clone, PartialEq)]
pub enum VdotSource {
    /// Runner-supplied VDOT, used verbatim
    Manual(f64),
    /// Recent race performance
    RaceResult(RaceResult),
    /// Recent synced activities
    ActivityHistory(Vec<ActivitySample>),
}

/// Which source produced an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VdotProvenance {
    /// Runner-supplied value
    Manual,
    /// Daniels race formula
    RaceResult,
    /// Activity-history analysis
    ActivityHistory,
}

/// Resolved fitness estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdotEstimate {
    /// VDOT within 30-85
    pub vdot: f64,
    /// Source of the estimate
    pub provenance: VdotProvenance,
    /// Analysis details when the estimate came from activity history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ActivityAnalysis>,
}

/// Raw fitness fields of a plan request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VdotInputs {
    /// Manual VDOT override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_vdot: Option<f64>,
    /// Recent race distance in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_race_distance: Option<u32>,
    /// Recent race time in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_race_time: Option<u32>,
}

impl VdotInputs {
    /// Inputs with a manual VDOT
    #[must_use]
    pub const fn manual(vdot: f64) -> Self {
        Self {
            manual_vdot: Some(vdot),
            recent_race_distance: None,
            recent_race_time: None,
        }
    }

    /// Inputs with a recent race result
    #[must_use]
    pub const fn race(distance_meters: u32, time_seconds: u32) -> Self {
        Self {
            manual_vdot: None,
            recent_race_distance: Some(distance_meters),
            recent_race_time: Some(time_seconds),
        }
    }

    /// Source named explicitly by the inputs, or `None` when activity history is needed
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when only one of the two race fields is present
    pub fn explicit_source(&self) -> AppResult<Option<VdotSource>> {
        let race = match (self.recent_race_distance, self.recent_race_time) {
            (Some(distance), Some(time)) => Some(RaceResult::new(distance, time)),
            (None, None) => None,
            _ => {
                return Err(AppError::invalid_input(
                    "Recent race distance and time must be provided together",
                ))
            }
        };

        Ok(self
            .manual_vdot
            .map(VdotSource::Manual)
            .or_else(|| race.map(VdotSource::RaceResult)))
    }

    /// Whether activity history must be loaded to estimate fitness
    #[must_use]
    pub const fn needs_history(&self) -> bool {
        self.manual_vdot.is_none()
            && self.recent_race_distance.is_none()
            && self.recent_race_time.is_none()
    }
}

/// Fitness estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct VdotEstimator {
    analyzer: ActivityAnalyzer,
}

impl VdotEstimator {
    /// Estimator using a custom activity analyzer
    #[must_use]
    pub const fn new(analyzer: ActivityAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Resolve a source into a VDOT estimate
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if a manual VDOT is outside 30-85 or a
    /// race result fails validation
    pub fn estimate(&self, source: &VdotSource) -> AppResult<VdotEstimate> {
        match source {
            VdotSource::Manual(vdot) => {
                if !(MIN_VDOT..=MAX_VDOT).contains(vdot) {
                    return Err(AppError::invalid_input(format!(
                        "VDOT {vdot:.1} is outside the supported range ({MIN_VDOT}-{MAX_VDOT})"
                    )));
                }
                debug!(vdot, "Using manual VDOT");
                Ok(VdotEstimate {
                    vdot: *vdot,
                    provenance: VdotProvenance::Manual,
                    analysis: None,
                })
            }
            VdotSource::RaceResult(race) => {
                race.validate()?;
                let raw = VdotCalculator::calculate_from_race(race);
                let vdot = raw.clamp(MIN_VDOT, MAX_VDOT);
                if (vdot - raw).abs() > f64::EPSILON {
                    warn!(
                        raw_vdot = raw,
                        clamped_vdot = vdot,
                        distance_meters = race.distance_meters,
                        time_seconds = race.time_seconds,
                        "Race VDOT outside supported range, clamping"
                    );
                } else {
                    debug!(vdot, "Calculated VDOT from race result");
                }
                Ok(VdotEstimate {
                    vdot,
                    provenance: VdotProvenance::RaceResult,
                    analysis: None,
                })
            }
            VdotSource::ActivityHistory(activities) => {
                let analysis = self.analyzer.analyze(activities);
                Ok(VdotEstimate {
                    vdot: analysis.vdot,
                    provenance: VdotProvenance::ActivityHistory,
                    analysis: Some(analysis),
                })
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_takes_priority_over_race() {
        let inputs = VdotInputs {
            manual_vdot: Some(50.0),
            recent_race_distance: Some(5_000),
            recent_race_time: Some(1_500),
        };
        assert_eq!(
            inputs.explicit_source().unwrap(),
            Some(VdotSource::Manual(50.0))
        );
    }

    #[test]
    fn test_partial_race_is_rejected() {
        let inputs = VdotInputs {
            recent_race_distance: Some(5_000),
            ..VdotInputs::default()
        };
        assert!(inputs.explicit_source().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_empty_inputs_need_history() {
        let inputs = VdotInputs::default();
        assert!(inputs.needs_history());
        assert_eq!(inputs.explicit_source().unwrap(), None);
    }

    #[test]
    fn test_slow_race_is_clamped() {
        let estimate = VdotEstimator::default()
            .estimate(&VdotSource::RaceResult(RaceResult::new(5_000, 3_000)))
            .unwrap();
        assert!((estimate.vdot - MIN_VDOT).abs() < f64::EPSILON);
        assert_eq!(estimate.provenance, VdotProvenance::RaceResult);
    }
}
