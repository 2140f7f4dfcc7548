// ABOUTME: Training pace table derived from a VDOT fitness score
// ABOUTME: Holds easy range plus marathon, threshold, interval, and repetition paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::workout::PaceZone;

/// A pace range in seconds per kilometer (`min` is the faster end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceRange {
    /// Faster end of the range (seconds per km)
    pub min: u32,
    /// Slower end of the range (seconds per km)
    pub max: u32,
}

/// Training paces in seconds per kilometer, immutable once computed for a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPaces {
    /// Easy/conversational range
    pub easy: PaceRange,
    /// Marathon pace
    pub marathon: u32,
    /// Threshold (tempo) pace
    pub threshold: u32,
    /// Interval (VO2max) pace
    pub interval: u32,
    /// Repetition (speed) pace
    pub repetition: u32,
}

impl TrainingPaces {
    /// Unrounded midpoint of the easy range
    #[must_use]
    pub fn easy_midpoint(&self) -> f64 {
        f64::from(self.easy.min + self.easy.max) / 2.0
    }

    /// Pace used for a zone when estimating segment durations
    ///
    /// Easy segments run at the midpoint of the easy range.
    #[must_use]
    pub fn pace_for_zone(&self, zone: PaceZone) -> f64 {
        match zone {
            PaceZone::Easy => self.easy_midpoint(),
            PaceZone::Marathon => f64::from(self.marathon),
            PaceZone::Threshold => f64::from(self.threshold),
            PaceZone::Interval => f64::from(self.interval),
            PaceZone::Repetition => f64::from(self.repetition),
        }
    }
}
