// ABOUTME: Sport type enumeration for synced activities
// ABOUTME: Parses provider sport strings and serializes back to the same representation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of sport types seen in activity history
///
/// Provider strings (`"Run"`, `"TrailRun"`, ...) map to named variants;
/// anything unrecognized is kept verbatim in `Other` so it round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SportType {
    /// Road running
    Run,
    /// Trail running
    TrailRun,
    /// Treadmill running
    VirtualRun,
    /// Walking
    Walk,
    /// Hiking
    Hike,
    /// Cycling
    Ride,
    /// Swimming
    Swim,
    /// Any other provider sport type
    Other(String),
}

impl SportType {
    /// Parse a provider sport type string
    #[must_use]
    pub fn from_provider_type(value: &str) -> Self {
        match value {
            "Run" => Self::Run,
            "TrailRun" => Self::TrailRun,
            "VirtualRun" => Self::VirtualRun,
            "Walk" => Self::Walk,
            "Hike" => Self::Hike,
            "Ride" => Self::Ride,
            "Swim" => Self::Swim,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Provider string for this sport type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Run => "Run",
            Self::TrailRun => "TrailRun",
            Self::VirtualRun => "VirtualRun",
            Self::Walk => "Walk",
            Self::Hike => "Hike",
            Self::Ride => "Ride",
            Self::Swim => "Swim",
            Self::Other(name) => name,
        }
    }

    /// Whether the provider string names any kind of run
    #[must_use]
    pub fn is_run_like(&self) -> bool {
        self.as_str().contains("Run")
    }
}

impl From<String> for SportType {
    fn from(value: String) -> Self {
        Self::from_provider_type(&value)
    }
}

impl From<SportType> for String {
    fn from(value: SportType) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_strings_round_trip() {
        let parsed: SportType = serde_json::from_str("\"TrailRun\"").unwrap();
        assert_eq!(parsed, SportType::TrailRun);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"TrailRun\"");

        let unknown: SportType = serde_json::from_str("\"Kitesurf\"").unwrap();
        assert_eq!(unknown, SportType::Other("Kitesurf".to_owned()));
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"Kitesurf\"");
    }

    #[test]
    fn test_run_like() {
        assert!(SportType::Run.is_run_like());
        assert!(SportType::VirtualRun.is_run_like());
        assert!(!SportType::Walk.is_run_like());
        assert!(!SportType::Ride.is_run_like());
    }
}
