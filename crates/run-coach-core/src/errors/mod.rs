// ABOUTME: Unified error type and error codes shared by the engine and application crates
// ABOUTME: Defines AppError, ErrorCode, AppResult, and re-exports configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation in the workspace returns `AppResult<T>`. Plan
//! creation distinguishes caller mistakes (`InvalidInput`) from collaborator
//! failures (`ExternalServiceError`) so the caller can decide what to surface.

/// Configuration loading and validation errors
pub mod config;

pub use config::ConfigError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Caller supplied a value the engine cannot plan with
    InvalidInput,
    /// Configuration could not be loaded or failed validation
    ConfigInvalid,
    /// A collaborator (activity history, persistence) failed
    ExternalServiceError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Short human-readable description of the error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::ConfigInvalid => "Invalid configuration",
            Self::ExternalServiceError => "External service error",
            Self::InternalError => "Internal error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid caller input (race date in the past, VDOT out of range, ...)
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Collaborator failure
    pub fn external_service(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", message.into()),
        )
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Whether this error was caused by caller input
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        self.code == ErrorCode::InvalidInput
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("Serialization failed: {error}")).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_description() {
        let error = AppError::invalid_input("Race date must be in the future");
        assert_eq!(
            error.to_string(),
            "Invalid input: Race date must be in the future"
        );
        assert!(error.is_invalid_input());
    }

    #[test]
    fn test_config_error_conversion_keeps_source() {
        let error: AppError = ConfigError::InvalidRange("lookback_days must be 7-183").into();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(StdError::source(&error).is_some());
    }
}
