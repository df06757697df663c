// ABOUTME: Configuration error types for planning configuration validation and loading
// ABOUTME: Converts into the workspace AppError so callers see a single error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A lower bound is not below its upper bound, or thresholds are out of order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A set of shares does not sum to 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// A single value is outside its accepted domain
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse(_) => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_)
            | ConfigError::InvalidWeights(_)
            | ConfigError::ValueOutOfRange(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
