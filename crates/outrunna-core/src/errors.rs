// ABOUTME: Unified error types for the OutRunna planning engine
// ABOUTME: Defines ErrorCode, AppError, AppResult and the serialized error response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure in the engine is a rejected input: the caller shows the
//! message and keeps its last valid state. Error codes let the presentation
//! layer branch without string matching.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input (distance, day count, weekly budget)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A time was not `MM:SS` with non-negative integers
    #[serde(rename = "INVALID_TIME_FORMAT")]
    InvalidTimeFormat = 3002,
    /// A numeric value is outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Scheduling (4000-4999)
    /// Race date leaves no room for a taper and race week
    #[serde(rename = "INSUFFICIENT_LEAD_TIME")]
    InsufficientLeadTime = 4000,

    // Configuration (6000-6999)
    /// Planning configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidTimeFormat => "Invalid time format. Please use MM:SS",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InsufficientLeadTime => {
                "Race date must leave room for at least a taper week and a race week"
            }
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether the caller can recover by correcting its input
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::InternalError)
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details for display (offending input, limits)
    pub details: Value,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Malformed `MM:SS` input (PR or time-trial entry)
    pub fn invalid_time_format(input: impl Into<String>) -> Self {
        let input = input.into();
        Self::new(
            ErrorCode::InvalidTimeFormat,
            format!("'{input}' is not a valid MM:SS time"),
        )
        .with_details(json!({ "input": input }))
    }

    /// Race date too close to the start date
    #[must_use]
    pub fn insufficient_lead_time(total_weeks: i64, required_weeks: i64) -> Self {
        Self::new(
            ErrorCode::InsufficientLeadTime,
            format!("{total_weeks} whole week(s) available, {required_weeks} required"),
        )
        .with_details(json!({
            "total_weeks": total_weeks,
            "required_weeks": required_weeks,
        }))
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside the accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Serialized error format handed to the presentation layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(skip_serializing_if = "Value::is_null", default)]
    pub details: Value,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.to_string(),
                details: error.details.clone(),
            },
        }
    }
}
