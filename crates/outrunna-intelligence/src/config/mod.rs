// ABOUTME: Configuration module for outrunna-intelligence crate
// ABOUTME: Re-exports planning configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration validation errors
pub mod error;
/// Periodization, prediction, and selection tunables
pub mod planning;

pub use error::ConfigError;
pub use planning::PlanningConfig;
