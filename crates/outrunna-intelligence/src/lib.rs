// ABOUTME: Plan generation engine for OutRunna: prediction, pacing, selection, periodization
// ABOUTME: Pure synchronous computation from a runner profile to a recalibratable plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `OutRunna` Intelligence
//!
//! Everything here is deterministic: identical profiles, dates, and
//! configuration produce identical plans.
//!
//! ## Modules
//!
//! - **`performance_prediction`**: Riegel race-time predictor and time-trial bands
//! - **`pace_zones`**: three-zone and seven-zone pace models
//! - **`workout_catalog`**: the fixed workout templates
//! - **`session_selector`**: weekly session selection strategies
//! - **`wave_builder`**: progression/deload waves with time-trial injection
//! - **`plan_builder`**: full plans ending in taper and race weeks
//! - **`recalibration`**: pace refresh from logged time trials
//! - **config**: `PlanningConfig` loaded from the environment

/// Planning configuration
pub mod config;
/// Pace zone tables and formatting
pub mod pace_zones;
/// Riegel race-time prediction
pub mod performance_prediction;
/// Full plan generation
pub mod plan_builder;
/// Time-trial driven pace recalibration
pub mod recalibration;
/// Weekly session selection
pub mod session_selector;
/// Wave periodization
pub mod wave_builder;
/// Fixed workout catalog
pub mod workout_catalog;

pub use config::{ConfigError, PlanningConfig};
pub use pace_zones::{PaceModel, PacePolicy, PaceZone};
pub use performance_prediction::{RaceTimePredictor, TargetBand};
pub use plan_builder::PlanBuilder;
pub use recalibration::{RecalibrationOutcome, Recalibrator};
pub use session_selector::{SelectionStrategy, SessionSelector};
pub use wave_builder::WaveBuilder;
pub use workout_catalog::{WorkoutTemplate, CATALOG};
