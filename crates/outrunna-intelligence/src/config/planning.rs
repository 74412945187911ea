// ABOUTME: Planning configuration: periodization factors, prediction exponent, and strategies
// ABOUTME: Loaded from PLANNING_* environment variables with defaults and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use outrunna_core::constants::periodization::{
    DEFAULT_WEEKLY_MINUTES, DELOAD_FACTOR, PROGRESSION_RATE, RACE_WEEK_FACTOR, TAPER_FACTOR,
};
use outrunna_core::constants::prediction::RIEGEL_EXPONENT;
use outrunna_core::constants::time_trial::{BUFFER_PCT, IMPROVEMENT_RATE};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::pace_zones::{PaceModel, PacePolicy};
use crate::performance_prediction::RaceTimePredictor;
use crate::session_selector::{SelectionStrategy, SessionSelector};

/// Tunables shared by every planning component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Riegel power-law exponent
    pub riegel_exponent: f64,
    /// Per-week volume increase within a wave
    pub progression_rate: f64,
    /// Deload week volume as a fraction of the wave base
    pub deload_factor: f64,
    /// Taper week volume as a fraction of peak
    pub taper_factor: f64,
    /// Race week volume as a fraction of peak
    pub race_week_factor: f64,
    /// Time-trial target improvement per wave
    pub improvement_rate: f64,
    /// Half-width of the time-trial target band
    pub buffer_pct: f64,
    /// Weekly budget used when the caller gives none
    pub default_weekly_minutes: f64,
    /// Zone table for pace annotations
    pub pace_policy: PacePolicy,
    /// Weekly session selection strategy
    pub selection_strategy: SelectionStrategy,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            riegel_exponent: RIEGEL_EXPONENT,
            progression_rate: PROGRESSION_RATE,
            deload_factor: DELOAD_FACTOR,
            taper_factor: TAPER_FACTOR,
            race_week_factor: RACE_WEEK_FACTOR,
            improvement_rate: IMPROVEMENT_RATE,
            buffer_pct: BUFFER_PCT,
            default_weekly_minutes: DEFAULT_WEEKLY_MINUTES,
            pace_policy: PacePolicy::default(),
            selection_strategy: SelectionStrategy::default(),
        }
    }
}

impl PlanningConfig {
    /// Load planning configuration from environment
    ///
    /// Unset or unparsable variables keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            riegel_exponent: env::var("PLANNING_RIEGEL_EXPONENT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(RIEGEL_EXPONENT),
            progression_rate: env::var("PLANNING_PROGRESSION_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(PROGRESSION_RATE),
            deload_factor: env::var("PLANNING_DELOAD_FACTOR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DELOAD_FACTOR),
            taper_factor: env::var("PLANNING_TAPER_FACTOR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(TAPER_FACTOR),
            race_week_factor: env::var("PLANNING_RACE_WEEK_FACTOR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(RACE_WEEK_FACTOR),
            improvement_rate: env::var("PLANNING_IMPROVEMENT_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(IMPROVEMENT_RATE),
            buffer_pct: env::var("PLANNING_BUFFER_PCT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(BUFFER_PCT),
            default_weekly_minutes: env::var("PLANNING_DEFAULT_WEEKLY_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_WEEKLY_MINUTES),
            pace_policy: env::var("PLANNING_PACE_POLICY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            selection_strategy: env::var("PLANNING_SELECTION_STRATEGY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Check that every factor and rate is usable
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.riegel_exponent.is_finite() && self.riegel_exponent > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "riegel_exponent must be positive",
            ));
        }

        let unit_fraction = |value: f64| value > 0.0 && value <= 1.0;
        if !unit_fraction(self.deload_factor) {
            return Err(ConfigError::InvalidRange("deload_factor must be in (0, 1]"));
        }
        if !unit_fraction(self.taper_factor) {
            return Err(ConfigError::InvalidRange("taper_factor must be in (0, 1]"));
        }
        if !unit_fraction(self.race_week_factor) {
            return Err(ConfigError::InvalidRange(
                "race_week_factor must be in (0, 1]",
            ));
        }

        if !(self.progression_rate.is_finite() && self.progression_rate >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "progression_rate must not be negative",
            ));
        }
        if !(self.improvement_rate.is_finite() && self.improvement_rate >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "improvement_rate must not be negative",
            ));
        }
        if !(0.0..1.0).contains(&self.buffer_pct) {
            return Err(ConfigError::InvalidRange("buffer_pct must be in [0, 1)"));
        }
        if !(self.default_weekly_minutes.is_finite() && self.default_weekly_minutes > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "default_weekly_minutes must be positive",
            ));
        }
        Ok(())
    }

    /// Predictor using the configured exponent
    #[must_use]
    pub const fn predictor(&self) -> RaceTimePredictor {
        RaceTimePredictor::new(self.riegel_exponent)
    }

    /// Pace model for the configured policy
    #[must_use]
    pub const fn pace_model(&self) -> PaceModel {
        PaceModel::new(self.pace_policy)
    }

    /// Session selector for the configured strategy and policy
    #[must_use]
    pub const fn selector(&self) -> SessionSelector {
        SessionSelector::new(self.selection_strategy, self.pace_model())
    }
}
