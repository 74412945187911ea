// ABOUTME: Race-time prediction using Riegel's power-law formula
// ABOUTME: Single source of predicted goal times and time-trial target bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use outrunna_core::constants::prediction::RIEGEL_EXPONENT;
use outrunna_core::constants::race_distances::FIVE_K_MILES;
use outrunna_core::errors::{AppError, AppResult};
use outrunna_core::formatters::{format_pace, parse_time_minutes};
use outrunna_core::models::RunnerProfile;
use serde::{Deserialize, Serialize};

/// Fast and slow ends of a time-trial target, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBand {
    /// Fast end
    pub low_minutes: f64,
    /// Slow end
    pub high_minutes: f64,
}

/// Riegel race-time predictor
///
/// Riegel's formula: Time2 = Time1 × (Distance2 / Distance1)^k
///
/// The exponent models the sub-linear falloff of pace as distance grows.
/// 1.06 is the classic value; individual runners range roughly 1.03-1.08.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceTimePredictor {
    exponent: f64,
}

impl Default for RaceTimePredictor {
    fn default() -> Self {
        Self::new(RIEGEL_EXPONENT)
    }
}

impl RaceTimePredictor {
    /// Create a predictor with a custom exponent
    #[must_use]
    pub const fn new(exponent: f64) -> Self {
        Self { exponent }
    }

    /// Power-law exponent in use
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Predict minutes at `target_miles` from minutes at `known_miles`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either distance is not positive or the known
    /// time is negative or not finite.
    pub fn predict_minutes(
        &self,
        known_minutes: f64,
        known_miles: f64,
        target_miles: f64,
    ) -> AppResult<f64> {
        if !(known_miles > 0.0 && target_miles > 0.0) {
            return Err(AppError::invalid_input(format!(
                "distances must be positive (got {known_miles} and {target_miles})"
            )));
        }
        if !known_minutes.is_finite() || known_minutes < 0.0 {
            return Err(AppError::invalid_input(format!(
                "time must be a non-negative number of minutes (got {known_minutes})"
            )));
        }

        Ok(known_minutes * (target_miles / known_miles).powf(self.exponent))
    }

    /// Predict minutes at `target_miles` from an `MM:SS` time at `known_miles`
    ///
    /// The result is not rounded; formatting is the caller's concern.
    ///
    /// # Errors
    ///
    /// - `InvalidTimeFormat` if `time` is not `MM:SS`
    /// - `InvalidInput` if either distance is not positive
    pub fn predict(&self, time: &str, known_miles: f64, target_miles: f64) -> AppResult<f64> {
        let known_minutes = parse_time_minutes(time)?;
        self.predict_minutes(known_minutes, known_miles, target_miles)
    }

    /// Predict and format as `MM:SS`
    ///
    /// # Errors
    ///
    /// Same as [`RaceTimePredictor::predict`].
    pub fn predict_time(&self, time: &str, known_miles: f64, target_miles: f64) -> AppResult<String> {
        self.predict(time, known_miles, target_miles)
            .map(format_pace)
    }

    /// Goal-race time predicted from the runner's 5K PR, as `MM:SS`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` only if the profile was built around validation.
    pub fn predict_goal_time(&self, profile: &RunnerProfile) -> AppResult<String> {
        self.predict_minutes(profile.pr_minutes(), FIVE_K_MILES, profile.goal.miles())
            .map(format_pace)
    }

    /// Target band for the time trial closing wave `wave_index` (1-based)
    ///
    /// The trial time predicted from the PR is decayed by `improvement_rate`
    /// per wave (never below zero) and widened by `buffer_pct` either side.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the trial distance is not positive.
    pub fn time_trial_target(
        &self,
        pr_minutes: f64,
        wave_index: u32,
        trial_miles: f64,
        improvement_rate: f64,
        buffer_pct: f64,
    ) -> AppResult<TargetBand> {
        let baseline = self.predict_minutes(pr_minutes, FIVE_K_MILES, trial_miles)?;
        let factor = improvement_rate.mul_add(-f64::from(wave_index), 1.0).max(0.0);
        let target = baseline * factor;

        Ok(TargetBand {
            low_minutes: target * (1.0 - buffer_pct),
            high_minutes: target * (1.0 + buffer_pct),
        })
    }
}
