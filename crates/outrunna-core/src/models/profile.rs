// ABOUTME: Goal distance enumeration and the runner profile built from user input
// ABOUTME: Validates day counts and weekly budgets, derives base 5K pace from the PR
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::periodization::{MAX_DAYS_PER_WEEK, MIN_DAYS_PER_WEEK};
use crate::constants::race_distances::{
    FIVE_K_MILES, HALF_MARATHON_MILES, MARATHON_MILES, SHORT_TIME_TRIAL_MILES, TEN_K_MILES,
};
use crate::constants::race_week::{FIVE_K_RACE_MINUTES, LONG_RACE_MINUTES};
use crate::errors::{AppError, AppResult};
use crate::formatters::{format_seconds, parse_time_seconds};

/// Goal race distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalDistance {
    /// 5 kilometres
    FiveK,
    /// 10 kilometres
    TenK,
    /// Half marathon
    HalfMarathon,
    /// Marathon
    Marathon,
}

impl GoalDistance {
    /// Every goal distance, shortest first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::HalfMarathon, Self::Marathon];

    /// Canonical mile-equivalent
    #[must_use]
    pub const fn miles(self) -> f64 {
        match self {
            Self::FiveK => FIVE_K_MILES,
            Self::TenK => TEN_K_MILES,
            Self::HalfMarathon => HALF_MARATHON_MILES,
            Self::Marathon => MARATHON_MILES,
        }
    }

    /// Distance of the deload-week time trial
    ///
    /// 5K runners trial over 2 miles; everyone else runs a full 5K.
    #[must_use]
    pub const fn time_trial_miles(self) -> f64 {
        match self {
            Self::FiveK => SHORT_TIME_TRIAL_MILES,
            Self::TenK | Self::HalfMarathon | Self::Marathon => FIVE_K_MILES,
        }
    }

    /// Race-day session duration in minutes
    #[must_use]
    pub const fn race_minutes(self) -> u32 {
        match self {
            Self::FiveK => FIVE_K_RACE_MINUTES,
            Self::TenK | Self::HalfMarathon | Self::Marathon => LONG_RACE_MINUTES,
        }
    }
}

impl fmt::Display for GoalDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FiveK => write!(f, "5K"),
            Self::TenK => write!(f, "10K"),
            Self::HalfMarathon => write!(f, "Half"),
            Self::Marathon => write!(f, "Marathon"),
        }
    }
}

impl FromStr for GoalDistance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "half" | "half-marathon" | "half_marathon" => Ok(Self::HalfMarathon),
            "marathon" => Ok(Self::Marathon),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal distance '{other}' (expected 5K, 10K, Half, or Marathon)"
            ))),
        }
    }
}

/// Runner input to plan generation
///
/// Base 5K pace is derived from the PR on demand so the two can never drift
/// apart. Recalibration replaces the PR through [`RunnerProfile::with_pr_seconds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerProfile {
    /// Goal race distance
    pub goal: GoalDistance,
    /// Training days per week (3-6)
    pub days_per_week: u8,
    /// Weekly duration budget in minutes
    pub weekly_minutes: f64,
    /// 5K personal record in whole seconds
    pub pr_seconds: u32,
}

impl RunnerProfile {
    /// Build a profile from user input
    ///
    /// # Errors
    ///
    /// - `InvalidTimeFormat` if `pr` is not `MM:SS`
    /// - `InvalidInput` if the PR is zero or the weekly budget is not positive
    /// - `ValueOutOfRange` if `days_per_week` is outside 3-6
    pub fn new(
        goal: GoalDistance,
        pr: &str,
        days_per_week: u8,
        weekly_minutes: f64,
    ) -> AppResult<Self> {
        let pr_seconds = parse_time_seconds(pr)?;
        if pr_seconds == 0 {
            return Err(AppError::invalid_input("5K PR must be greater than 0:00"));
        }
        if !(MIN_DAYS_PER_WEEK..=MAX_DAYS_PER_WEEK).contains(&days_per_week) {
            return Err(AppError::out_of_range(format!(
                "days per week must be between {MIN_DAYS_PER_WEEK} and {MAX_DAYS_PER_WEEK}, got {days_per_week}"
            )));
        }
        if !weekly_minutes.is_finite() || weekly_minutes <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "weekly minutes must be positive, got {weekly_minutes}"
            )));
        }

        Ok(Self {
            goal,
            days_per_week,
            weekly_minutes,
            pr_seconds,
        })
    }

    /// Base 5K pace in minutes per mile
    #[must_use]
    pub fn base_pace(&self) -> f64 {
        f64::from(self.pr_seconds) / FIVE_K_MILES / 60.0
    }

    /// PR as fractional minutes
    #[must_use]
    pub fn pr_minutes(&self) -> f64 {
        f64::from(self.pr_seconds) / 60.0
    }

    /// PR rendered as `MM:SS`
    #[must_use]
    pub fn pr_display(&self) -> String {
        format_seconds(self.pr_seconds)
    }

    /// Same runner with a different weekly budget
    #[must_use]
    pub fn with_weekly_minutes(&self, weekly_minutes: f64) -> Self {
        Self {
            weekly_minutes,
            ..self.clone()
        }
    }

    /// Same runner with a new 5K PR
    #[must_use]
    pub fn with_pr_seconds(&self, pr_seconds: u32) -> Self {
        Self {
            pr_seconds,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_goal_distance_parsing() {
        assert_eq!("5K".parse::<GoalDistance>().unwrap(), GoalDistance::FiveK);
        assert_eq!("half".parse::<GoalDistance>().unwrap(), GoalDistance::HalfMarathon);
        assert_eq!(" Marathon ".parse::<GoalDistance>().unwrap(), GoalDistance::Marathon);
        assert!("ultra".parse::<GoalDistance>().is_err());
    }

    #[test]
    fn test_goal_distance_round_trips_through_display() {
        for goal in GoalDistance::ALL {
            assert_eq!(goal.to_string().parse::<GoalDistance>().unwrap(), goal);
        }
    }

    #[test]
    fn test_base_pace_from_pr() {
        let profile = RunnerProfile::new(GoalDistance::FiveK, "25:00", 3, 240.0).unwrap();
        assert!((profile.base_pace() - 1500.0 / 3.1 / 60.0).abs() < 1e-12);
        assert_eq!(profile.pr_display(), "25:00");
    }

    #[test]
    fn test_profile_validation() {
        let days = RunnerProfile::new(GoalDistance::TenK, "25:00", 7, 240.0).unwrap_err();
        assert_eq!(days.code, ErrorCode::ValueOutOfRange);

        let pr = RunnerProfile::new(GoalDistance::TenK, "25", 4, 240.0).unwrap_err();
        assert_eq!(pr.code, ErrorCode::InvalidTimeFormat);

        let budget = RunnerProfile::new(GoalDistance::TenK, "25:00", 4, 0.0).unwrap_err();
        assert_eq!(budget.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_time_trial_distance_by_goal() {
        assert!((GoalDistance::FiveK.time_trial_miles() - 2.0).abs() < f64::EPSILON);
        assert!((GoalDistance::Marathon.time_trial_miles() - 3.1).abs() < f64::EPSILON);
    }
}
