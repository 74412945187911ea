// ABOUTME: Recalibration of plan pace annotations from a logged time-trial result
// ABOUTME: Derives a new 5K equivalent and rewrites every non-fixed session pace in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use outrunna_core::constants::race_distances::FIVE_K_MILES;
use outrunna_core::errors::{AppError, AppResult};
use outrunna_core::formatters::{
    format_pace, format_seconds, format_time_difference, parse_time_seconds,
};
use outrunna_core::models::{Plan, RunnerProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::PlanningConfig;
use crate::pace_zones::PaceModel;
use crate::performance_prediction::RaceTimePredictor;

/// Everything a time-trial submission changes or reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecalibrationOutcome {
    /// Equivalent 5K time in whole seconds
    pub new_pr_seconds: u32,
    /// Equivalent 5K time as `MM:SS`
    pub new_pr: String,
    /// New base 5K pace in minutes per mile
    pub new_base_pace: f64,
    /// New minus previous PR, in seconds (negative is faster)
    pub delta_seconds: i64,
    /// Signed delta as `±MM:SS`
    pub delta: String,
    /// Goal-race time predicted from the new PR
    pub predicted_goal_time: String,
    /// Profile carrying the new PR
    pub profile: RunnerProfile,
    /// Sessions whose pace annotation was rewritten
    pub sessions_updated: usize,
}

/// Applies time-trial results to an existing plan
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Recalibrator {
    predictor: RaceTimePredictor,
    pace_model: PaceModel,
}

impl Recalibrator {
    /// Create a recalibrator
    #[must_use]
    pub const fn new(predictor: RaceTimePredictor, pace_model: PaceModel) -> Self {
        Self {
            predictor,
            pace_model,
        }
    }

    /// Recalibrator using the configured exponent and pace policy
    #[must_use]
    pub const fn from_config(config: &PlanningConfig) -> Self {
        Self::new(config.predictor(), config.pace_model())
    }

    /// Rewrite plan paces from a time trial over `trial_miles`
    ///
    /// Time trials and the race keep their fixed annotations. Week structure,
    /// workout names, durations, RPE, and time-trial targets are never touched.
    /// A result equal to the trial time predicted from the current PR keeps
    /// that PR, so the plan comes back unchanged.
    ///
    /// # Errors
    ///
    /// - `InvalidTimeFormat` if `result` is not `MM:SS`
    /// - `InvalidInput` if the trial distance is not positive or the result is zero
    ///
    /// The plan is unchanged whenever an error is returned.
    pub fn apply_new_time_trial(
        &self,
        plan: &mut Plan,
        result: &str,
        trial_miles: f64,
        profile: &RunnerProfile,
    ) -> AppResult<RecalibrationOutcome> {
        let trial_seconds = parse_time_seconds(result)
            .inspect_err(|error| warn!(input = result, %error, "Rejected time-trial result"))?;
        let five_k_minutes = self
            .predictor
            .predict_minutes(f64::from(trial_seconds) / 60.0, trial_miles, FIVE_K_MILES)
            .inspect_err(|error| warn!(input = result, %error, "Rejected time-trial result"))?;

        let predicted_seconds = self.predicted_trial_seconds(profile, trial_miles)?;
        let new_pr_seconds = if trial_seconds == predicted_seconds {
            debug!(input = result, "Time trial matches current prediction");
            profile.pr_seconds
        } else {
            let rounded = (five_k_minutes * 60.0).round();
            if rounded < 1.0 || rounded > f64::from(u32::MAX) {
                return Err(AppError::invalid_input(format!(
                    "time-trial result '{result}' does not give a usable 5K time"
                )));
            }
            rounded as u32
        };

        let updated_profile = profile.with_pr_seconds(new_pr_seconds);
        let predicted_goal_time = self.predictor.predict_goal_time(&updated_profile)?;
        let new_base_pace = updated_profile.base_pace();

        let mut sessions_updated = 0;
        for session in plan.sessions_mut().filter(|s| !s.kind.has_fixed_pace()) {
            session.context_pace =
                self.pace_model
                    .session_range(new_base_pace, session.kind, session.rpe);
            sessions_updated += 1;
        }

        let delta_seconds = i64::from(new_pr_seconds) - i64::from(profile.pr_seconds);
        info!(
            trial_miles,
            new_pr_seconds,
            delta_seconds,
            sessions_updated,
            "Recalibrated plan paces"
        );

        Ok(RecalibrationOutcome {
            new_pr_seconds,
            new_pr: format_seconds(new_pr_seconds),
            new_base_pace,
            delta_seconds,
            delta: format_time_difference(delta_seconds),
            predicted_goal_time,
            profile: updated_profile,
            sessions_updated,
        })
    }

    /// Trial time predicted from the profile's PR, in whole seconds as displayed
    fn predicted_trial_seconds(&self, profile: &RunnerProfile, trial_miles: f64) -> AppResult<u32> {
        let minutes = self
            .predictor
            .predict_minutes(profile.pr_minutes(), FIVE_K_MILES, trial_miles)?;
        parse_time_seconds(&format_pace(minutes))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::plan_builder::PlanBuilder;
    use chrono::NaiveDate;
    use outrunna_core::errors::ErrorCode;
    use outrunna_core::models::{GoalDistance, SessionKind};

    fn plan_and_profile() -> (Plan, RunnerProfile) {
        let profile = RunnerProfile::new(GoalDistance::FiveK, "25:00", 3, 240.0).unwrap();
        let plan = PlanBuilder::default()
            .build_plan(
                &profile,
                NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
                NaiveDate::from_ymd_opt(2025, 4, 28).unwrap(),
                240.0,
            )
            .unwrap();
        (plan, profile)
    }

    #[test]
    fn test_faster_trial_gives_negative_delta() {
        let (mut plan, profile) = plan_and_profile();
        let outcome = Recalibrator::default()
            .apply_new_time_trial(&mut plan, "12:00", 2.0, &profile)
            .unwrap();
        assert_eq!(outcome.new_pr_seconds, 1146);
        assert_eq!(outcome.delta_seconds, -354);
        assert_eq!(outcome.delta, "-05:54");
        assert!(outcome.new_base_pace < profile.base_pace());
        assert_eq!(outcome.profile.pr_seconds, 1146);
    }

    #[test]
    fn test_fixed_sessions_keep_annotations() {
        let (mut plan, profile) = plan_and_profile();
        Recalibrator::default()
            .apply_new_time_trial(&mut plan, "12:00", 2.0, &profile)
            .unwrap();
        for session in plan.sessions() {
            if matches!(session.kind, SessionKind::TimeTrial | SessionKind::Race) {
                assert_eq!(session.context_pace, "All-out");
            }
        }
    }

    #[test]
    fn test_invalid_result_leaves_plan_untouched() {
        let (mut plan, profile) = plan_and_profile();
        let before = plan.clone();
        let error = Recalibrator::default()
            .apply_new_time_trial(&mut plan, "twelve", 2.0, &profile)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidTimeFormat);
        assert_eq!(plan, before);
    }

    #[test]
    fn test_zero_result_is_rejected() {
        let (mut plan, profile) = plan_and_profile();
        let before = plan.clone();
        let error = Recalibrator::default()
            .apply_new_time_trial(&mut plan, "00:00", 2.0, &profile)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(plan, before);
    }
}
