// ABOUTME: Wave builder assembling three progression weeks and a deload week
// ABOUTME: Injects the deload-week time trial in place of the first hard session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use outrunna_core::constants::annotations::{ALL_OUT, TIME_TRIAL_DESCRIPTION};
use outrunna_core::constants::periodization::WAVE_LENGTH;
use outrunna_core::constants::time_trial::{LONG_TRIAL_MINUTES, SHORT_TRIAL_MINUTES};
use outrunna_core::models::{GoalDistance, RunnerProfile, Session, SessionKind, Week, WeekLabel};
use tracing::debug;

use crate::config::PlanningConfig;
use crate::session_selector::SessionSelector;
use crate::workout_catalog::max_catalog_rpe;

/// Round a weekly volume to one decimal place
#[must_use]
pub fn round_minutes(minutes: f64) -> f64 {
    (minutes * 10.0).round() / 10.0
}

/// Deload-week time trial for a goal, on the given day
#[must_use]
pub fn time_trial_session(goal: GoalDistance, day: String) -> Session {
    let miles = goal.time_trial_miles();
    let duration_minutes = match goal {
        GoalDistance::FiveK => SHORT_TRIAL_MINUTES,
        GoalDistance::TenK | GoalDistance::HalfMarathon | GoalDistance::Marathon => {
            LONG_TRIAL_MINUTES
        }
    };

    Session {
        day,
        kind: SessionKind::TimeTrial,
        workout: format!("{miles} mile TT"),
        duration_minutes,
        rpe: max_catalog_rpe(),
        context_pace: ALL_OUT.to_owned(),
        description: TIME_TRIAL_DESCRIPTION.to_owned(),
    }
}

/// Replace the first hard-tier session (or the first session) with a time trial
///
/// Returns the index of the replaced session, `None` for an empty week.
pub fn inject_time_trial(sessions: &mut [Session], goal: GoalDistance) -> Option<usize> {
    let index = sessions
        .iter()
        .position(|s| s.kind.is_hard_tier())
        .or_else(|| (!sessions.is_empty()).then_some(0))?;

    let day = std::mem::take(&mut sessions[index].day);
    sessions[index] = time_trial_session(goal, day);
    Some(index)
}

/// Builds waves of progression weeks closed by a deload week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveBuilder {
    selector: SessionSelector,
    progression_rate: f64,
    deload_factor: f64,
}

impl Default for WaveBuilder {
    fn default() -> Self {
        Self::from_config(&PlanningConfig::default())
    }
}

impl WaveBuilder {
    /// Create a wave builder
    #[must_use]
    pub const fn new(selector: SessionSelector, progression_rate: f64, deload_factor: f64) -> Self {
        Self {
            selector,
            progression_rate,
            deload_factor,
        }
    }

    /// Wave builder using configured selector and factors
    #[must_use]
    pub const fn from_config(config: &PlanningConfig) -> Self {
        Self::new(
            config.selector(),
            config.progression_rate,
            config.deload_factor,
        )
    }

    /// Selector used for every week
    #[must_use]
    pub const fn selector(&self) -> &SessionSelector {
        &self.selector
    }

    /// Volume of progression week `offset` (0-based)
    #[must_use]
    pub fn progression_minutes(&self, base_minutes: f64, offset: u32) -> f64 {
        round_minutes(base_minutes * self.progression_rate.mul_add(f64::from(offset), 1.0))
    }

    /// Volume of the deload week
    #[must_use]
    pub fn deload_minutes(&self, base_minutes: f64) -> f64 {
        round_minutes(base_minutes * self.deload_factor)
    }

    /// Four weeks starting at `start_week`: three build weeks then a deload week
    #[must_use]
    pub fn build_wave(&self, profile: &RunnerProfile, start_week: u32, base_minutes: f64) -> Vec<Week> {
        self.build_partial_wave(profile, start_week, base_minutes, WAVE_LENGTH)
    }

    /// A wave truncated to `length` weeks (clamped to 1-4)
    ///
    /// `length - 1` build weeks are followed by the deload week. A single-week
    /// wave is one build week with no time trial.
    #[must_use]
    pub fn build_partial_wave(
        &self,
        profile: &RunnerProfile,
        start_week: u32,
        base_minutes: f64,
        length: u32,
    ) -> Vec<Week> {
        let length = length.clamp(1, WAVE_LENGTH);
        let build_weeks = if length == 1 { 1 } else { length - 1 };

        let mut weeks: Vec<Week> = (0..build_weeks)
            .map(|offset| {
                let minutes = self.progression_minutes(base_minutes, offset);
                self.build_week(profile, start_week + offset, minutes, None)
            })
            .collect();

        if length > 1 {
            let minutes = self.deload_minutes(base_minutes);
            let mut deload = self.build_week(
                profile,
                start_week + build_weeks,
                minutes,
                Some(WeekLabel::Deload),
            );
            if let Some(slot) = inject_time_trial(&mut deload.sessions, profile.goal) {
                debug!(
                    week_number = deload.week_number,
                    slot,
                    "Injected time trial into deload week"
                );
            }
            weeks.push(deload);
        }

        debug!(start_week, length, base_minutes, "Built wave");
        weeks
    }

    /// One week of selected sessions at a given volume
    #[must_use]
    pub fn build_week(
        &self,
        profile: &RunnerProfile,
        week_number: u32,
        minutes: f64,
        label: Option<WeekLabel>,
    ) -> Week {
        let budgeted = profile.with_weekly_minutes(minutes);
        Week {
            week_number,
            minutes,
            label,
            sessions: self.selector.build_week(&budgeted, week_number),
        }
    }
}
