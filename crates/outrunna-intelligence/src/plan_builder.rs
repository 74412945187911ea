// ABOUTME: Plan builder chaining waves up to the race, then taper and race weeks
// ABOUTME: Computes fixed time-trial targets and calendar dates for every deload week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Builder
//!
//! A plan spans `floor(days / 7)` weeks between start and race date. The last
//! two are always Taper Week and Race Week; the rest are filled with waves,
//! the final wave shortened to fit. Each shortened wave still closes with a
//! deload week unless only one week is left for it.

use chrono::{Days, NaiveDate};
use outrunna_core::constants::annotations::ALL_OUT;
use outrunna_core::constants::periodization::{MIN_LEAD_WEEKS, WAVE_LENGTH};
use outrunna_core::constants::race_week::{STRIDES_MINUTES, STRIDES_RPE};
use outrunna_core::errors::{AppError, AppResult};
use outrunna_core::formatters::format_pace;
use outrunna_core::models::{
    Plan, RunnerProfile, Session, SessionKind, TimeTrialTarget, Week, WeekLabel,
};
use tracing::{debug, info, warn};

use crate::config::PlanningConfig;
use crate::performance_prediction::RaceTimePredictor;
use crate::session_selector::day_label;
use crate::wave_builder::{round_minutes, WaveBuilder};
use crate::workout_catalog::max_catalog_rpe;

/// Whole weeks between two dates, floored (negative when `race` precedes `start`)
#[must_use]
pub fn total_weeks(start: NaiveDate, race: NaiveDate) -> i64 {
    (race - start).num_days().div_euclid(7)
}

/// Builds complete plans from a runner profile and a date range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanBuilder {
    waves: WaveBuilder,
    predictor: RaceTimePredictor,
    taper_factor: f64,
    race_week_factor: f64,
    improvement_rate: f64,
    buffer_pct: f64,
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::from_config(&PlanningConfig::default())
    }
}

impl PlanBuilder {
    /// Plan builder wired from configuration
    #[must_use]
    pub const fn from_config(config: &PlanningConfig) -> Self {
        Self {
            waves: WaveBuilder::from_config(config),
            predictor: config.predictor(),
            taper_factor: config.taper_factor,
            race_week_factor: config.race_week_factor,
            improvement_rate: config.improvement_rate,
            buffer_pct: config.buffer_pct,
        }
    }

    /// Wave builder in use
    #[must_use]
    pub const fn waves(&self) -> &WaveBuilder {
        &self.waves
    }

    /// Generate a full plan
    ///
    /// # Errors
    ///
    /// - `InsufficientLeadTime` if fewer than two whole weeks separate the dates;
    ///   a one-week span is rejected on purpose since it cannot hold both the
    ///   taper and race weeks
    /// - `InvalidInput` if `base_minutes` is not positive
    /// - `InternalError` if the generated plan breaks its structural invariants
    pub fn build_plan(
        &self,
        profile: &RunnerProfile,
        start_date: NaiveDate,
        race_date: NaiveDate,
        base_minutes: f64,
    ) -> AppResult<Plan> {
        let span = total_weeks(start_date, race_date);
        if span < MIN_LEAD_WEEKS {
            warn!(
                %start_date,
                %race_date,
                total_weeks = span,
                "Rejected plan request: race date too close"
            );
            return Err(AppError::insufficient_lead_time(span, MIN_LEAD_WEEKS));
        }
        if !(base_minutes.is_finite() && base_minutes > 0.0) {
            return Err(AppError::invalid_input(format!(
                "base weekly minutes must be positive, got {base_minutes}"
            )));
        }
        let total = u32::try_from(span)
            .map_err(|_| AppError::out_of_range(format!("{span} weeks is too long a plan")))?;

        let training_weeks = total - 2;
        let mut weeks = Vec::with_capacity(total as usize);
        let mut targets = Vec::new();
        let mut cursor = 1;
        let mut base = base_minutes;
        let mut peak = base_minutes;
        let mut wave_index = 0;

        while cursor <= training_weeks {
            let length = (training_weeks - cursor + 1).min(WAVE_LENGTH);
            let wave = self.waves.build_partial_wave(profile, cursor, base, length);

            if length > 1 {
                wave_index += 1;
                let deload_week = cursor + length - 1;
                targets.push(self.time_trial_target(profile, wave_index, deload_week, start_date)?);
                base = wave[wave.len() - 2].minutes;
            }
            peak = peak.max(base);
            debug!(wave_index, cursor, length, next_base = base, peak, "Advanced wave cursor");

            weeks.extend(wave);
            cursor += length;
        }

        weeks.push(self.waves.build_week(
            profile,
            cursor,
            round_minutes(peak * self.taper_factor),
            Some(WeekLabel::Taper),
        ));
        cursor += 1;
        weeks.push(self.race_week(profile, cursor, round_minutes(peak * self.race_week_factor)));

        let plan = Plan {
            weeks,
            time_trial_targets: targets,
        };
        plan.check_structure()?;

        info!(
            goal = %profile.goal,
            total_weeks = plan.total_weeks(),
            waves = wave_index,
            peak_minutes = peak,
            "Generated training plan"
        );
        Ok(plan)
    }

    /// Fixed target band for the time trial closing wave `wave_index`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the deload week's date overflows the calendar.
    pub fn time_trial_target(
        &self,
        profile: &RunnerProfile,
        wave_index: u32,
        deload_week: u32,
        start_date: NaiveDate,
    ) -> AppResult<TimeTrialTarget> {
        let distance_miles = profile.goal.time_trial_miles();
        let band = self.predictor.time_trial_target(
            profile.pr_minutes(),
            wave_index,
            distance_miles,
            self.improvement_rate,
            self.buffer_pct,
        )?;
        let date = start_date
            .checked_add_days(Days::new(u64::from(deload_week - 1) * 7))
            .ok_or_else(|| AppError::out_of_range("time trial date is out of range"))?;

        Ok(TimeTrialTarget {
            wave_index,
            week_number: deload_week,
            date,
            distance_miles,
            low_minutes: band.low_minutes,
            high_minutes: band.high_minutes,
            low: format_pace(band.low_minutes),
            high: format_pace(band.high_minutes),
        })
    }

    /// Race week: strides early, the goal race later
    #[must_use]
    pub fn race_week(&self, profile: &RunnerProfile, week_number: u32, minutes: f64) -> Week {
        let pace_model = self.waves.selector().pace_model();
        let strides = Session {
            day: day_label(1),
            kind: SessionKind::Strides,
            workout: "6x400m Strides".to_owned(),
            duration_minutes: STRIDES_MINUTES,
            rpe: STRIDES_RPE,
            context_pace: pace_model.session_range(
                profile.base_pace(),
                SessionKind::Strides,
                STRIDES_RPE,
            ),
            description: "Sharpen up".to_owned(),
        };
        let race = Session {
            day: day_label(3),
            kind: SessionKind::Race,
            workout: format!("{} Race", profile.goal),
            duration_minutes: profile.goal.race_minutes(),
            rpe: max_catalog_rpe(),
            context_pace: ALL_OUT.to_owned(),
            description: "Race day!".to_owned(),
        };

        Week {
            week_number,
            minutes,
            label: Some(WeekLabel::Race),
            sessions: vec![strides, race],
        }
    }
}
