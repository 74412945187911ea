// ABOUTME: Session selector picking and ordering a week's workouts from the catalog
// ABOUTME: Fixed-sequence, duration-fit, and hard-day-budget strategies with one hard-effort rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Selector
//!
//! All strategies share one post-selection rule: a week holds at most one
//! Tempo and at most one Interval session. Later duplicates become Easy runs.

use std::fmt;
use std::str::FromStr;

use outrunna_core::errors::AppError;
use outrunna_core::models::{RunnerProfile, Session, SessionKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pace_zones::PaceModel;
use crate::workout_catalog::{WorkoutTemplate, CATALOG, EASY, INTERVAL, LONG, TEMPO};

/// How a week's sessions are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// 3 days: Interval, Tempo, Long. 4-6 days: Long, Easy, Interval, Tempo, then Easy
    #[default]
    FixedSequence,
    /// As `FixedSequence`, but 3-day weeks lead with Tempo on odd weeks
    AlternatingSequence,
    /// Per slot, the unused template closest to `weekly_minutes / days`
    DurationFit,
    /// One Interval, one Tempo, Long last, Easy between, hard days spread apart
    HardDayBudget,
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedSequence => write!(f, "fixed_sequence"),
            Self::AlternatingSequence => write!(f, "alternating_sequence"),
            Self::DurationFit => write!(f, "duration_fit"),
            Self::HardDayBudget => write!(f, "hard_day_budget"),
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fixed_sequence" | "fixed" => Ok(Self::FixedSequence),
            "alternating_sequence" | "alternating" => Ok(Self::AlternatingSequence),
            "duration_fit" => Ok(Self::DurationFit),
            "hard_day_budget" | "rpe_count" => Ok(Self::HardDayBudget),
            other => Err(AppError::invalid_input(format!(
                "Unknown selection strategy '{other}'"
            ))),
        }
    }
}

/// `Day N` label for a 1-based slot
#[must_use]
pub fn day_label(day: usize) -> String {
    format!("Day {day}")
}

/// Picks and annotates one week of sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSelector {
    strategy: SelectionStrategy,
    pace_model: PaceModel,
}

impl SessionSelector {
    /// Create a selector
    #[must_use]
    pub const fn new(strategy: SelectionStrategy, pace_model: PaceModel) -> Self {
        Self {
            strategy,
            pace_model,
        }
    }

    /// Active strategy
    #[must_use]
    pub const fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Pace model used for annotations
    #[must_use]
    pub const fn pace_model(&self) -> &PaceModel {
        &self.pace_model
    }

    /// Build the ordered sessions for one week
    ///
    /// The week's budget is `profile.weekly_minutes`; pace ranges come from the
    /// profile's base pace.
    #[must_use]
    pub fn build_week(&self, profile: &RunnerProfile, week_number: u32) -> Vec<Session> {
        let templates = enforce_hard_budget(self.select_templates(profile, week_number));
        let base_pace = profile.base_pace();

        debug!(
            week_number,
            strategy = %self.strategy,
            days = templates.len(),
            weekly_minutes = profile.weekly_minutes,
            "Selected week sessions"
        );

        templates
            .into_iter()
            .enumerate()
            .map(|(slot, template)| self.session_from(template, slot + 1, base_pace))
            .collect()
    }

    /// Templates chosen by the active strategy, before the hard-effort rule
    #[must_use]
    pub fn select_templates(
        &self,
        profile: &RunnerProfile,
        week_number: u32,
    ) -> Vec<&'static WorkoutTemplate> {
        let days = usize::from(profile.days_per_week);
        match self.strategy {
            SelectionStrategy::FixedSequence => fixed_sequence(days, false),
            SelectionStrategy::AlternatingSequence => {
                fixed_sequence(days, week_number % 2 == 1)
            }
            SelectionStrategy::DurationFit => duration_fit(days, profile.weekly_minutes),
            SelectionStrategy::HardDayBudget => hard_day_budget(days),
        }
    }

    /// Instantiate a template on a day with a pace annotation
    #[must_use]
    pub fn session_from(&self, template: &WorkoutTemplate, day: usize, base_pace: f64) -> Session {
        Session {
            day: day_label(day),
            kind: template.kind,
            workout: template.name.to_owned(),
            duration_minutes: template.duration_minutes,
            rpe: template.rpe,
            context_pace: self.pace_model.range_for(base_pace, template.rpe),
            description: template.structure.to_owned(),
        }
    }
}

fn fixed_sequence(days: usize, tempo_leads: bool) -> Vec<&'static WorkoutTemplate> {
    if days <= 3 {
        let three: [&'static WorkoutTemplate; 3] = if tempo_leads {
            [&TEMPO, &INTERVAL, &LONG]
        } else {
            [&INTERVAL, &TEMPO, &LONG]
        };
        return three.into_iter().take(days).collect();
    }

    let mut templates: Vec<&'static WorkoutTemplate> = vec![&LONG, &EASY, &INTERVAL, &TEMPO];
    templates.resize(days, &EASY);
    templates
}

fn duration_fit(days: usize, weekly_minutes: f64) -> Vec<&'static WorkoutTemplate> {
    let target = weekly_minutes / days.max(1) as f64;
    let mut used = [false; CATALOG.len()];
    let mut templates = Vec::with_capacity(days);

    for _ in 0..days {
        if used.iter().all(|u| *u) {
            used = [false; CATALOG.len()];
        }
        let closest = CATALOG
            .iter()
            .enumerate()
            .filter(|(index, _)| !used[*index])
            .min_by(|(_, a), (_, b)| {
                let da = (f64::from(a.duration_minutes) - target).abs();
                let db = (f64::from(b.duration_minutes) - target).abs();
                da.total_cmp(&db)
            });
        if let Some((index, template)) = closest {
            used[index] = true;
            templates.push(template);
        }
    }
    templates
}

fn hard_day_budget(days: usize) -> Vec<&'static WorkoutTemplate> {
    if days < 3 {
        return fixed_sequence(days, false);
    }

    let mut templates: Vec<&'static WorkoutTemplate> = vec![&EASY; days];
    let tempo_slot = if days >= 4 { days / 2 } else { 1 };
    templates[0] = &INTERVAL;
    templates[tempo_slot] = &TEMPO;
    templates[days - 1] = &LONG;
    templates
}

/// Downgrade every Tempo or Interval after the first of its kind to Easy
#[must_use]
pub fn enforce_hard_budget(
    templates: Vec<&'static WorkoutTemplate>,
) -> Vec<&'static WorkoutTemplate> {
    let mut seen_tempo = false;
    let mut seen_interval = false;

    templates
        .into_iter()
        .map(|template| {
            let seen = match template.kind {
                SessionKind::Tempo => &mut seen_tempo,
                SessionKind::Interval => &mut seen_interval,
                _ => return template,
            };
            if *seen {
                &EASY
            } else {
                *seen = true;
                template
            }
        })
        .collect()
}
