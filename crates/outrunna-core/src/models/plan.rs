// ABOUTME: Generated plan structure: sessions, labelled weeks, and time-trial targets
// ABOUTME: Provides structural invariant checks used after plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// What a scheduled session is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Easy aerobic run
    Easy,
    /// Sustained tempo effort
    Tempo,
    /// Long run
    Long,
    /// High-intensity intervals
    Interval,
    /// Deload-week time trial
    TimeTrial,
    /// Race-week sharpening strides
    Strides,
    /// Goal race
    Race,
}

impl SessionKind {
    /// Tempo and Interval sessions count against the weekly hard budget
    #[must_use]
    pub const fn is_hard_tier(self) -> bool {
        matches!(self, Self::Tempo | Self::Interval)
    }

    /// Sessions annotated `All-out` that pace refreshes never touch
    #[must_use]
    pub const fn has_fixed_pace(self) -> bool {
        matches!(self, Self::TimeTrial | Self::Race)
    }
}

/// A single scheduled workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Day label within the week (`Day 1`, `Day 2`, ...)
    pub day: String,
    /// Session type
    pub kind: SessionKind,
    /// Workout display name
    pub workout: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Rating of Perceived Exertion (1-10)
    pub rpe: u8,
    /// Formatted pace range or fixed annotation
    pub context_pace: String,
    /// Free-text description
    pub description: String,
}

/// Non-build week labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekLabel {
    /// Reduced-volume week closing a wave
    #[serde(rename = "Deload Week")]
    Deload,
    /// Reduced-volume week before the race
    #[serde(rename = "Taper Week")]
    Taper,
    /// Final week containing the race
    #[serde(rename = "Race Week")]
    Race,
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deload => write!(f, "Deload Week"),
            Self::Taper => write!(f, "Taper Week"),
            Self::Race => write!(f, "Race Week"),
        }
    }
}

/// One training week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    /// 1-based week number, contiguous across the plan
    pub week_number: u32,
    /// Total weekly volume in minutes (one decimal place)
    pub minutes: f64,
    /// `None` for a regular build week
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<WeekLabel>,
    /// Ordered sessions
    pub sessions: Vec<Session>,
}

impl Week {
    /// Label text, or `Week N` for build weeks
    #[must_use]
    pub fn header(&self) -> String {
        self.label
            .map_or_else(|| format!("Week {}", self.week_number), |label| label.to_string())
    }

    /// Whether this week closes a wave
    #[must_use]
    pub fn is_deload(&self) -> bool {
        self.label == Some(WeekLabel::Deload)
    }

    /// Number of sessions of the given kind
    #[must_use]
    pub fn count_kind(&self, kind: SessionKind) -> usize {
        self.sessions.iter().filter(|s| s.kind == kind).count()
    }
}

/// Fixed target band for one deload-week time trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTrialTarget {
    /// 1-based index of the wave the trial closes
    pub wave_index: u32,
    /// Week number of the deload week holding the trial
    pub week_number: u32,
    /// Calendar date the deload week starts
    pub date: NaiveDate,
    /// Trial distance in miles
    pub distance_miles: f64,
    /// Fast end of the band in minutes
    pub low_minutes: f64,
    /// Slow end of the band in minutes
    pub high_minutes: f64,
    /// Fast end as `MM:SS`
    pub low: String,
    /// Slow end as `MM:SS`
    pub high: String,
}

impl TimeTrialTarget {
    /// `LOW–HIGH`
    #[must_use]
    pub fn display_range(&self) -> String {
        format!("{}–{}", self.low, self.high)
    }
}

/// A complete plan from the first training week through race week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Ordered weeks
    pub weeks: Vec<Week>,
    /// One target per deload week, fixed at generation
    pub time_trial_targets: Vec<TimeTrialTarget>,
}

impl Plan {
    /// Number of weeks in the plan
    #[must_use]
    pub fn total_weeks(&self) -> usize {
        self.weeks.len()
    }

    /// Deload weeks in order
    pub fn deload_weeks(&self) -> impl Iterator<Item = &Week> {
        self.weeks.iter().filter(|w| w.is_deload())
    }

    /// Find a week by label
    #[must_use]
    pub fn week_labelled(&self, label: WeekLabel) -> Option<&Week> {
        self.weeks.iter().find(|w| w.label == Some(label))
    }

    /// Every session in plan order
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.weeks.iter().flat_map(|w| w.sessions.iter())
    }

    /// Every session in plan order, mutably
    pub fn sessions_mut(&mut self) -> impl Iterator<Item = &mut Session> {
        self.weeks.iter_mut().flat_map(|w| w.sessions.iter_mut())
    }

    /// Verify structural invariants
    ///
    /// Week numbers run 1..=N without gaps, exactly one Taper Week and one
    /// Race Week exist, and they are the last two weeks in that order.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` describing the first violated invariant.
    pub fn check_structure(&self) -> AppResult<()> {
        for (index, week) in self.weeks.iter().enumerate() {
            let expected = index as u32 + 1;
            if week.week_number != expected {
                return Err(AppError::internal(format!(
                    "week at position {index} numbered {} (expected {expected})",
                    week.week_number
                )));
            }
        }

        let count = |label| self.weeks.iter().filter(|w| w.label == Some(label)).count();
        if count(WeekLabel::Taper) != 1 || count(WeekLabel::Race) != 1 {
            return Err(AppError::internal(
                "plan must contain exactly one taper week and one race week",
            ));
        }

        match self.weeks.as_slice() {
            [.., taper, race]
                if taper.label == Some(WeekLabel::Taper) && race.label == Some(WeekLabel::Race) =>
            {
                Ok(())
            }
            _ => Err(AppError::internal(
                "plan must end with a taper week followed by a race week",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(week_number: u32, label: Option<WeekLabel>) -> Week {
        Week {
            week_number,
            minutes: 100.0,
            label,
            sessions: Vec::new(),
        }
    }

    #[test]
    fn test_week_header() {
        assert_eq!(week(3, None).header(), "Week 3");
        assert_eq!(week(4, Some(WeekLabel::Deload)).header(), "Deload Week");
    }

    #[test]
    fn test_check_structure() {
        let good = Plan {
            weeks: vec![
                week(1, None),
                week(2, Some(WeekLabel::Taper)),
                week(3, Some(WeekLabel::Race)),
            ],
            time_trial_targets: Vec::new(),
        };
        assert!(good.check_structure().is_ok());

        let gap = Plan {
            weeks: vec![week(1, Some(WeekLabel::Taper)), week(3, Some(WeekLabel::Race))],
            time_trial_targets: Vec::new(),
        };
        assert!(gap.check_structure().is_err());

        let reversed = Plan {
            weeks: vec![week(1, Some(WeekLabel::Race)), week(2, Some(WeekLabel::Taper))],
            time_trial_targets: Vec::new(),
        };
        assert!(reversed.check_structure().is_err());
    }
}
