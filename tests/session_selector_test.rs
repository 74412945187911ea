// ABOUTME: Integration tests for weekly session selection across every strategy
// ABOUTME: Enforces the one-tempo one-interval rule, slot counts, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::runner;
use outrunna::intelligence::{PaceModel, SelectionStrategy, SessionSelector};
use outrunna::models::{GoalDistance, RunnerProfile, SessionKind};

const STRATEGIES: [SelectionStrategy; 4] = [
    SelectionStrategy::FixedSequence,
    SelectionStrategy::AlternatingSequence,
    SelectionStrategy::DurationFit,
    SelectionStrategy::HardDayBudget,
];

fn kinds(selector: &SessionSelector, profile: &RunnerProfile, week: u32) -> Vec<SessionKind> {
    selector
        .build_week(profile, week)
        .iter()
        .map(|s| s.kind)
        .collect()
}

#[test]
fn test_hard_budget_holds_for_every_strategy() {
    for strategy in STRATEGIES {
        let selector = SessionSelector::new(strategy, PaceModel::default());
        for days in 3..=6 {
            for weekly in [90.0, 180.0, 240.0, 420.0] {
                let profile = runner(GoalDistance::HalfMarathon, days).with_weekly_minutes(weekly);
                for week in 1..=8 {
                    let sessions = selector.build_week(&profile, week);
                    assert_eq!(sessions.len(), usize::from(days), "{strategy} {days}d");
                    let count = |kind| sessions.iter().filter(|s| s.kind == kind).count();
                    assert!(count(SessionKind::Tempo) <= 1, "{strategy} {days}d week {week}");
                    assert!(count(SessionKind::Interval) <= 1, "{strategy} {days}d week {week}");
                    for (index, session) in sessions.iter().enumerate() {
                        assert_eq!(session.day, format!("Day {}", index + 1));
                        assert!(!session.context_pace.is_empty());
                    }
                }
            }
        }
    }
}

#[test]
fn test_fixed_sequence_layouts() {
    let selector = SessionSelector::default();
    assert_eq!(
        kinds(&selector, &runner(GoalDistance::FiveK, 3), 1),
        vec![SessionKind::Interval, SessionKind::Tempo, SessionKind::Long]
    );
    assert_eq!(
        kinds(&selector, &runner(GoalDistance::FiveK, 5), 1),
        vec![
            SessionKind::Long,
            SessionKind::Easy,
            SessionKind::Interval,
            SessionKind::Tempo,
            SessionKind::Easy,
        ]
    );
}

#[test]
fn test_alternating_sequence_leads_with_tempo_on_odd_weeks() {
    let selector = SessionSelector::new(SelectionStrategy::AlternatingSequence, PaceModel::default());
    let profile = runner(GoalDistance::TenK, 3);
    for week in 1..=6 {
        let lead = kinds(&selector, &profile, week)[0];
        let expected = if week % 2 == 1 {
            SessionKind::Tempo
        } else {
            SessionKind::Interval
        };
        assert_eq!(lead, expected, "week {week}");
    }

    // Four or more days use the regular sequence regardless of parity
    let four = runner(GoalDistance::TenK, 4);
    assert_eq!(kinds(&selector, &four, 1), kinds(&selector, &four, 2));
}

#[test]
fn test_duration_fit_tracks_budget() {
    let selector = SessionSelector::new(SelectionStrategy::DurationFit, PaceModel::default());
    // 90 / 3 = 30: the Easy run fits best and is picked first
    let light = runner(GoalDistance::FiveK, 3).with_weekly_minutes(90.0);
    assert_eq!(kinds(&selector, &light, 1)[0], SessionKind::Easy);
    // 300 / 4 = 75: the Long run is picked first
    let heavy = runner(GoalDistance::FiveK, 4).with_weekly_minutes(300.0);
    assert_eq!(kinds(&selector, &heavy, 1)[0], SessionKind::Long);
}

#[test]
fn test_hard_day_budget_keeps_long_run_last() {
    let selector = SessionSelector::new(SelectionStrategy::HardDayBudget, PaceModel::default());
    for days in 3..=6 {
        let week = kinds(&selector, &runner(GoalDistance::Marathon, days), 1);
        assert_eq!(week[0], SessionKind::Interval);
        assert_eq!(*week.last().unwrap(), SessionKind::Long);
        assert_eq!(week.iter().filter(|k| **k == SessionKind::Tempo).count(), 1);
    }
}

#[test]
fn test_selection_is_deterministic() {
    for strategy in STRATEGIES {
        let selector = SessionSelector::new(strategy, PaceModel::default());
        let profile = runner(GoalDistance::TenK, 5);
        assert_eq!(selector.build_week(&profile, 3), selector.build_week(&profile, 3));
    }
}
