// ABOUTME: Integration tests for explicit planner session state and the session store
// ABOUTME: Verifies lifecycle, time-trial submission feedback, and unchanged state on errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{race_after_weeks, runner, start_date};
use outrunna::config::PlanningConfig;
use outrunna::errors::ErrorCode;
use outrunna::models::GoalDistance;
use outrunna::session::{SessionState, SessionStore};

fn eight_week_session() -> SessionState {
    SessionState::generate(
        runner(GoalDistance::FiveK, 3),
        start_date(),
        race_after_weeks(8),
        240.0,
        &PlanningConfig::default(),
    )
    .unwrap()
}

#[test]
fn test_generate_exposes_plan_and_targets() {
    let state = eight_week_session();
    assert_eq!(state.plan().total_weeks(), 8);
    assert_eq!(state.targets().len(), 2);
    assert_eq!(state.profile(), state.initial_profile());
    assert!(state.feedback(0).is_none());
    assert!(state.input(1).is_none());
    assert_eq!(state.start_date(), start_date());
    assert_eq!(state.race_date(), race_after_weeks(8));
}

#[test]
fn test_generate_rejects_short_lead_time() {
    let error = SessionState::generate(
        runner(GoalDistance::FiveK, 3),
        start_date(),
        race_after_weeks(1),
        240.0,
        &PlanningConfig::default(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::InsufficientLeadTime);
}

#[test]
fn test_generate_rejects_invalid_config() {
    let config = PlanningConfig {
        taper_factor: 1.5,
        ..PlanningConfig::default()
    };
    let error = SessionState::generate(
        runner(GoalDistance::FiveK, 3),
        start_date(),
        race_after_weeks(8),
        240.0,
        &config,
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_submission_updates_profile_and_feedback() {
    let mut state = eight_week_session();
    let targets_before = state.targets().to_vec();

    let feedback = state.submit_time_trial(0, " 12:00 ").unwrap().unwrap().clone();
    assert_eq!(feedback.input, "12:00");
    assert_eq!(feedback.delta, "-05:54");
    assert_eq!(feedback.new_pr, "19:06");

    assert_eq!(state.profile().pr_seconds, 1146);
    assert_eq!(state.initial_profile().pr_seconds, 1500);
    assert_eq!(state.input(0), Some("12:00"));
    assert_eq!(state.targets(), targets_before.as_slice());

    // Second trial measures against the recalibrated PR
    let second = state.submit_time_trial(1, "12:00").unwrap().unwrap();
    assert_eq!(second.delta, "+00:00");
}

#[test]
fn test_blank_submission_is_ignored() {
    let mut state = eight_week_session();
    let before = state.clone();
    assert!(state.submit_time_trial(0, "   ").unwrap().is_none());
    assert_eq!(state, before);
}

#[test]
fn test_rejected_submission_leaves_state_unchanged() {
    let mut state = eight_week_session();
    state.submit_time_trial(0, "13:00").unwrap();
    let before = state.clone();

    let error = state.submit_time_trial(1, "13 min").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidTimeFormat);
    assert_eq!(state, before);

    let error = state.submit_time_trial(5, "13:00").unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(state, before);
}

#[test]
fn test_store_lifecycle() {
    let mut store = SessionStore::new();
    assert!(store.is_empty());

    let first = store.insert(eight_week_session());
    let second = store.insert(eight_week_session());
    assert_ne!(first, second);
    assert_eq!(store.len(), 2);

    store
        .get_mut(&first)
        .unwrap()
        .submit_time_trial(0, "12:30")
        .unwrap();
    assert!(store.get(&first).unwrap().feedback(0).is_some());
    assert!(store.get(&second).unwrap().feedback(0).is_none());

    let discarded = store.discard(&first).unwrap();
    assert_eq!(discarded.id(), first);
    assert!(store.get(&first).is_none());
    assert_eq!(store.len(), 1);
}
