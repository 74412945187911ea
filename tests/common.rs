// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides standard runner profiles, dates, and generated plans
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `outrunna`

use chrono::{Days, NaiveDate};
use outrunna::config::PlanningConfig;
use outrunna::intelligence::PlanBuilder;
use outrunna::models::{GoalDistance, Plan, RunnerProfile};

/// Monday used as the start of every fixture plan
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

/// Race date `weeks` whole weeks after [`start_date`]
pub fn race_after_weeks(weeks: u64) -> NaiveDate {
    start_date().checked_add_days(Days::new(weeks * 7)).unwrap()
}

/// 25:00 5K runner
pub fn runner(goal: GoalDistance, days: u8) -> RunnerProfile {
    RunnerProfile::new(goal, "25:00", days, 240.0).unwrap()
}

/// Plan for a 25:00 runner over `weeks` weeks with default configuration
pub fn plan_for(goal: GoalDistance, days: u8, weeks: u64) -> Plan {
    plan_with(&PlanningConfig::default(), goal, days, weeks)
}

/// Plan under a specific configuration
pub fn plan_with(config: &PlanningConfig, goal: GoalDistance, days: u8, weeks: u64) -> Plan {
    PlanBuilder::from_config(config)
        .build_plan(&runner(goal, days), start_date(), race_after_weeks(weeks), 240.0)
        .unwrap()
}
