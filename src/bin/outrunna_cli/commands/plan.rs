// ABOUTME: Plan command for outrunna-cli
// ABOUTME: Generates a session, applies time-trial entries, and renders the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use outrunna::config::PlanningConfig;
use outrunna::errors::{AppError, AppResult};
use outrunna::intelligence::{PacePolicy, SelectionStrategy};
use outrunna::models::{GoalDistance, RunnerProfile};
use outrunna::session::SessionState;
use tracing::{error, info, warn};

use crate::helpers::display::{
    display_error_json, display_plan_json, display_plan_text, RejectedTrial,
};

/// How the plan is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable weeks and sessions
    Text,
    /// Full session state as JSON
    Json,
}

/// Inputs collected from the command line
pub struct PlanOptions {
    pub goal: GoalDistance,
    pub pr: String,
    pub days: u8,
    pub weekly_minutes: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub race_date: NaiveDate,
    pub trials: Vec<(usize, String)>,
    pub pace_policy: Option<PacePolicy>,
    pub strategy: Option<SelectionStrategy>,
    pub format: OutputFormat,
}

/// Generate a plan and print it
///
/// In JSON mode a failed request is also printed as an error document.
pub fn run(options: PlanOptions) -> Result<()> {
    let mut config = PlanningConfig::from_env();
    if let Some(policy) = options.pace_policy {
        config.pace_policy = policy;
    }
    if let Some(strategy) = options.strategy {
        config.selection_strategy = strategy;
    }

    let mut state = match start_session(&options, &config) {
        Ok(state) => state,
        Err(failure) => {
            if failure.code.is_user_error() {
                warn!(error = %failure, "Plan request rejected");
            } else {
                error!(error = %failure, "Plan generation failed");
            }
            if options.format == OutputFormat::Json {
                display_error_json(&failure)?;
            }
            return Err(failure.into());
        }
    };

    // Rejected entries are reported and skipped; the plan keeps its last valid state.
    let mut rejected = Vec::new();
    for (slot, time) in &options.trials {
        if let Err(failure) = state.submit_time_trial(slot - 1, time) {
            warn!(slot, error = %failure, "Skipping time trial entry");
            rejected.push(RejectedTrial {
                slot: *slot,
                input: time.clone(),
                error: failure,
            });
        }
    }

    match options.format {
        OutputFormat::Text => display_plan_text(&state, &config, &rejected)?,
        OutputFormat::Json => display_plan_json(&state, &config, &rejected)?,
    }
    Ok(())
}

fn start_session(options: &PlanOptions, config: &PlanningConfig) -> AppResult<SessionState> {
    let weekly_minutes = options
        .weekly_minutes
        .unwrap_or(config.default_weekly_minutes);
    let start_date = options
        .start_date
        .unwrap_or_else(|| Local::now().date_naive());
    let profile = RunnerProfile::new(options.goal, &options.pr, options.days, weekly_minutes)?;

    info!(goal = %options.goal, %start_date, race_date = %options.race_date, "Generating plan");
    SessionState::generate(profile, start_date, options.race_date, weekly_minutes, config)
}
