// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for outrunna-cli
// ABOUTME: Renders plans, time-trial targets, feedback, and predictions

use anyhow::Result;
use outrunna::config::PlanningConfig;
use outrunna::errors::{AppError, ErrorResponse};
use outrunna::models::Week;
use outrunna::session::SessionState;
use serde_json::{json, Value};

/// A `--trial` entry the session refused
pub struct RejectedTrial {
    /// 1-based slot as typed
    pub slot: usize,
    /// Raw input
    pub input: String,
    /// Why it was refused
    pub error: AppError,
}

impl RejectedTrial {
    fn to_json(&self) -> Value {
        json!({
            "slot": self.slot,
            "input": self.input,
            "error": ErrorResponse::from(&self.error).error,
        })
    }
}

/// Print the plan as readable text
pub fn display_plan_text(
    state: &SessionState,
    config: &PlanningConfig,
    rejected: &[RejectedTrial],
) -> Result<()> {
    let profile = state.profile();
    let predicted = config.predictor().predict_goal_time(profile)?;

    println!(
        "OutRunna plan: {} goal | 5K PR {} | predicted {} {}",
        profile.goal,
        profile.pr_display(),
        profile.goal,
        predicted
    );
    println!(
        "{} to {} | {} weeks | {} paces | {} selection",
        state.start_date(),
        state.race_date(),
        state.plan().total_weeks(),
        config.pace_policy,
        config.selection_strategy
    );
    println!("{}", "=".repeat(80));

    println!("\nEffort paces:");
    for (rpe, range) in config.pace_model().effort_pace_ranges(profile.base_pace()) {
        println!("   RPE {rpe}: {range}");
    }

    for week in &state.plan().weeks {
        display_week(week);
    }

    if !state.targets().is_empty() {
        println!("\nTime-trial targets:");
        for (slot, target) in state.targets().iter().enumerate() {
            println!(
                "{:>3}. Week {} ({}) {} mile trial: {}",
                slot + 1,
                target.week_number,
                target.date,
                target.distance_miles,
                target.display_range()
            );
            if let Some(feedback) = state.feedback(slot) {
                println!(
                    "     Logged {} -> 5K {} ({}), predicted {} {}",
                    feedback.input,
                    feedback.new_pr,
                    feedback.delta,
                    profile.goal,
                    feedback.predicted_goal_time
                );
            }
        }
    }

    for entry in rejected {
        eprintln!(
            "WARNING Time trial {} ({}): {}",
            entry.slot, entry.input, entry.error
        );
    }
    Ok(())
}

fn display_week(week: &Week) {
    println!("\n{} | {:.1} min", week.header(), week.minutes);
    for session in &week.sessions {
        println!(
            "   {}: {} – {} min @ RPE {}",
            session.day, session.workout, session.duration_minutes, session.rpe
        );
        println!(
            "      Pace: {} | {}",
            session.context_pace, session.description
        );
    }
}

/// Print the session as JSON
pub fn display_plan_json(
    state: &SessionState,
    config: &PlanningConfig,
    rejected: &[RejectedTrial],
) -> Result<()> {
    let profile = state.profile();
    let feedback: Vec<_> = (0..state.targets().len())
        .map(|slot| state.feedback(slot))
        .collect();

    let report = json!({
        "session_id": state.id(),
        "profile": profile,
        "initial_profile": state.initial_profile(),
        "predicted_goal_time": config.predictor().predict_goal_time(profile)?,
        "start_date": state.start_date(),
        "race_date": state.race_date(),
        "config": config,
        "effort_paces": config.pace_model().effort_pace_ranges(profile.base_pace()),
        "plan": state.plan(),
        "time_trial_feedback": feedback,
        "rejected_entries": rejected.iter().map(RejectedTrial::to_json).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Print a failed request as an error document
pub fn display_error_json(error: &AppError) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ErrorResponse::from(error))?);
    Ok(())
}

/// Print a single prediction
pub fn display_prediction(time: &str, from_miles: f64, predicted: &str, to_miles: f64, exponent: f64) {
    println!("{time} over {from_miles} mi -> {predicted} over {to_miles} mi (Riegel k = {exponent})");
}
