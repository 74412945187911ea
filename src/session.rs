// ABOUTME: Explicit per-session planner state: plan, profile, fixed targets, and trial inputs
// ABOUTME: In-memory session store keyed by UUID with create, update, and discard lifecycle
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Session State
//!
//! A session is created when a plan is first generated, updated on every
//! accepted time-trial submission, and discarded when the caller is done.
//! Any rejected input leaves the session exactly as it was.

use std::collections::HashMap;

use chrono::NaiveDate;
use outrunna_core::errors::{AppError, AppResult};
use outrunna_core::models::{Plan, RunnerProfile, TimeTrialTarget};
use outrunna_intelligence::config::PlanningConfig;
use outrunna_intelligence::plan_builder::PlanBuilder;
use outrunna_intelligence::recalibration::{RecalibrationOutcome, Recalibrator};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logging::AppLogger;

/// Result of an accepted time-trial submission, shown next to its slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTrialFeedback {
    /// Input as accepted (trimmed)
    pub input: String,
    /// Signed change in 5K time as `±MM:SS`
    pub delta: String,
    /// New equivalent 5K time as `MM:SS`
    pub new_pr: String,
    /// Goal-race prediction after the update
    pub predicted_goal_time: String,
}

impl From<(&str, &RecalibrationOutcome)> for TimeTrialFeedback {
    fn from((input, outcome): (&str, &RecalibrationOutcome)) -> Self {
        Self {
            input: input.to_owned(),
            delta: outcome.delta.clone(),
            new_pr: outcome.new_pr.clone(),
            predicted_goal_time: outcome.predicted_goal_time.clone(),
        }
    }
}

/// Everything one planning session owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    id: Uuid,
    config: PlanningConfig,
    initial_profile: RunnerProfile,
    profile: RunnerProfile,
    start_date: NaiveDate,
    race_date: NaiveDate,
    plan: Plan,
    feedback: Vec<Option<TimeTrialFeedback>>,
}

impl SessionState {
    /// Generate a plan and open a session around it
    ///
    /// # Errors
    ///
    /// - `ConfigInvalid` if the configuration fails validation
    /// - any error from plan generation (`InsufficientLeadTime`, `InvalidInput`)
    pub fn generate(
        profile: RunnerProfile,
        start_date: NaiveDate,
        race_date: NaiveDate,
        base_minutes: f64,
        config: &PlanningConfig,
    ) -> AppResult<Self> {
        config.validate()?;
        let plan = PlanBuilder::from_config(config).build_plan(
            &profile,
            start_date,
            race_date,
            base_minutes,
        )?;

        let id = Uuid::new_v4();
        AppLogger::log_plan_generated(
            &id.to_string(),
            &profile.goal.to_string(),
            plan.total_weeks(),
            plan.time_trial_targets.len(),
        );

        Ok(Self {
            id,
            config: *config,
            initial_profile: profile.clone(),
            profile,
            start_date,
            race_date,
            feedback: vec![None; plan.time_trial_targets.len()],
            plan,
        })
    }

    /// Submit a raw `MM:SS` result for time-trial slot `slot` (0-based)
    ///
    /// Blank input is ignored and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - `ValueOutOfRange` if the slot does not exist
    /// - `InvalidTimeFormat` / `InvalidInput` from recalibration
    pub fn submit_time_trial(
        &mut self,
        slot: usize,
        raw: &str,
    ) -> AppResult<Option<&TimeTrialFeedback>> {
        let input = raw.trim();
        if input.is_empty() {
            return Ok(None);
        }
        let Some(trial_miles) = self.targets().get(slot).map(|t| t.distance_miles) else {
            return Err(AppError::out_of_range(format!(
                "time trial slot {slot} does not exist ({} scheduled)",
                self.targets().len()
            )));
        };

        let outcome = Recalibrator::from_config(&self.config)
            .apply_new_time_trial(&mut self.plan, input, trial_miles, &self.profile)
            .inspect_err(|_| AppLogger::log_time_trial(&self.id.to_string(), slot, false, None))?;

        AppLogger::log_time_trial(&self.id.to_string(), slot, true, Some(&outcome.delta));
        self.feedback[slot] = Some(TimeTrialFeedback::from((input, &outcome)));
        self.profile = outcome.profile;
        Ok(self.feedback[slot].as_ref())
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Current plan
    #[must_use]
    pub const fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Profile including any recalibrated PR
    #[must_use]
    pub const fn profile(&self) -> &RunnerProfile {
        &self.profile
    }

    /// Profile the plan was generated from
    #[must_use]
    pub const fn initial_profile(&self) -> &RunnerProfile {
        &self.initial_profile
    }

    /// Plan start date
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Race date
    #[must_use]
    pub const fn race_date(&self) -> NaiveDate {
        self.race_date
    }

    /// Time-trial targets fixed at generation
    #[must_use]
    pub fn targets(&self) -> &[TimeTrialTarget] {
        &self.plan.time_trial_targets
    }

    /// Feedback for an accepted submission
    #[must_use]
    pub fn feedback(&self, slot: usize) -> Option<&TimeTrialFeedback> {
        self.feedback.get(slot).and_then(Option::as_ref)
    }

    /// Last accepted input for a slot
    #[must_use]
    pub fn input(&self, slot: usize) -> Option<&str> {
        self.feedback(slot).map(|f| f.input.as_str())
    }
}

/// In-memory sessions keyed by identifier
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, SessionState>,
}

impl SessionStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session, returning its identifier
    pub fn insert(&mut self, state: SessionState) -> Uuid {
        let id = state.id();
        self.sessions.insert(id, state);
        id
    }

    /// Look up a session
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<&SessionState> {
        self.sessions.get(id)
    }

    /// Look up a session for update
    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut SessionState> {
        self.sessions.get_mut(id)
    }

    /// End a session, returning its final state
    pub fn discard(&mut self, id: &Uuid) -> Option<SessionState> {
        self.sessions.remove(id)
    }

    /// Number of open sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are open
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
