// ABOUTME: Core data models for runner profiles and generated training plans
// ABOUTME: Re-exports profile and plan types used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Goal distance and runner profile
pub mod profile;

/// Sessions, weeks, plans, and time-trial targets
pub mod plan;

pub use plan::{Plan, Session, SessionKind, TimeTrialTarget, Week, WeekLabel};
pub use profile::{GoalDistance, RunnerProfile};
