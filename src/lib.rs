// ABOUTME: Main library entry point for the OutRunna running plan generator
// ABOUTME: Re-exports the planning engine and adds logging setup and explicit session state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `OutRunna`
//!
//! Generates wave-periodized running plans from a 5K PR, goal distance, and
//! race date, then refreshes pace targets as time-trial results come in.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use outrunna::models::{GoalDistance, RunnerProfile};
//! use outrunna::session::SessionState;
//! use outrunna::config::PlanningConfig;
//! use outrunna::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = PlanningConfig::from_env();
//!     let profile = RunnerProfile::new(GoalDistance::TenK, "25:00", 4, 240.0)?;
//!     let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default();
//!     let race = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap_or_default();
//!
//!     let mut session = SessionState::generate(profile, start, race, 240.0, &config)?;
//!     session.submit_time_trial(0, "23:50")?;
//!     println!("{} weeks", session.plan().total_weeks());
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────

/// Unified error handling (re-exported from `outrunna-core`)
pub use outrunna_core::errors;

/// Domain constants (re-exported from `outrunna-core`)
pub use outrunna_core::constants;

/// `MM:SS` parsing and formatting (re-exported from `outrunna-core`)
pub use outrunna_core::formatters;

/// Profile and plan models (re-exported from `outrunna-core`)
pub use outrunna_core::models;

/// Planning configuration (re-exported from `outrunna-intelligence`)
pub use outrunna_intelligence::config;

/// Planning engine (re-exported from `outrunna-intelligence`)
pub use outrunna_intelligence as intelligence;

/// Structured logging setup
pub mod logging;

/// Per-session planner state and in-memory store
pub mod session;
