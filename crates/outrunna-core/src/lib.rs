// ABOUTME: Core types and constants for the OutRunna planning engine
// ABOUTME: Foundation crate with error handling, domain models, time formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `OutRunna` Core
//!
//! Foundation crate providing shared types and constants for the `OutRunna`
//! planning engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Race distances, periodization defaults, and pace zone offsets
//! - **formatters**: `MM:SS` parsing and pace/time formatting
//! - **models**: Runner profile, sessions, weeks, plans, and time-trial targets

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// `MM:SS` time parsing and pace formatting
pub mod formatters;

/// Core data models (`RunnerProfile`, `Session`, `Week`, `Plan`, etc.)
pub mod models;
