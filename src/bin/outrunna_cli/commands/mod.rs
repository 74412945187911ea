// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for outrunna-cli
// ABOUTME: Provides access to plan generation and race prediction commands

pub mod plan;
pub mod predict;
