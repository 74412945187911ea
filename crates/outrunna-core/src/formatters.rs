// ABOUTME: MM:SS parsing and pace/time formatting shared by every planning component
// ABOUTME: Converts between text times, whole seconds, and fractional minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `MM:SS` time handling.
//!
//! Minutes may exceed 59 (`210:30` is a valid marathon time). Seconds are not
//! range-checked: the only requirement is two non-negative integers.

use crate::errors::{AppError, AppResult};

/// Parse `MM:SS` into whole seconds
///
/// # Errors
///
/// Returns `InvalidTimeFormat` unless the input is exactly two colon-separated
/// non-negative integers.
pub fn parse_time_seconds(input: &str) -> AppResult<u32> {
    let trimmed = input.trim();
    let mut parts = trimmed.split(':');
    let (Some(minutes), Some(seconds), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AppError::invalid_time_format(input));
    };

    let minutes = parse_component(minutes).ok_or_else(|| AppError::invalid_time_format(input))?;
    let seconds = parse_component(seconds).ok_or_else(|| AppError::invalid_time_format(input))?;

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(|| AppError::invalid_time_format(input))
}

/// Parse `MM:SS` into fractional minutes
///
/// # Errors
///
/// Returns `InvalidTimeFormat` when the input does not parse (see [`parse_time_seconds`]).
pub fn parse_time_minutes(input: &str) -> AppResult<f64> {
    parse_time_seconds(input).map(|seconds| f64::from(seconds) / 60.0)
}

fn parse_component(component: &str) -> Option<u32> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

/// Format fractional minutes as `M:SS`
///
/// The minute part is truncated and the remaining fraction rounded to the
/// nearest second; a rounded 60 carries into the minute.
#[must_use]
pub fn format_pace(minutes: f64) -> String {
    if !minutes.is_finite() {
        return "--:--".to_owned();
    }
    if minutes < 0.0 {
        return format!("-{}", format_pace(-minutes));
    }

    let whole = minutes.trunc();
    let mut whole_minutes = whole as u64;
    let mut seconds = ((minutes - whole) * 60.0).round() as u64;
    if seconds >= 60 {
        whole_minutes += 1;
        seconds -= 60;
    }
    format!("{whole_minutes}:{seconds:02}")
}

/// Format whole seconds as `M:SS`
#[must_use]
pub fn format_seconds(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Format a signed difference in seconds as `±MM:SS`
///
/// Zero renders with a `+` sign.
#[must_use]
pub fn format_time_difference(seconds: i64) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let magnitude = seconds.unsigned_abs();
    format!("{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
}
