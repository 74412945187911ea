// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Argument parsers for outrunna-cli
// ABOUTME: Parses SLOT=MM:SS trial entries and distances given as miles or race names

use outrunna::models::GoalDistance;

/// Parse `SLOT=MM:SS` with a 1-based slot
pub fn parse_trial(value: &str) -> Result<(usize, String), String> {
    let (slot, time) = value
        .split_once('=')
        .ok_or_else(|| format!("expected SLOT=MM:SS, got '{value}'"))?;
    let slot: usize = slot
        .trim()
        .parse()
        .map_err(|_| format!("time trial slot '{slot}' is not a number"))?;
    if slot == 0 {
        return Err("time trial slots start at 1".to_owned());
    }
    Ok((slot, time.trim().to_owned()))
}

/// Parse a distance as a race name (`5k`, `half`, ...) or a positive number of miles
pub fn parse_distance(value: &str) -> Result<f64, String> {
    if let Ok(goal) = value.parse::<GoalDistance>() {
        return Ok(goal.miles());
    }
    match value.trim().parse::<f64>() {
        Ok(miles) if miles.is_finite() && miles > 0.0 => Ok(miles),
        _ => Err(format!(
            "'{value}' is neither a race name (5k, 10k, half, marathon) nor a positive mileage"
        )),
    }
}
