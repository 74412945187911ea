// ABOUTME: Predict command for outrunna-cli
// ABOUTME: Riegel race-time prediction between two distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use outrunna::config::PlanningConfig;
use outrunna::intelligence::RaceTimePredictor;

use crate::helpers::display::display_prediction;

/// Predict and print a time at `to_miles`
pub fn run(time: &str, from_miles: f64, to_miles: f64, exponent: Option<f64>) -> Result<()> {
    let predictor = exponent.map_or_else(
        || PlanningConfig::from_env().predictor(),
        RaceTimePredictor::new,
    );
    let predicted = predictor.predict_time(time, from_miles, to_miles)?;
    display_prediction(time, from_miles, &predicted, to_miles, predictor.exponent());
    Ok(())
}
