// ABOUTME: Application constants for race distances, periodization, and pace zones
// ABOUTME: Single home for the numbers every planning component shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by domain.
//!
//! Tunable values (exponent, rates, factors) are defaults only; the planning
//! configuration may override them at runtime.

/// Canonical race distances expressed as mile-equivalents
pub mod race_distances {
    /// 5K mile-equivalent
    pub const FIVE_K_MILES: f64 = 3.1;
    /// 10K mile-equivalent
    pub const TEN_K_MILES: f64 = 6.2;
    /// Half-marathon mile-equivalent
    pub const HALF_MARATHON_MILES: f64 = 13.1;
    /// Marathon mile-equivalent
    pub const MARATHON_MILES: f64 = 26.2;
    /// Time-trial distance for runners targeting a 5K
    pub const SHORT_TIME_TRIAL_MILES: f64 = 2.0;
}

/// Riegel race-time prediction
///
/// Reference: Riegel, P.S. (1981). "Athletic records and human endurance."
/// *American Scientist*, 69(3), 285-290.
pub mod prediction {
    /// Default power-law exponent (sub-linear falloff of pace with distance)
    pub const RIEGEL_EXPONENT: f64 = 1.06;
}

/// Wave periodization defaults
pub mod periodization {
    /// Weekly volume increase per build week within a wave
    pub const PROGRESSION_RATE: f64 = 0.08;
    /// Deload week volume as a fraction of the wave's base
    pub const DELOAD_FACTOR: f64 = 0.70;
    /// Taper week volume as a fraction of peak base volume
    pub const TAPER_FACTOR: f64 = 0.70;
    /// Race week volume as a fraction of peak base volume
    pub const RACE_WEEK_FACTOR: f64 = 0.50;
    /// Weeks in a full wave (three build weeks and one deload)
    pub const WAVE_LENGTH: u32 = 4;
    /// Taper week plus race week
    pub const MIN_LEAD_WEEKS: i64 = 2;
    /// Weekly budget used when the runner does not supply one (minutes)
    pub const DEFAULT_WEEKLY_MINUTES: f64 = 240.0;
    /// Fewest training days per week
    pub const MIN_DAYS_PER_WEEK: u8 = 3;
    /// Most training days per week
    pub const MAX_DAYS_PER_WEEK: u8 = 6;
}

/// Time-trial target band
pub mod time_trial {
    /// Assumed improvement per completed wave
    pub const IMPROVEMENT_RATE: f64 = 0.015;
    /// Symmetric buffer around the decayed target
    pub const BUFFER_PCT: f64 = 0.02;
    /// Time-trial session duration for the 2-mile trial (minutes)
    pub const SHORT_TRIAL_MINUTES: u32 = 20;
    /// Time-trial session duration for the 5K-distance trial (minutes)
    pub const LONG_TRIAL_MINUTES: u32 = 25;
}

/// Race week fixed sessions
pub mod race_week {
    /// Strides sharpening session duration (minutes)
    pub const STRIDES_MINUTES: u32 = 20;
    /// Strides effort (10K zone)
    pub const STRIDES_RPE: u8 = 8;
    /// Estimated duration for a 5K race (minutes)
    pub const FIVE_K_RACE_MINUTES: u32 = 25;
    /// Estimated duration for every longer race (minutes)
    pub const LONG_RACE_MINUTES: u32 = 60;
}

/// Fixed pace annotations
pub mod annotations {
    /// Annotation for all-out efforts (time trials, races)
    pub const ALL_OUT: &str = "All-out";
    /// Time-trial description
    pub const TIME_TRIAL_DESCRIPTION: &str = "Time trial – log result";
    /// Pace range unit suffix
    pub const PACE_UNIT: &str = "min/mile";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Engine service name
    pub const OUTRUNNA: &str = "outrunna";
}
