// ABOUTME: Pace model converting a base 5K pace into per-effort target pace ranges
// ABOUTME: Supports the three-zone (interval/tempo/long) and seven-zone RPE policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pace Model
//!
//! Every zone is a pair of offsets (minutes per mile) applied to the runner's
//! base 5K pace. Negative offsets are faster than 5K pace. Within a policy the
//! offsets shrink monotonically as effort rises.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use outrunna_core::constants::annotations::PACE_UNIT;
use outrunna_core::constants::race_week::STRIDES_RPE;
use outrunna_core::errors::AppError;
use outrunna_core::formatters::format_pace;
use outrunna_core::models::SessionKind;
use serde::{Deserialize, Serialize};

/// Which zone table annotates sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacePolicy {
    /// Interval, tempo, and long zones only
    ThreeZone,
    /// One zone per RPE from 3 (recovery) to 9 (5K effort)
    #[default]
    SevenZone,
}

impl fmt::Display for PacePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreeZone => write!(f, "three_zone"),
            Self::SevenZone => write!(f, "seven_zone"),
        }
    }
}

impl FromStr for PacePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "three_zone" | "3_zone" => Ok(Self::ThreeZone),
            "seven_zone" | "7_zone" | "rpe" => Ok(Self::SevenZone),
            other => Err(AppError::invalid_input(format!(
                "Unknown pace policy '{other}' (expected three_zone or seven_zone)"
            ))),
        }
    }
}

/// One pace zone: offsets from base 5K pace in minutes per mile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaceZone {
    /// Nominal RPE the zone is keyed by
    pub rpe: u8,
    /// Offset for the fast end of the range
    pub low_offset: f64,
    /// Offset for the slow end of the range
    pub high_offset: f64,
    /// Label shown in parentheses after the range
    pub label: &'static str,
}

const fn zone(rpe: u8, low_offset: f64, high_offset: f64, label: &'static str) -> PaceZone {
    PaceZone {
        rpe,
        low_offset,
        high_offset,
        label,
    }
}

/// Ordered fastest first
static THREE_ZONES: [PaceZone; 3] = [
    zone(9, -0.30, -0.15, "Intervals"),
    zone(7, 0.25, 0.50, "Tempo"),
    zone(4, 0.75, 1.25, "Long"),
];

/// Indexed by `rpe - 3`
static SEVEN_ZONES: [PaceZone; 7] = [
    zone(3, 3.00, 4.00, "Recovery"),
    zone(4, 2.00, 2.50, "Easy"),
    zone(5, 1.50, 2.00, "Steady"),
    zone(6, 0.75, 1.25, "Marathon Pace"),
    zone(7, 0.25, 0.50, "Tempo"),
    zone(8, -0.10, 0.10, "10K"),
    zone(9, -0.30, -0.15, "5K"),
];

impl PacePolicy {
    /// Zone table for this policy
    #[must_use]
    pub fn zones(self) -> &'static [PaceZone] {
        match self {
            Self::ThreeZone => &THREE_ZONES,
            Self::SevenZone => &SEVEN_ZONES,
        }
    }

    /// Zone covering an RPE
    ///
    /// Three-zone: RPE 9+ intervals, 6-8 tempo, everything easier long.
    /// Seven-zone: RPE is clamped into 3..=9.
    #[must_use]
    pub fn zone_for(self, rpe: u8) -> &'static PaceZone {
        match self {
            Self::ThreeZone => match rpe {
                0..=5 => &THREE_ZONES[2],
                6..=8 => &THREE_ZONES[1],
                _ => &THREE_ZONES[0],
            },
            Self::SevenZone => {
                let clamped = rpe.clamp(3, 9);
                &SEVEN_ZONES[usize::from(clamped - 3)]
            }
        }
    }
}

/// Formats target pace ranges for a base pace under one policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaceModel {
    policy: PacePolicy,
}

impl PaceModel {
    /// Create a pace model for a policy
    #[must_use]
    pub const fn new(policy: PacePolicy) -> Self {
        Self { policy }
    }

    /// Active policy
    #[must_use]
    pub const fn policy(&self) -> PacePolicy {
        self.policy
    }

    /// Render one zone as `"LOW–HIGH min/mile (Label)"`
    #[must_use]
    pub fn format_range(base_pace: f64, zone: &PaceZone) -> String {
        format!(
            "{}–{} {PACE_UNIT} ({})",
            format_pace(base_pace + zone.low_offset),
            format_pace(base_pace + zone.high_offset),
            zone.label
        )
    }

    /// Pace range string for a session of the given RPE
    #[must_use]
    pub fn range_for(&self, base_pace: f64, rpe: u8) -> String {
        Self::format_range(base_pace, self.policy.zone_for(rpe))
    }

    /// Pace range string for a session
    ///
    /// Strides target the seven-zone 10K range under either policy.
    #[must_use]
    pub fn session_range(&self, base_pace: f64, kind: SessionKind, rpe: u8) -> String {
        match kind {
            SessionKind::Strides => {
                Self::format_range(base_pace, PacePolicy::SevenZone.zone_for(STRIDES_RPE))
            }
            _ => self.range_for(base_pace, rpe),
        }
    }

    /// Mapping from each zone's nominal RPE to its formatted range
    #[must_use]
    pub fn effort_pace_ranges(&self, base_pace: f64) -> BTreeMap<u8, String> {
        self.policy
            .zones()
            .iter()
            .map(|zone| (zone.rpe, Self::format_range(base_pace, zone)))
            .collect()
    }
}
