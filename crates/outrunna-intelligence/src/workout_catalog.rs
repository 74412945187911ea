// ABOUTME: Fixed workout catalog (easy, tempo, long, interval) shared by every selection strategy
// ABOUTME: Immutable process-wide templates with nominal duration, RPE, and structure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use outrunna_core::models::SessionKind;
use serde::Serialize;

/// Catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkoutTemplate {
    /// Session type produced from this template
    pub kind: SessionKind,
    /// Display name
    pub name: &'static str,
    /// Nominal duration in minutes
    pub duration_minutes: u32,
    /// Target Rating of Perceived Exertion
    pub rpe: u8,
    /// Structured description
    pub structure: &'static str,
}

/// Easy aerobic run
pub const EASY: WorkoutTemplate = WorkoutTemplate {
    kind: SessionKind::Easy,
    name: "Easy Run",
    duration_minutes: 30,
    rpe: 4,
    structure: "Conversational pace, relaxed effort",
};

/// Tempo run
pub const TEMPO: WorkoutTemplate = WorkoutTemplate {
    kind: SessionKind::Tempo,
    name: "Tempo Run",
    duration_minutes: 40,
    rpe: 7,
    structure: "20 min warm up, 20 min tempo, 5 min cool down",
};

/// Long run
pub const LONG: WorkoutTemplate = WorkoutTemplate {
    kind: SessionKind::Long,
    name: "Long Run",
    duration_minutes: 75,
    rpe: 5,
    structure: "Easy pace, conversational",
};

/// High-intensity intervals
pub const INTERVAL: WorkoutTemplate = WorkoutTemplate {
    kind: SessionKind::Interval,
    name: "Norwegian 4x4",
    duration_minutes: 40,
    rpe: 9,
    structure: "4 min hard, 2 min rest x 4",
};

/// Catalog in tie-break order
pub static CATALOG: [WorkoutTemplate; 4] = [EASY, TEMPO, LONG, INTERVAL];

/// Highest RPE any catalog workout targets; time trials and races run at it
#[must_use]
pub fn max_catalog_rpe() -> u8 {
    CATALOG.iter().map(|t| t.rpe).max().unwrap_or(EASY.rpe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let kinds: Vec<_> = CATALOG.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![SessionKind::Easy, SessionKind::Tempo, SessionKind::Long, SessionKind::Interval]
        );
    }

    #[test]
    fn test_hard_tier_templates() {
        assert!(TEMPO.kind.is_hard_tier());
        assert!(INTERVAL.kind.is_hard_tier());
        assert!(!LONG.kind.is_hard_tier());
    }

    #[test]
    fn test_catalog_max_is_interval_effort() {
        assert_eq!(max_catalog_rpe(), INTERVAL.rpe);
        assert!(CATALOG.iter().all(|t| t.rpe <= max_catalog_rpe()));
    }
}
