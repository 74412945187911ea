// ABOUTME: Integration tests for three-zone and seven-zone pace models
// ABOUTME: Checks formatted ranges for a 25:00 5K runner and zone monotonicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::runner;
use outrunna::intelligence::{PaceModel, PacePolicy};
use outrunna::models::GoalDistance;

#[test]
fn test_seven_zone_ranges_for_25_minute_5k() {
    let base = runner(GoalDistance::FiveK, 3).base_pace();
    let ranges = PaceModel::new(PacePolicy::SevenZone).effort_pace_ranges(base);

    assert_eq!(ranges[&3], "11:04–12:04 min/mile (Recovery)");
    assert_eq!(ranges[&4], "10:04–10:34 min/mile (Easy)");
    assert_eq!(ranges[&5], "9:34–10:04 min/mile (Steady)");
    assert_eq!(ranges[&6], "8:49–9:19 min/mile (Marathon Pace)");
    assert_eq!(ranges[&7], "8:19–8:34 min/mile (Tempo)");
    assert_eq!(ranges[&8], "7:58–8:10 min/mile (10K)");
    assert_eq!(ranges[&9], "7:46–7:55 min/mile (5K)");
}

#[test]
fn test_three_zone_ranges_for_25_minute_5k() {
    let base = runner(GoalDistance::FiveK, 3).base_pace();
    let ranges = PaceModel::new(PacePolicy::ThreeZone).effort_pace_ranges(base);

    assert_eq!(ranges.len(), 3);
    assert_eq!(ranges[&9], "7:46–7:55 min/mile (Intervals)");
    assert_eq!(ranges[&7], "8:19–8:34 min/mile (Tempo)");
    assert_eq!(ranges[&4], "8:49–9:19 min/mile (Long)");
}

#[test]
fn test_zone_offsets_fall_as_effort_rises() {
    for policy in [PacePolicy::ThreeZone, PacePolicy::SevenZone] {
        let mut zones = policy.zones().to_vec();
        zones.sort_by_key(|z| z.rpe);
        for pair in zones.windows(2) {
            assert!(pair[1].low_offset < pair[0].low_offset, "{policy}");
            assert!(pair[1].high_offset < pair[0].high_offset, "{policy}");
            assert!(pair[0].low_offset < pair[0].high_offset);
        }
    }
}

#[test]
fn test_every_rpe_maps_to_a_zone() {
    let base = runner(GoalDistance::TenK, 4).base_pace();
    for policy in [PacePolicy::ThreeZone, PacePolicy::SevenZone] {
        let model = PaceModel::new(policy);
        for rpe in 1..=10 {
            assert!(model.range_for(base, rpe).contains(" min/mile ("));
        }
    }
}

#[test]
fn test_default_policy_is_seven_zone() {
    assert_eq!(PaceModel::default().policy(), PacePolicy::SevenZone);
}
