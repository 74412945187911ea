// ABOUTME: Criterion benchmarks for plan generation and recalibration
// ABOUTME: Measures full plan builds across plan lengths and a time-trial pace refresh
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the planning engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use outrunna::intelligence::{PlanBuilder, Recalibrator, SelectionStrategy};
use outrunna::config::PlanningConfig;
use outrunna::models::{GoalDistance, RunnerProfile};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default()
}

fn race(weeks: u64) -> NaiveDate {
    start()
        .checked_add_days(Days::new(weeks * 7))
        .unwrap_or_default()
}

fn bench_build_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_plan");
    let Ok(profile) = RunnerProfile::new(GoalDistance::HalfMarathon, "25:00", 5, 240.0) else {
        return;
    };

    for strategy in [SelectionStrategy::FixedSequence, SelectionStrategy::DurationFit] {
        let builder = PlanBuilder::from_config(&PlanningConfig {
            selection_strategy: strategy,
            ..PlanningConfig::default()
        });
        for weeks in [8_u64, 16, 52] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), weeks),
                &weeks,
                |b, &weeks| {
                    b.iter(|| {
                        builder.build_plan(
                            black_box(&profile),
                            start(),
                            race(weeks),
                            black_box(240.0),
                        )
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_recalibrate(c: &mut Criterion) {
    let Ok(profile) = RunnerProfile::new(GoalDistance::Marathon, "25:00", 6, 300.0) else {
        return;
    };
    let Ok(plan) = PlanBuilder::default().build_plan(&profile, start(), race(24), 300.0) else {
        return;
    };
    let recalibrator = Recalibrator::default();

    c.bench_function("recalibrate_24_week_plan", |b| {
        b.iter_batched(
            || plan.clone(),
            |mut plan| recalibrator.apply_new_time_trial(&mut plan, black_box("23:45"), 3.1, &profile),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_build_plan, bench_recalibrate);
criterion_main!(benches);
