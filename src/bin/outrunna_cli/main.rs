// ABOUTME: OutRunna CLI - generates training plans and race-time predictions from the terminal
// ABOUTME: Applies time-trial results to a generated plan and renders it as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # 10K plan, four days a week, starting today
//! outrunna-cli plan --goal 10k --pr 25:00 --days 4 --race-date 2025-06-01
//!
//! # Same plan after logging the first time trial
//! outrunna-cli plan --goal 10k --pr 25:00 --race-date 2025-06-01 --trial 1=23:40
//!
//! # Machine-readable output
//! outrunna-cli plan --goal 5k --pr 25:00 --race-date 2025-06-01 --format json
//!
//! # Riegel prediction from a 5K to a half marathon
//! outrunna-cli predict --time 25:00 --from 5k --to half
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use outrunna::intelligence::{PacePolicy, SelectionStrategy};
use outrunna::logging::LoggingConfig;
use outrunna::models::GoalDistance;
use tracing::debug;

use commands::plan::{OutputFormat, PlanOptions};
use helpers::args::{parse_distance, parse_trial};

#[derive(Parser)]
#[command(
    name = "outrunna-cli",
    about = "OutRunna running plan generator",
    long_about = "Builds wave-periodized running plans from a 5K PR and race date, and recalibrates paces from time trials."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a training plan
    Plan {
        /// Goal race distance (5k, 10k, half, marathon)
        #[arg(long)]
        goal: GoalDistance,

        /// Current 5K personal record (MM:SS)
        #[arg(long)]
        pr: String,

        /// Training days per week (3-6)
        #[arg(long, default_value = "4")]
        days: u8,

        /// Weekly duration budget in minutes (defaults to PLANNING_DEFAULT_WEEKLY_MINUTES)
        #[arg(long)]
        weekly_minutes: Option<f64>,

        /// First day of training (defaults to today)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Race day
        #[arg(long)]
        race_date: NaiveDate,

        /// Time-trial result as SLOT=MM:SS (1-based slot, repeatable)
        #[arg(long = "trial", value_parser = parse_trial)]
        trials: Vec<(usize, String)>,

        /// Pace zone policy override (three_zone, seven_zone)
        #[arg(long)]
        pace_policy: Option<PacePolicy>,

        /// Session selection strategy override
        #[arg(long)]
        strategy: Option<SelectionStrategy>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Predict a race time at another distance
    Predict {
        /// Known time (MM:SS)
        #[arg(long)]
        time: String,

        /// Distance of the known time: miles or a race name
        #[arg(long, value_parser = parse_distance)]
        from: f64,

        /// Distance to predict: miles or a race name
        #[arg(long, value_parser = parse_distance)]
        to: f64,

        /// Riegel exponent override
        #[arg(long)]
        exponent: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;
    debug!("OutRunna CLI");

    match cli.command {
        Command::Plan {
            goal,
            pr,
            days,
            weekly_minutes,
            start_date,
            race_date,
            trials,
            pace_policy,
            strategy,
            format,
        } => commands::plan::run(PlanOptions {
            goal,
            pr,
            days,
            weekly_minutes,
            start_date,
            race_date,
            trials,
            pace_policy,
            strategy,
            format,
        })?,
        Command::Predict {
            time,
            from,
            to,
            exponent,
        } => commands::predict::run(&time, from, to, exponent)?,
    }

    Ok(())
}
