// ABOUTME: Run Coach CLI - command-line front end for the training-plan engine
// ABOUTME: Generates plans, prints pace tables and fitness estimates, and tracks plan progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # 10K plan from a manual VDOT
//! run-coach plan --distance 10000 --race-date 2026-12-20 --vdot 45
//!
//! # Half marathon plan from a recent 5K, five sessions a week, as JSON
//! run-coach plan --distance 21097 --race-date 2027-03-14 \
//!     --race-distance 5000 --race-time 20:00 --sessions 5 --format json
//!
//! # Plan from exported activity history
//! run-coach plan --distance 42195 --race-date 2027-04-18 --activities runs.json
//!
//! # Training paces for a VDOT
//! run-coach paces --vdot 52
//!
//! # Fitness estimate and race predictions
//! run-coach vdot --race-distance 10000 --race-time 40:00
//!
//! # Match activities against a saved plan and show this week's progress
//! run-coach progress --plan plan.json --activities runs.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use run_coach::config::PlannerConfig;
use run_coach::logging::LoggingConfig;

use helpers::input::FitnessArgs;

#[derive(Parser)]
#[command(
    name = "run-coach",
    about = "Run Coach training-plan generator",
    long_about = "Builds periodized running plans from a race goal and a VDOT fitness estimate."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Output format for generated data
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a training plan for a race
    Plan {
        /// Goal race distance in meters (5000, 10000, 21097, 42195, ...)
        #[arg(long)]
        distance: u32,

        /// Race day (YYYY-MM-DD)
        #[arg(long)]
        race_date: NaiveDate,

        /// Plan name (derived from the distance if omitted)
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fitness: FitnessArgs,

        /// Sessions per week (3-6); the configured default if omitted
        #[arg(long)]
        sessions: Option<u32>,

        /// Seed for reproducible easy-run distances and session choice
        #[arg(long)]
        seed: Option<u64>,

        /// Plan as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print training paces for a fitness estimate
    Paces {
        #[command(flatten)]
        fitness: FitnessArgs,
    },

    /// Estimate VDOT and predict equivalent race times
    Vdot {
        #[command(flatten)]
        fitness: FitnessArgs,
    },

    /// Match activities against a saved plan and report progress
    Progress {
        /// Plan JSON written by `plan --format json`
        #[arg(long)]
        plan: PathBuf,

        /// JSON array of activities to match
        #[arg(long)]
        activities: Option<PathBuf>,

        /// Report as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = PlannerConfig::from_env()?;

    match cli.command {
        Command::Plan {
            distance,
            race_date,
            name,
            fitness,
            sessions,
            seed,
            today,
            format,
        } => {
            let config = PlannerConfig {
                random_seed: seed.or(config.random_seed),
                ..config
            };
            let options = commands::plan::PlanOptions {
                distance,
                race_date,
                name,
                sessions,
                today: today.unwrap_or_else(|| Local::now().date_naive()),
                json: format == OutputFormat::Json,
            };
            commands::plan::generate(config, &fitness, options).await?;
        }
        Command::Paces { fitness } => {
            commands::paces::show(&fitness).await?;
        }
        Command::Vdot { fitness } => {
            commands::vdot::estimate(&fitness).await?;
        }
        Command::Progress {
            plan,
            activities,
            today,
        } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            commands::progress::report(&plan, activities.as_deref(), today).await?;
        }
    }

    Ok(())
}
