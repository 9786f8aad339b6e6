// ABOUTME: recovery-cli - command-line front end for the macro recovery engine
// ABOUTME: Classifies snapshots, reallocates budgets, builds recovery plans, and drives plan requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify a day (snapshot JSON with consumed/target totals)
//! recovery-cli classify --snapshot today.json
//!
//! # Split what is left of the day after breakfast and a snack
//! recovery-cli reallocate --snapshot today.json --logged breakfast,snack
//!
//! # Spread a 900 kcal excess over 3 days from a known baseline
//! recovery-cli plan --excess 900 --days 3 --baseline 2200
//!
//! # Same, deriving the baseline from a profile
//! recovery-cli plan --excess 900 --profile profile.json
//!
//! # Neither given: the baseline of the default profile is used
//! recovery-cli plan --excess 900
//!
//! # Submit an AI meal-plan request and wait for the result
//! recovery-cli request --input request.json --profile profile.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use macro_recovery::errors::{AppError, AppResult};
use macro_recovery::logging::{LogFormat, LoggingConfig};
use macro_recovery::models::MealType;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "recovery-cli",
    about = "Caloric exceedance and recovery allocation",
    long_about = "Classify calorie exceedances, reallocate the remaining daily budget, plan multi-day recovery, and request AI meal plans."
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
    /// Classify how far a snapshot exceeds its calorie target
    Classify {
        /// Snapshot JSON file, or `-` for stdin
        #[arg(long)]
        snapshot: PathBuf,
    },

    /// Split the remaining budget over the meals not yet logged
    Reallocate {
        /// Snapshot JSON file, or `-` for stdin
        #[arg(long)]
        snapshot: PathBuf,

        /// Meal types already logged today (comma-separated)
        #[arg(long, value_delimiter = ',')]
        logged: Vec<MealType>,

        /// Weight meals 25/35/35/5 instead of splitting evenly
        #[arg(long)]
        standard_weights: bool,
    },

    /// Spread a calorie excess over several days
    Plan {
        /// Calories over target to absorb
        #[arg(long)]
        excess: f64,

        /// Recovery horizon in days (default from configuration)
        #[arg(long)]
        days: Option<u32>,

        /// Baseline daily energy expenditure in kcal
        #[arg(long, conflicts_with = "profile")]
        baseline: Option<f64>,

        /// Profile JSON to estimate the baseline from; without this or
        /// `--baseline` the default profile is used
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Submit an AI meal-plan request and poll until it finishes
    Request {
        /// User request JSON file
        #[arg(long)]
        input: PathBuf,

        /// User profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Planner backend base URL override
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if !cli.verbose && logging.format == LogFormat::Pretty {
        logging.format = LogFormat::Compact;
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    debug!("recovery-cli starting");

    match cli.command {
        Command::Classify { snapshot } => commands::analysis::classify(&snapshot)?,
        Command::Reallocate {
            snapshot,
            logged,
            standard_weights,
        } => commands::analysis::reallocate(&snapshot, &logged, standard_weights)?,
        Command::Plan {
            excess,
            days,
            baseline,
            profile,
        } => commands::analysis::plan(excess, days, baseline, profile.as_deref())?,
        Command::Request {
            input,
            profile,
            base_url,
        } => commands::request::run(&input, &profile, base_url.as_deref()).await?,
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use clap::error::Result as ClapResult;

    use super::*;

    fn parse_plan(extra: &[&str]) -> ClapResult<(Option<f64>, Option<PathBuf>)> {
        let mut args = vec!["recovery-cli", "plan", "--excess", "900"];
        args.extend_from_slice(extra);
        match Cli::try_parse_from(args)?.command {
            Command::Plan {
                baseline, profile, ..
            } => Ok((baseline, profile)),
            _ => panic!("expected a plan command"),
        }
    }

    #[test]
    fn plan_baseline_sources() {
        assert_eq!(parse_plan(&["--baseline", "2200"]).unwrap(), (Some(2200.0), None));
        assert_eq!(
            parse_plan(&["--profile", "profile.json"]).unwrap(),
            (None, Some(PathBuf::from("profile.json")))
        );
        // Falls back to the default profile
        assert_eq!(parse_plan(&[]).unwrap(), (None, None));
        assert!(parse_plan(&["--baseline", "2200", "--profile", "profile.json"]).is_err());
    }
}
