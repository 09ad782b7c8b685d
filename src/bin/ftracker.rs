// ABOUTME: ftracker CLI - computes and prints a workout summary from raw counters
// ABOUTME: Reads locale and output format from the environment, overridable by flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # One-hour run of 10,000 steps for a 70 kg athlete
//! ftracker running --actions 10000 --duration 1 --weight 70
//!
//! # Walk, Russian labels
//! ftracker walking --actions 6000 --duration 1.5 --weight 75 --height 180 --locale ru
//!
//! # Swim as JSON
//! ftracker swimming --actions 2000 --duration 1 --weight 70 --pool-length 25 --pool-laps 40 --format json
//! ```

use clap::Parser;
use ftracker::{
    config::TrackerConfig,
    errors::{AppResult, ErrorResponse},
    formatters::{format_summary, OutputFormat},
    logging::LoggingConfig,
    models::{Locale, TrainingType, Workout},
    summary::{unknown_training_type, TrainingSummary},
};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "ftracker",
    about = "Workout distance, speed, and calorie calculator",
    long_about = "Computes distance, mean speed, and calories burned for a running, walking, or swimming session."
)]
struct Cli {
    /// Training type: running, walking, swimming (or a localized label)
    training_type: String,

    /// Number of actions (steps, or strokes when swimming)
    #[arg(long)]
    actions: u32,

    /// Duration in hours; zero or negative yields zero calories
    #[arg(long, allow_negative_numbers = true)]
    duration: f64,

    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Height in centimeters (walking)
    #[arg(long, default_value = "0")]
    height: f64,

    /// Pool length in meters (swimming)
    #[arg(long, default_value = "0")]
    pool_length: u32,

    /// Number of pool lengths swum (swimming)
    #[arg(long, default_value = "0")]
    pool_laps: u32,

    /// Label locale (en, ru); overrides FTRACKER_LOCALE
    #[arg(long, value_parser = parse_locale)]
    locale: Option<Locale>,

    /// Output format (text, json, toon); overrides FTRACKER_OUTPUT_FORMAT
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    value.parse::<Locale>().map_err(|e| e.message)
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str_param(value).ok_or_else(|| "expected text, json, or toon".to_owned())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error.code = ?e.code, "{e}");
            let code = e.code.exit_code();
            let response = ErrorResponse::from(e);
            match serde_json::to_string(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> AppResult<String> {
    let config = TrackerConfig::from_env()?.with_overrides(cli.locale, cli.format);

    let training_type = match cli.training_type.parse::<TrainingType>() {
        Ok(training_type) => training_type,
        Err(e) if config.output_format == OutputFormat::Text => {
            // Text consumers compare against the sentinel line
            error!(training.label = %cli.training_type, "{e}");
            return Ok(format!("{}\n", unknown_training_type(config.locale)));
        }
        Err(e) => return Err(e),
    };

    let workout = Workout::new(cli.actions, cli.duration, cli.weight)
        .height_cm(cli.height)
        .pool_length_m(cli.pool_length)
        .pool_laps(cli.pool_laps);

    info!(
        training.type = %training_type,
        output.format = %config.output_format,
        "Computing workout summary"
    );

    let summary = TrainingSummary::compute(training_type, &workout);
    let output = format_summary(&summary, config.output_format, config.locale)?;

    let mut data = output.data;
    if !data.ends_with('\n') {
        data.push('\n');
    }
    Ok(data)
}
