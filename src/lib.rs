// ABOUTME: Main library entry point for the ftracker fitness calculator
// ABOUTME: Re-exports the formulas and adds output formatting, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ftracker
//!
//! Derives distance, mean speed, and calories burned from the raw counters of
//! a running, walking, or swimming session, and renders a fixed-layout
//! summary.
//!
//! ## Architecture
//!
//! - **`ftracker-core`**: errors, constants, and the `Workout` / `TrainingType` models
//! - **`ftracker-intelligence`**: the formulas and the summary dispatch
//! - **this crate**: output formats, environment configuration, logging, and the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use ftracker::models::{Locale, TrainingType, Workout};
//! use ftracker::summary::TrainingSummary;
//!
//! let workout = Workout::new(5000, 0.5, 80.0);
//! let summary = TrainingSummary::compute(TrainingType::Running, &workout);
//! assert!((summary.speed_kmh - 6.5).abs() < 1e-9);
//!
//! let legacy = ftracker::show_training_info(5000, "Cycling", 0.5, 80.0, 0.0, 0, 0);
//! assert_eq!(legacy, ftracker::UNKNOWN_TRAINING_TYPE);
//! # let _ = Locale::En;
//! ```

/// Environment configuration for locale and output format
pub mod config;

/// Output format abstraction (text, JSON, TOON)
pub mod formatters;

/// Structured logging setup
pub mod logging;

pub use ftracker_core::{constants, errors, models};
pub use ftracker_intelligence::{calories, metrics, summary};

pub use ftracker_intelligence::{
    distance, mean_speed, render_summary, running_calories, show_training_info,
    swimming_calories, swimming_mean_speed, try_show_training_info, walking_calories,
    TrainingSummary, UNKNOWN_TRAINING_TYPE,
};
