// ABOUTME: Workout metric formulas and summary rendering for ftracker
// ABOUTME: Distance, mean speed, per-type calorie models, and the fixed-layout summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ftracker Intelligence
//!
//! Every function here is pure: identical inputs give identical outputs and
//! nothing is shared between calls.
//!
//! ```rust
//! use ftracker_core::models::{Locale, TrainingType, Workout};
//! use ftracker_intelligence::summary::render_summary;
//!
//! let workout = Workout::new(1000, 1.0, 70.0);
//! let text = render_summary(TrainingType::Running, &workout, Locale::En);
//! assert!(text.contains("Distance: 0.65 km."));
//! ```

/// Distance and mean speed
pub mod metrics;

/// Calorie models for running, walking, and swimming
pub mod calories;

/// Per-type dispatch and summary rendering
pub mod summary;

pub use calories::{running_calories, swimming_calories, walking_calories};
pub use metrics::{distance, mean_speed, swimming_mean_speed};
pub use summary::{
    render_summary, show_training_info, try_show_training_info, TrainingSummary,
    UNKNOWN_TRAINING_TYPE,
};
