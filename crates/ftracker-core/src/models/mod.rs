// ABOUTME: Domain models for workout calculations
// ABOUTME: Re-exports Workout, TrainingType, and Locale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod training_type;
mod workout;

pub use training_type::{Locale, TrainingType};
pub use workout::Workout;
