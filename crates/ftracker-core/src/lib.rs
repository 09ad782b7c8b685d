// ABOUTME: Core types and constants for the ftracker fitness calculator
// ABOUTME: Foundation crate with error handling, calculation constants, and workout models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ftracker Core
//!
//! Foundation crate providing shared types and constants for the ftracker
//! calculator. The formulas live in `ftracker-intelligence`; this crate only
//! holds what they agree on.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Step length, unit conversions, and calorie-model coefficients
//! - **models**: `Workout`, `TrainingType`, and `Locale`

/// Unified error handling system with standard error codes
pub mod errors;

/// Calculation constants organized by domain
pub mod constants;

/// Workout record, training type, and label locale
pub mod models;
