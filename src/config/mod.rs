// ABOUTME: Configuration module for calculator output settings
// ABOUTME: Environment-only configuration, overridable by CLI flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for ftracker
//!
//! - **Environment**: Locale and output format from environment variables

/// Environment-based configuration
pub mod environment;

pub use environment::TrackerConfig;
