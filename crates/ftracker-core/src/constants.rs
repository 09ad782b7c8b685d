// ABOUTME: Unit conversions and empirical calorie-model coefficients
// ABOUTME: Shared by the distance, speed, and calorie formulas in ftracker-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculation constants
//!
//! The calorie coefficients are empirical and are kept exactly as the
//! established formulas state them. Changing any of them changes the rendered
//! summaries that downstream consumers compare against.

/// Stride and unit conversion factors
pub mod units {
    /// Average length of one action (step or stroke) in meters
    pub const STEP_LENGTH_M: f64 = 0.65;

    /// Meters in one kilometer
    pub const METERS_PER_KM: f64 = 1000.0;

    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
}

/// Running calorie model: `(18 * speed + 1.79) * weight * minutes`
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const MEAN_SPEED_MULTIPLIER: f64 = 18.0;

    /// Baseline calories per kg per minute added to the speed term
    pub const MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Walking calorie model
///
/// `(0.035 * weight + (speed_ms^2 / height_cm) * 0.029 * weight) * minutes`
pub mod walking {
    /// Body mass multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier of the speed-over-height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie model: `(speed + 1.1) * 2 * weight * hours`
pub mod swimming {
    /// Shift added to mean swimming speed (km/h)
    pub const MEAN_SPEED_SHIFT: f64 = 1.1;

    /// Body mass multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Binary and log target name
    pub const FTRACKER: &str = "ftracker";
}
