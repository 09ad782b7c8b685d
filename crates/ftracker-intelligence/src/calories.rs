// ABOUTME: Empirical calorie models for running, walking, and swimming
// ABOUTME: Each model returns 0 kcal for a non-positive duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie models
//!
//! The three models are not unified. Running uses the shared km/h mean speed,
//! walking derives its own speed in m/s, and swimming uses pool geometry.

use ftracker_core::constants::{
    running, swimming,
    units::{MINUTES_PER_HOUR, SECONDS_PER_HOUR, STEP_LENGTH_M},
    walking,
};

use crate::metrics::{mean_speed, swum_distance_km};

/// Calories burned while running, in kcal
///
/// Formula: `(18 * mean_speed + 1.79) * weight_kg * duration_hours * 60`
#[must_use]
pub fn running_calories(action_count: u32, weight_kg: f64, duration_hours: f64) -> f64 {
    if duration_hours <= 0.0 {
        return 0.0;
    }

    let speed = mean_speed(action_count, duration_hours);

    (running::MEAN_SPEED_MULTIPLIER * speed + running::MEAN_SPEED_SHIFT)
        * weight_kg
        * duration_hours
        * MINUTES_PER_HOUR
}

/// Calories burned while walking, in kcal
///
/// Formula: `(0.035 * weight + (speed_ms^2 / height_cm) * 0.029 * weight) * duration_hours * 60`
///
/// Speed is in meters per second and height stays in centimeters. The model
/// is empirical; the units are not meant to cancel.
#[must_use]
pub fn walking_calories(
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
) -> f64 {
    if duration_hours <= 0.0 {
        return 0.0;
    }

    let speed_ms = f64::from(action_count) * STEP_LENGTH_M / (duration_hours * SECONDS_PER_HOUR);

    (walking::WEIGHT_MULTIPLIER * weight_kg
        + (speed_ms * speed_ms) / height_cm * walking::SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * duration_hours
        * MINUTES_PER_HOUR
}

/// Calories burned while swimming, in kcal
///
/// Formula: `(pool_speed + 1.1) * 2 * weight_kg * duration_hours`
#[must_use]
pub fn swimming_calories(
    pool_length_m: u32,
    pool_laps: u32,
    duration_hours: f64,
    weight_kg: f64,
) -> f64 {
    if duration_hours <= 0.0 {
        return 0.0;
    }

    let speed = swum_distance_km(pool_length_m, pool_laps) / duration_hours;

    (speed + swimming::MEAN_SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * weight_kg * duration_hours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_calories_one_hour() {
        // (18 * 0.65 + 1.79) * 70 * 1 * 60 = 13.49 * 4200
        let kcal = running_calories(1000, 70.0, 1.0);
        assert!((kcal - 56_658.0).abs() < 1e-6);
    }

    #[test]
    fn test_walking_calories_one_hour() {
        let kcal = walking_calories(1000, 1.0, 70.0, 170.0);
        assert!((kcal - 147.023_357_162).abs() < 1e-6);
    }

    #[test]
    fn test_swimming_calories_one_kilometer() {
        // 25 m * 40 laps = 1 km in 1 h: (1.0 + 1.1) * 2 * 70 * 1
        let kcal = swimming_calories(25, 40, 1.0, 70.0);
        assert!((kcal - 294.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_duration_yields_zero() {
        for duration in [0.0, -0.5, -1.0] {
            assert!(running_calories(1000, 70.0, duration).abs() < f64::EPSILON);
            assert!(walking_calories(1000, duration, 70.0, 170.0).abs() < f64::EPSILON);
            assert!(swimming_calories(25, 40, duration, 70.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_walking_at_rest_is_weight_term_only() {
        // No steps: only 0.035 * weight per minute remains
        let kcal = walking_calories(0, 2.0, 80.0, 180.0);
        assert!((kcal - 0.035 * 80.0 * 120.0).abs() < 1e-9);
    }
}
