// ABOUTME: Distance and mean speed derived from action counts and pool laps
// ABOUTME: Zero-duration guards return 0 instead of dividing by zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ftracker_core::constants::units::{METERS_PER_KM, STEP_LENGTH_M};

/// Distance covered in kilometers, assuming a fixed action length of 0.65 m
#[must_use]
pub fn distance(action_count: u32) -> f64 {
    f64::from(action_count) * STEP_LENGTH_M / METERS_PER_KM
}

/// Mean speed over the whole session in km/h
///
/// Returns 0 when `duration_hours` is exactly zero. A negative duration is
/// not guarded and yields a negative speed.
#[must_use]
pub fn mean_speed(action_count: u32, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    distance(action_count) / duration_hours
}

/// Mean swimming speed in km/h computed from pool geometry, not strokes
///
/// Returns 0 when `duration_hours` is exactly zero.
#[must_use]
pub fn swimming_mean_speed(pool_length_m: u32, pool_laps: u32, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    swum_distance_km(pool_length_m, pool_laps) / duration_hours
}

/// Total swum distance in kilometers
pub(crate) fn swum_distance_km(pool_length_m: u32, pool_laps: u32) -> f64 {
    f64::from(pool_length_m) * f64::from(pool_laps) / METERS_PER_KM
}
