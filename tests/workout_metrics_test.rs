// ABOUTME: Tests for distance, mean speed, and calorie formulas
// ABOUTME: Covers zero-duration guards, linearity, and reference values for each training type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ftracker::{
    distance, mean_speed, running_calories, swimming_calories, swimming_mean_speed,
    walking_calories,
};

const EPS: f64 = 1e-9;

// ============================================================================
// DISTANCE AND SPEED
// ============================================================================

#[test]
fn test_distance_zero_actions() {
    assert!(distance(0).abs() < EPS);
}

#[test]
fn test_distance_slope() {
    for actions in [1_u32, 10, 1_000, 123_456] {
        let expected = f64::from(actions) * 0.000_65;
        assert!(
            (distance(actions) - expected).abs() < EPS,
            "distance({actions}) should be {expected}"
        );
    }
}

#[test]
fn test_mean_speed_zero_duration_for_any_count() {
    for actions in [0_u32, 1, 10_000, u32::MAX] {
        assert!(mean_speed(actions, 0.0).abs() < EPS);
    }
}

#[test]
fn test_mean_speed_reference() {
    // 5000 steps = 3.25 km in 30 minutes
    assert!((mean_speed(5000, 0.5) - 6.5).abs() < EPS);
}

#[test]
fn test_mean_speed_negative_duration_is_not_guarded() {
    assert!(mean_speed(1000, -1.0) < 0.0);
}

#[test]
fn test_swimming_mean_speed_reference() {
    assert!((swimming_mean_speed(25, 4, 1.0) - 0.1).abs() < EPS);
    assert!((swimming_mean_speed(50, 20, 0.75) - 1.333_333_333).abs() < 1e-6);
}

#[test]
fn test_swimming_mean_speed_zero_duration() {
    assert!(swimming_mean_speed(25, 40, 0.0).abs() < EPS);
}

// ============================================================================
// CALORIES
// ============================================================================

#[test]
fn test_running_calories_reference() {
    // mean speed 6.5 km/h: (18 * 6.5 + 1.79) * 80 * 0.5 * 60
    let kcal = running_calories(5000, 80.0, 0.5);
    assert!((kcal - 285_096.0).abs() < 1e-6);
}

#[test]
fn test_walking_calories_reference() {
    let kcal = walking_calories(5000, 0.5, 80.0, 180.0);
    assert!((kcal - 85.260_545_267).abs() < 1e-6);
}

#[test]
fn test_walking_does_not_use_shared_mean_speed() {
    // Walking squares a m/s speed; substituting km/h would change the result
    let actions = 5000;
    let duration = 0.5;
    let kmh = mean_speed(actions, duration);
    let with_kmh = (0.035 * 80.0 + (kmh * kmh) / 180.0 * 0.029 * 80.0) * duration * 60.0;

    let kcal = walking_calories(actions, duration, 80.0, 180.0);
    assert!((kcal - with_kmh).abs() > 1.0);
}

#[test]
fn test_swimming_calories_reference() {
    let kcal = swimming_calories(50, 20, 0.75, 65.0);
    assert!((kcal - 237.25).abs() < 1e-6);
}

#[test]
fn test_all_calorie_models_zero_for_non_positive_duration() {
    for duration in [0.0, -0.01, -3.0] {
        assert!(running_calories(1000, 70.0, duration).abs() < EPS);
        assert!(walking_calories(1000, duration, 70.0, 170.0).abs() < EPS);
        assert!(swimming_calories(25, 40, duration, 70.0).abs() < EPS);
    }
}

#[test]
fn test_formulas_are_idempotent() {
    assert!(
        (running_calories(7777, 64.5, 1.25) - running_calories(7777, 64.5, 1.25)).abs()
            < f64::EPSILON
    );
    assert!(
        (walking_calories(7777, 1.25, 64.5, 165.0) - walking_calories(7777, 1.25, 64.5, 165.0))
            .abs()
            < f64::EPSILON
    );
    assert!(
        (swimming_calories(33, 12, 1.25, 64.5) - swimming_calories(33, 12, 1.25, 64.5)).abs()
            < f64::EPSILON
    );
}
