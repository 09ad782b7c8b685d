// ABOUTME: Workout record holding the raw counters of a single training session
// ABOUTME: Builder-style setters for the walking- and swimming-only fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Raw counters of one training session
///
/// Values are taken as given. Only the duration is guarded, and only by the
/// formulas themselves, which return zero for a non-positive duration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Workout {
    /// Number of actions: steps when running or walking, strokes when swimming
    pub action_count: u32,
    /// Session length in hours
    pub duration_hours: f64,
    /// Athlete body mass in kilograms
    pub weight_kg: f64,
    /// Athlete height in centimeters (walking only)
    #[serde(default)]
    pub height_cm: f64,
    /// Pool length in meters (swimming only)
    #[serde(default)]
    pub pool_length_m: u32,
    /// Number of pool lengths swum (swimming only)
    #[serde(default)]
    pub pool_laps: u32,
}

impl Workout {
    /// Create a workout with the fields every training type needs
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            height_cm: 0.0,
            pool_length_m: 0,
            pool_laps: 0,
        }
    }

    /// Set athlete height in centimeters
    #[must_use]
    pub const fn height_cm(mut self, height_cm: f64) -> Self {
        self.height_cm = height_cm;
        self
    }

    /// Set pool length in meters
    #[must_use]
    pub const fn pool_length_m(mut self, pool_length_m: u32) -> Self {
        self.pool_length_m = pool_length_m;
        self
    }

    /// Set the number of pool lengths swum
    #[must_use]
    pub const fn pool_laps(mut self, pool_laps: u32) -> Self {
        self.pool_laps = pool_laps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_optional_fields() {
        let workout = Workout::new(1200, 0.75, 68.0)
            .height_cm(172.0)
            .pool_length_m(25)
            .pool_laps(40);

        assert_eq!(workout.action_count, 1200);
        assert!((workout.height_cm - 172.0).abs() < f64::EPSILON);
        assert_eq!(workout.pool_length_m, 25);
        assert_eq!(workout.pool_laps, 40);
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let workout: Workout = serde_json::from_str(
            r#"{"action_count": 900, "duration_hours": 0.5, "weight_kg": 60.0}"#,
        )
        .unwrap();

        assert_eq!(workout, Workout::new(900, 0.5, 60.0));
    }
}
