// ABOUTME: Per-training-type metric dispatch and fixed-layout summary rendering
// ABOUTME: Typed entry point plus a label-based entry point that keeps the legacy sentinel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout summaries
//!
//! [`TrainingSummary::compute`] selects the formula set with an exhaustive
//! match on [`TrainingType`]. The label-based [`show_training_info`] exists
//! for consumers that still pass free-form labels and compare against
//! [`UNKNOWN_TRAINING_TYPE`]; new callers should use [`try_show_training_info`]
//! or the typed API.
//!
//! The text layout is fixed: five newline-terminated lines, every number with
//! two decimals. Label text and field order must not change.

use ftracker_core::errors::{AppError, AppResult};
use ftracker_core::models::{Locale, TrainingType, Workout};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::{debug, warn};

use crate::calories::{running_calories, swimming_calories, walking_calories};
use crate::metrics::{distance, mean_speed, swimming_mean_speed};

/// Sentinel returned by [`show_training_info`] for an unrecognized label
pub const UNKNOWN_TRAINING_TYPE: &str = "unknown training type";

/// Russian counterpart of [`UNKNOWN_TRAINING_TYPE`]
pub const UNKNOWN_TRAINING_TYPE_RU: &str = "неизвестный тип тренировки";

/// Field captions of the text layout for one locale
struct Captions {
    training_type: &'static str,
    duration: &'static str,
    hours: &'static str,
    distance: &'static str,
    km: &'static str,
    speed: &'static str,
    kmh: &'static str,
    calories: &'static str,
}

const fn captions(locale: Locale) -> Captions {
    match locale {
        Locale::En => Captions {
            training_type: "Training type",
            duration: "Duration",
            hours: "h.",
            distance: "Distance",
            km: "km.",
            speed: "Speed",
            kmh: "km/h",
            calories: "Calories burned",
        },
        Locale::Ru => Captions {
            training_type: "Тип тренировки",
            duration: "Длительность",
            hours: "ч.",
            distance: "Дистанция",
            km: "км.",
            speed: "Скорость",
            kmh: "км/ч",
            calories: "Сожгли калорий",
        },
    }
}

/// Sentinel text for an unknown label in the given locale
#[must_use]
pub const fn unknown_training_type(locale: Locale) -> &'static str {
    match locale {
        Locale::En => UNKNOWN_TRAINING_TYPE,
        Locale::Ru => UNKNOWN_TRAINING_TYPE_RU,
    }
}

/// Derived metrics of one workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Training type the metrics were computed for
    pub training_type: TrainingType,
    /// Session length in hours, as given
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub speed_kmh: f64,
    /// Calories burned in kcal
    pub calories_kcal: f64,
}

impl TrainingSummary {
    /// Compute distance, speed, and calories with the formula set of `training_type`
    ///
    /// Swimming distance still comes from the stroke count; only its speed and
    /// calories use pool geometry.
    #[must_use]
    pub fn compute(training_type: TrainingType, workout: &Workout) -> Self {
        let Workout {
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
            pool_length_m,
            pool_laps,
        } = *workout;

        let (speed_kmh, calories_kcal) = match training_type {
            TrainingType::Running => (
                mean_speed(action_count, duration_hours),
                running_calories(action_count, weight_kg, duration_hours),
            ),
            TrainingType::Walking => (
                mean_speed(action_count, duration_hours),
                walking_calories(action_count, duration_hours, weight_kg, height_cm),
            ),
            TrainingType::Swimming => (
                swimming_mean_speed(pool_length_m, pool_laps, duration_hours),
                swimming_calories(pool_length_m, pool_laps, duration_hours, weight_kg),
            ),
        };

        let summary = Self {
            training_type,
            duration_hours,
            distance_km: distance(action_count),
            speed_kmh,
            calories_kcal,
        };

        debug!(
            training.type = %training_type,
            training.distance_km = summary.distance_km,
            training.speed_kmh = summary.speed_kmh,
            training.calories_kcal = summary.calories_kcal,
            "Computed training summary"
        );

        summary
    }

    /// Render the fixed-layout text summary
    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        let c = captions(locale);
        let mut out = String::with_capacity(128);
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "{}: {}\n{}: {:.2} {}\n{}: {:.2} {}\n{}: {:.2} {}\n{}: {:.2}\n",
            c.training_type,
            self.training_type.label(locale),
            c.duration,
            self.duration_hours,
            c.hours,
            c.distance,
            self.distance_km,
            c.km,
            c.speed,
            self.speed_kmh,
            c.kmh,
            c.calories,
            self.calories_kcal,
        );
        out
    }
}

/// Compute and render a summary for a known training type
#[must_use]
pub fn render_summary(training_type: TrainingType, workout: &Workout, locale: Locale) -> String {
    TrainingSummary::compute(training_type, workout).render(locale)
}

/// Render a summary from a literal training type label
///
/// The label must match exactly (`Running`, `Walking`, `Swimming`, or the
/// Russian labels). The summary uses the locale the label belongs to.
///
/// # Errors
///
/// Returns `ErrorCode::UnknownTrainingType` if the label matches nothing.
#[allow(clippy::too_many_arguments)]
pub fn try_show_training_info(
    action_count: u32,
    training_type: &str,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
    pool_length_m: u32,
    pool_laps: u32,
) -> AppResult<String> {
    let Some((kind, locale)) = TrainingType::from_label(training_type) else {
        warn!(training.label = %training_type, "Unknown training type label");
        return Err(AppError::unknown_training_type(training_type));
    };

    let workout = Workout::new(action_count, duration_hours, weight_kg)
        .height_cm(height_cm)
        .pool_length_m(pool_length_m)
        .pool_laps(pool_laps);

    Ok(render_summary(kind, &workout, locale))
}

/// Render a summary from a literal training type label, or the sentinel
///
/// Unrecognized labels return [`UNKNOWN_TRAINING_TYPE`] instead of a summary;
/// callers detect the failure by comparing strings.
///
/// The sentinel is always the English one: an unrecognized label carries no
/// locale. Use [`unknown_training_type`] with [`Locale::Ru`] to get
/// [`UNKNOWN_TRAINING_TYPE_RU`], as the CLI does in text mode.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn show_training_info(
    action_count: u32,
    training_type: &str,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
    pool_length_m: u32,
    pool_laps: u32,
) -> String {
    try_show_training_info(
        action_count,
        training_type,
        duration_hours,
        weight_kg,
        height_cm,
        pool_length_m,
        pool_laps,
    )
    .unwrap_or_else(|_| UNKNOWN_TRAINING_TYPE.to_owned())
}
