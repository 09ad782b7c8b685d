// ABOUTME: Tests for summary output formats (text, JSON, TOON)
// ABOUTME: Validates the format tag, structured fields, and format parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ftracker::{
    formatters::{format_data, format_summary, OutputFormat},
    models::{Locale, TrainingType, Workout},
    TrainingSummary,
};

fn running_summary() -> TrainingSummary {
    TrainingSummary::compute(TrainingType::Running, &Workout::new(1000, 1.0, 70.0))
}

#[test]
fn test_output_format_parsing() {
    assert_eq!(OutputFormat::from_str_param("TEXT"), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::from_str_param("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_str_param(" toon "), Some(OutputFormat::Toon));
    assert_eq!(OutputFormat::from_str_param("yaml"), None);
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn test_text_format_matches_render() {
    let summary = running_summary();
    let output = format_summary(&summary, OutputFormat::Text, Locale::En).unwrap();

    assert_eq!(output.data, summary.render(Locale::En));
    assert_eq!(output.format, OutputFormat::Text);
}

#[test]
fn test_json_format_fields() {
    let summary = running_summary();
    let output = format_summary(&summary, OutputFormat::Json, Locale::Ru).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();

    assert_eq!(output.format, OutputFormat::Json);
    assert_eq!(value["training_type"], "running");
    assert_eq!(value["label"], "Бег");
    assert_eq!(value["locale"], "ru");
    assert!((value["distance_km"].as_f64().unwrap() - 0.65).abs() < 1e-12);
    assert!((value["calories_kcal"].as_f64().unwrap() - 56_658.0).abs() < 1e-6);
}

#[test]
fn test_format_data_rejects_text() {
    let error = format_data(&running_summary(), OutputFormat::Text).unwrap_err();
    assert_eq!(error.format, OutputFormat::Text);
}

#[cfg(feature = "toon")]
#[test]
fn test_toon_format_contains_fields() {
    let output = format_summary(&running_summary(), OutputFormat::Toon, Locale::En).unwrap();

    assert_eq!(output.format, OutputFormat::Toon);
    assert!(output.data.contains("training_type"));
    assert!(output.data.contains("Running"));
}
