// ABOUTME: Training type enumeration and label locales for workout summaries
// ABOUTME: Exact label lookup for summary dispatch plus lenient parsing for CLI input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

/// Language of the literal labels used in summaries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English labels (`Running`, `Walking`, `Swimming`)
    #[default]
    En,
    /// Russian labels (`Бег`, `Ходьба`, `Плавание`)
    Ru,
}

impl Locale {
    /// All supported locales
    pub const ALL: [Self; 2] = [Self::En, Self::Ru];

    /// Short code used in configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ru" | "russian" => Ok(Self::Ru),
            other => Err(AppError::invalid_input(format!("unsupported locale '{other}'"))
                .with_field("locale")),
        }
    }
}

/// The closed set of training types the calculator understands
///
/// Each variant selects a distinct speed and calorie formula. Unknown labels
/// never reach the formulas: they are rejected while resolving the type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    /// Running, measured in steps
    Running,
    /// Walking, measured in steps
    Walking,
    /// Pool swimming, measured in strokes and laps
    Swimming,
}

impl TrainingType {
    /// All training types in display order
    pub const ALL: [Self; 3] = [Self::Running, Self::Walking, Self::Swimming];

    /// Literal label for this training type in the given locale
    #[must_use]
    pub const fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Running, Locale::En) => "Running",
            (Self::Walking, Locale::En) => "Walking",
            (Self::Swimming, Locale::En) => "Swimming",
            (Self::Running, Locale::Ru) => "Бег",
            (Self::Walking, Locale::Ru) => "Ходьба",
            (Self::Swimming, Locale::Ru) => "Плавание",
        }
    }

    /// Resolve an exact literal label, reporting which locale it belongs to
    ///
    /// Matching is case-sensitive and does not trim whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Option<(Self, Locale)> {
        Locale::ALL.into_iter().find_map(|locale| {
            Self::ALL
                .into_iter()
                .find(|training_type| training_type.label(locale) == label)
                .map(|training_type| (training_type, locale))
        })
    }

    /// Internal snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Walking => "walking",
            Self::Swimming => "swimming",
        }
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingType {
    type Err = AppError;

    /// Lenient parse for user input: accepts any locale's label in any case,
    /// the snake-case name, and short aliases
    fn from_str(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if let Some((training_type, _)) = Self::from_label(trimmed) {
            return Ok(training_type);
        }

        let lowered = trimmed.to_lowercase();
        match lowered.as_str() {
            "running" | "run" => return Ok(Self::Running),
            "walking" | "walk" => return Ok(Self::Walking),
            "swimming" | "swim" => return Ok(Self::Swimming),
            _ => {}
        }

        Locale::ALL
            .into_iter()
            .flat_map(|locale| Self::ALL.into_iter().map(move |t| (t, t.label(locale))))
            .find(|(_, label)| label.to_lowercase() == lowered)
            .map(|(training_type, _)| training_type)
            .ok_or_else(|| AppError::unknown_training_type(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(
            TrainingType::from_label("Running"),
            Some((TrainingType::Running, Locale::En))
        );
        assert_eq!(
            TrainingType::from_label("Плавание"),
            Some((TrainingType::Swimming, Locale::Ru))
        );
        assert_eq!(TrainingType::from_label("running"), None);
        assert_eq!(TrainingType::from_label(" Walking"), None);
    }

    #[test]
    fn test_labels_round_trip_through_from_label() {
        for locale in Locale::ALL {
            for training_type in TrainingType::ALL {
                let label = training_type.label(locale);
                assert_eq!(
                    TrainingType::from_label(label),
                    Some((training_type, locale))
                );
            }
        }
    }

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("run".parse::<TrainingType>().ok(), Some(TrainingType::Running));
        assert_eq!(" WALKING ".parse::<TrainingType>().ok(), Some(TrainingType::Walking));
        assert_eq!("ПЛАВАНИЕ".parse::<TrainingType>().ok(), Some(TrainingType::Swimming));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let error = "Cycling".parse::<TrainingType>().unwrap_err();
        assert_eq!(error.code, ErrorCode::UnknownTrainingType);
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("RU".parse::<Locale>().ok(), Some(Locale::Ru));
        assert!("fr".parse::<Locale>().is_err());
    }
}
