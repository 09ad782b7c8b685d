// ABOUTME: Environment configuration for summary locale and output format
// ABOUTME: Reads FTRACKER_LOCALE and FTRACKER_OUTPUT_FORMAT with strict parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use ftracker_core::errors::{AppError, AppResult};
use ftracker_core::models::Locale;
use std::env;
use tracing::debug;

use crate::formatters::OutputFormat;

/// Environment variable selecting the label locale
pub const LOCALE_ENV: &str = "FTRACKER_LOCALE";

/// Environment variable selecting the output format
pub const OUTPUT_FORMAT_ENV: &str = "FTRACKER_OUTPUT_FORMAT";

/// Runtime settings for rendering summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerConfig {
    /// Locale of labels in text and structured output
    pub locale: Locale,
    /// Output format written by the CLI
    pub output_format: OutputFormat,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults (`en`, `text`).
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if a variable is set to an
    /// unsupported value.
    pub fn from_env() -> AppResult<Self> {
        let locale = match env::var(LOCALE_ENV) {
            Ok(value) => value
                .parse::<Locale>()
                .map_err(|_| AppError::config_invalid(LOCALE_ENV, &value))?,
            Err(_) => Locale::default(),
        };

        let output_format = match env::var(OUTPUT_FORMAT_ENV) {
            Ok(value) => OutputFormat::from_str_param(&value)
                .ok_or_else(|| AppError::config_invalid(OUTPUT_FORMAT_ENV, &value))?,
            Err(_) => OutputFormat::default(),
        };

        let config = Self {
            locale,
            output_format,
        };
        debug!(
            config.locale = %config.locale,
            config.output_format = %config.output_format,
            "Loaded tracker configuration"
        );
        Ok(config)
    }

    /// Apply command-line overrides on top of the environment values
    #[must_use]
    pub fn with_overrides(
        mut self,
        locale: Option<Locale>,
        output_format: Option<OutputFormat>,
    ) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        if let Some(output_format) = output_format {
            self.output_format = output_format;
        }
        self
    }
}
