// ABOUTME: Output format abstraction for workout summaries
// ABOUTME: Supports the fixed text layout, JSON, and TOON (token-efficient for LLMs)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! The text format is the fixed five-line layout consumers parse. JSON and
//! TOON serialize the same [`TrainingSummary`] as structured data.
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, fixed-layout human-readable summary
//! - **JSON**: Universal structured format
//! - **TOON**: Token-efficient format optimized for LLM input (feature `toon`)

use ftracker_core::errors::AppError;
use ftracker_core::models::Locale;
use ftracker_intelligence::TrainingSummary;
use serde::Serialize;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-layout text (default)
    #[default]
    Text,
    /// JSON format - universal compatibility
    Json,
    /// TOON format - Token-Oriented Object Notation for LLM efficiency
    Toon,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    ///
    /// Returns `None` for unrecognized values.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            "toon" => Some(Self::Toon),
            _ => None,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Serialized view of a summary with its locale-specific label
#[derive(Debug, Serialize)]
struct SummaryView<'a> {
    #[serde(flatten)]
    summary: &'a TrainingSummary,
    label: &'static str,
    locale: Locale,
}

/// Format a training summary in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON or TOON serialization fails, or if TOON is
/// requested while the `toon` feature is disabled.
pub fn format_summary(
    summary: &TrainingSummary,
    format: OutputFormat,
    locale: Locale,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => summary.render(locale),
        OutputFormat::Json | OutputFormat::Toon => format_data(
            &SummaryView {
                summary,
                label: summary.training_type.label(locale),
                locale,
            },
            format,
        )?,
    };

    Ok(FormattedOutput { data, format })
}

/// Serialize arbitrary data as JSON or TOON
///
/// # Errors
///
/// Returns `FormatError` on serialization failure or for the text format,
/// which only applies to summaries.
pub fn format_data<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Err(FormatError {
            message: "text layout is only defined for training summaries".to_owned(),
            format,
        }),
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        }),
        OutputFormat::Toon => encode_toon(data),
    }
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    let format = OutputFormat::Toon;
    // Convert to serde_json::Value first, then to TOON
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_data: &T) -> Result<String, FormatError> {
    Err(FormatError {
        message: "TOON output requires the `toon` feature".to_owned(),
        format: OutputFormat::Toon,
    })
}
