//! Recovery of structured records from free-form model output.
//!
//! [`recover`] slices the outermost `{ ... }` out of the text, drops code
//! fence markers, and then runs one lenient parse against progressively more
//! aggressively repaired versions of that slice:
//!
//! 1. the cleaned slice as-is
//! 2. raw newlines inside strings escaped
//! 3. invalid backslash escapes doubled
//! 4. leftover control characters escaped or removed
//!
//! The first successful parse wins. When all four fail the error carries the
//! last parse message and the fully repaired text.

pub mod lenient;
mod scanner;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    #[error("No JSON object found in model output")]
    NoJsonBoundaryFound,

    /// `sanitized` is kept for server-side diagnostics and is not part of the
    /// display message.
    #[error("Failed to parse JSON: {message}")]
    UnrecoverableJson { message: String, sanitized: String },

    #[error("Model output did not match the expected shape: {0}")]
    ShapeMismatch(String),
}

impl RecoveryError {
    pub fn kind(&self) -> &'static str {
        match self {
            RecoveryError::NoJsonBoundaryFound => "no_json_boundary",
            RecoveryError::UnrecoverableJson { .. } => "unrecoverable_json",
            RecoveryError::ShapeMismatch(_) => "shape_mismatch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepairStage {
    EscapeNewlines,
    DoubleInvalidBackslashes,
    StripControlCharacters,
}

impl RepairStage {
    const LADDER: [RepairStage; 3] = [
        RepairStage::EscapeNewlines,
        RepairStage::DoubleInvalidBackslashes,
        RepairStage::StripControlCharacters,
    ];

    fn name(self) -> &'static str {
        match self {
            RepairStage::EscapeNewlines => "newline normalization",
            RepairStage::DoubleInvalidBackslashes => "escape repair",
            RepairStage::StripControlCharacters => "control character stripping",
        }
    }

    fn apply(self, text: &str) -> String {
        match self {
            RepairStage::EscapeNewlines => scanner::escape_raw_newlines(text),
            RepairStage::DoubleInvalidBackslashes => scanner::double_invalid_backslashes(text),
            RepairStage::StripControlCharacters => scanner::strip_control_characters(text),
        }
    }
}

/// Recovers a JSON object from raw model output.
pub fn recover(raw: &str) -> Result<Value, RecoveryError> {
    let candidate = strip_fences(extract_object_span(raw)?);

    let mut last_error = match lenient::parse(&candidate) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    log::debug!("Lenient parse of model output failed: {}", last_error);

    let mut text = candidate;
    for stage in RepairStage::LADDER {
        text = stage.apply(&text);
        match lenient::parse(&text) {
            Ok(value) => {
                log::debug!("Model output recovered after {}", stage.name());
                return Ok(value);
            }
            Err(err) => {
                log::debug!("Parse after {} failed: {}", stage.name(), err);
                last_error = err;
            }
        }
    }

    Err(RecoveryError::UnrecoverableJson {
        message: last_error.to_string(),
        sanitized: text,
    })
}

/// Recovers a JSON object and deserializes it into `T`.
pub fn recover_record<T: DeserializeOwned>(raw: &str) -> Result<T, RecoveryError> {
    let value = recover(raw)?;
    serde_json::from_value(value).map_err(|e| RecoveryError::ShapeMismatch(e.to_string()))
}

fn extract_object_span(raw: &str) -> Result<&str, RecoveryError> {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start <= end => Ok(&raw[start..=end]),
        _ => Err(RecoveryError::NoJsonBoundaryFound),
    }
}

// Blind substitution: a string value that itself contains a fence marker
// loses it.
fn strip_fences(span: &str) -> String {
    span.replace(JSON_FENCE, "").replace(FENCE, "")
}
