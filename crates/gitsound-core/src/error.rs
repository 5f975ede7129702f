//! Error types for configuration validation.

use thiserror::Error;

/// Error codes for song-configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Branch name is empty
    EmptyBranch,
    /// E002: Unknown scale id
    UnknownScale,
    /// E003: Unknown instrument program id
    UnknownProgram,
    /// E004: Note duration is not a positive, finite number
    InvalidNoteDuration,
    /// E005: Tempo out of range
    TempoOutOfRange,
    /// E006: Volume range out of range
    VolumeRangeOutOfRange,
    /// E007: Scale has no pitches
    EmptyScale,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::EmptyBranch => "E001",
            ErrorCode::UnknownScale => "E002",
            ErrorCode::UnknownProgram => "E003",
            ErrorCode::InvalidNoteDuration => "E004",
            ErrorCode::TempoOutOfRange => "E005",
            ErrorCode::VolumeRangeOutOfRange => "E006",
            ErrorCode::EmptyScale => "E007",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result of configuration validation.
///
/// All checks run before any repository access; generation never starts
/// from an invalid configuration.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors; empty means the configuration is valid.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates an empty (successful) validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, code: ErrorCode, message: impl Into<String>) {
        self.errors.push(ValidationError::new(code, message));
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts to a `Result`, returning the first error's worth of context.
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(self.errors))
        }
    }
}

/// Top-level error type for configuration handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Validation failed with one or more coded errors.
    #[error("invalid configuration: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),

    /// A scale was constructed with no pitches.
    #[error("scale '{0}' has no pitches")]
    EmptyScale(String),

    /// JSON parsing error while loading a configuration file.
    #[error("config parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error while loading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
