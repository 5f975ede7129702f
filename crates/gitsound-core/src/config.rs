//! Song configuration and validation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ErrorCode, ValidationResult};
use crate::profile::ProgramRegistry;
use crate::scale::ScaleRegistry;

/// Everything needed to turn one branch of one repository into a song.
///
/// Deserializes from JSON with every field optional; missing fields take
/// the documented defaults. Unknown fields are rejected so typos surface
/// as parse errors instead of silently falling back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SongConfig {
    /// Path to the repository to sonify.
    pub repository: PathBuf,
    /// Branch whose history is traversed.
    pub branch: String,
    /// Id of the scale to play on (see [`ScaleRegistry`]).
    pub scale: String,
    /// Id of the instrument profile (see [`ProgramRegistry`]).
    pub program: String,
    /// Loudness range setting the clamp deviation; 0-127.
    pub volume_range: u8,
    /// Number of oldest commits to skip.
    pub skip: usize,
    /// Duration of one file note in beats; must be positive and finite.
    pub note_duration: f64,
    /// Cap on files-per-commit; `None` or `Some(0)` means unlimited.
    pub max_beat_len: Option<usize>,
    /// Tempo in beats per minute; 1-960.
    pub tempo: u16,
}

impl Default for SongConfig {
    fn default() -> Self {
        Self {
            repository: PathBuf::from("."),
            branch: "master".to_string(),
            scale: ScaleRegistry::DEFAULT_ID.to_string(),
            program: ProgramRegistry::DEFAULT_ID.to_string(),
            volume_range: 107,
            skip: 0,
            note_duration: 0.3,
            max_beat_len: None,
            tempo: 120,
        }
    }
}

impl SongConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The effective files-per-commit cap; treats `Some(0)` as unlimited.
    pub fn beat_cap(&self) -> Option<usize> {
        match self.max_beat_len {
            Some(0) | None => None,
            cap => cap,
        }
    }

    /// Validates the configuration against the given registries.
    ///
    /// Collects every failure rather than stopping at the first, so a
    /// user can fix a config file in one pass.
    pub fn validate(&self, scales: &ScaleRegistry, programs: &ProgramRegistry) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.branch.is_empty() {
            result.add_error(ErrorCode::EmptyBranch, "branch name is empty");
        }
        if scales.get(&self.scale).is_none() {
            result.add_error(
                ErrorCode::UnknownScale,
                format!("unknown scale '{}'", self.scale),
            );
        }
        if programs.get(&self.program).is_none() {
            result.add_error(
                ErrorCode::UnknownProgram,
                format!("unknown program '{}'", self.program),
            );
        }
        if !self.note_duration.is_finite() || self.note_duration <= 0.0 {
            result.add_error(
                ErrorCode::InvalidNoteDuration,
                format!(
                    "note duration must be a positive number, got {}",
                    self.note_duration
                ),
            );
        }
        if self.tempo == 0 || self.tempo > 960 {
            result.add_error(
                ErrorCode::TempoOutOfRange,
                format!("tempo must be 1-960 BPM, got {}", self.tempo),
            );
        }
        if self.volume_range > 127 {
            result.add_error(
                ErrorCode::VolumeRangeOutOfRange,
                format!("volume range must be 0-127, got {}", self.volume_range),
            );
        }

        result
    }
}
