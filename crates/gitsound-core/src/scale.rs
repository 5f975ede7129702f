//! Scales and the built-in scale registry.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A musical scale: an ordered list of MIDI pitches spanning one octave.
///
/// Pitches are base values before the per-voice octave shift is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    /// Stable identifier used in configuration (e.g., "major").
    pub id: String,
    /// Display name for CLI listings.
    pub name: String,
    pitches: Vec<i32>,
}

impl Scale {
    /// Creates a scale, rejecting an empty pitch list.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pitches: Vec<i32>,
    ) -> Result<Self, ConfigError> {
        let id = id.into();
        if pitches.is_empty() {
            return Err(ConfigError::EmptyScale(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            pitches,
        })
    }

    /// The scale's pitches; never empty.
    pub fn pitches(&self) -> &[i32] {
        &self.pitches
    }
}

/// Immutable registry of the built-in scales.
#[derive(Debug, Clone)]
pub struct ScaleRegistry {
    scales: Vec<Scale>,
}

impl ScaleRegistry {
    /// The scale used when the configuration does not name one.
    pub const DEFAULT_ID: &'static str = "ab-major";

    /// Builds the registry of built-in scales.
    pub fn builtin() -> Self {
        // Pitch lists are validated at construction; a panic here would
        // mean a broken built-in table, caught by tests.
        let table: &[(&str, &str, &[i32])] = &[
            ("ab-major", "A-flat major", &[68, 69, 71, 72, 74, 76, 77]),
            ("major", "C major", &[60, 62, 64, 65, 67, 69, 71]),
            ("minor", "C natural minor", &[60, 62, 63, 65, 67, 68, 70]),
            ("pentatonic", "C major pentatonic", &[60, 62, 64, 67, 69]),
            ("blues", "C blues", &[60, 63, 65, 66, 67, 70]),
            (
                "chromatic",
                "Chromatic",
                &[60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71],
            ),
        ];
        let scales = table
            .iter()
            .filter_map(|(id, name, pitches)| Scale::new(*id, *name, pitches.to_vec()).ok())
            .collect();
        Self { scales }
    }

    /// Looks up a scale by id.
    pub fn get(&self, id: &str) -> Option<&Scale> {
        self.scales.iter().find(|s| s.id == id)
    }

    /// Iterates the scales in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &Scale> {
        self.scales.iter()
    }
}
