//! Instrument profiles and the built-in program registry.
//!
//! A profile pairs a commit voice with a file voice. Either voice can be
//! silenced by leaving its General MIDI program unset; a silenced voice
//! produces no events at all.

use serde::{Deserialize, Serialize};

/// Settings for one of the two voices in a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceProfile {
    /// General MIDI program number (0-127); `None` silences the voice.
    pub program: Option<u8>,
    /// Octave shift applied to every note of this voice.
    pub octave: i8,
    /// Loudness offset applied before clamping.
    #[serde(default)]
    pub volume: i32,
}

impl VoiceProfile {
    /// Creates a sounding voice.
    pub fn new(program: u8, octave: i8) -> Self {
        Self {
            program: Some(program),
            octave,
            volume: 0,
        }
    }

    /// Creates a silenced voice.
    pub fn muted() -> Self {
        Self {
            program: None,
            octave: 0,
            volume: 0,
        }
    }

    /// Whether this voice emits events.
    pub fn enabled(&self) -> bool {
        self.program.is_some()
    }
}

/// An instrument profile: one voice per commit, one voice per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstrumentProfile {
    /// Voice playing one note per commit.
    pub commit: VoiceProfile,
    /// Voice playing one note per changed file.
    pub file: VoiceProfile,
}

/// A named built-in profile.
#[derive(Debug, Clone)]
pub struct NamedProfile {
    /// Stable identifier used in configuration (e.g., "sitar").
    pub id: String,
    /// Display name for CLI listings.
    pub name: String,
    /// The profile itself.
    pub profile: InstrumentProfile,
}

/// Immutable registry of the built-in instrument profiles.
#[derive(Debug, Clone)]
pub struct ProgramRegistry {
    profiles: Vec<NamedProfile>,
}

impl ProgramRegistry {
    /// The profile used when the configuration does not name one.
    pub const DEFAULT_ID: &'static str = "sitar";

    /// Builds the registry of built-in profiles.
    pub fn builtin() -> Self {
        let entry = |id: &str, name: &str, commit: VoiceProfile, file: VoiceProfile| NamedProfile {
            id: id.to_string(),
            name: name.to_string(),
            profile: InstrumentProfile { commit, file },
        };
        let profiles = vec![
            entry(
                "sitar",
                "Sitar and woodblock",
                VoiceProfile::new(104, -2),
                VoiceProfile::new(115, -1),
            ),
            entry(
                "piano",
                "Grand piano and celesta",
                VoiceProfile::new(0, -1),
                VoiceProfile::new(8, 0),
            ),
            entry(
                "strings",
                "Cello and pizzicato strings",
                VoiceProfile::new(42, -2),
                VoiceProfile::new(45, -1),
            ),
            entry(
                "organ",
                "Church organ and music box",
                VoiceProfile::new(19, -2),
                VoiceProfile::new(10, -1),
            ),
            entry(
                "commit-only",
                "Sitar, files muted",
                VoiceProfile::new(104, -2),
                VoiceProfile::muted(),
            ),
        ];
        Self { profiles }
    }

    /// Looks up a profile by id.
    pub fn get(&self, id: &str) -> Option<&NamedProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Iterates the profiles in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedProfile> {
        self.profiles.iter()
    }
}
