//! Beat generation: one commit becomes one beat.
//!
//! A beat carries a note for the commit itself plus one note per changed
//! file. Pitches come from object ids, loudness from line statistics;
//! both mappings live in `gitsound_core`.

use git2::Commit;
use gitsound_core::profile::InstrumentProfile;
use gitsound_core::scale::Scale;
use gitsound_core::{pitch, volume};

use crate::error::EngineError;
use crate::repo::GitRepository;

/// A single note within a beat's file voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileNote {
    /// MIDI note number (pre-clamp; can exceed 0-127 for extreme octaves).
    pub note: i32,
    /// Clamped MIDI velocity.
    pub volume: u8,
}

/// Everything one commit contributes to the song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beat {
    /// Hex id of the commit, kept for progress output and debugging.
    pub commit_id: String,
    /// Note played by the commit voice.
    pub commit_note: i32,
    /// Velocity of the commit voice's note.
    pub commit_volume: u8,
    /// One note per changed file, in diff order, possibly capped.
    pub files: Vec<FileNote>,
}

/// Turns commits into beats under a fixed scale and instrument profile.
pub struct BeatGenerator<'a> {
    scale: &'a Scale,
    profile: InstrumentProfile,
    file_deviation: u8,
    commit_deviation: u8,
    cap: Option<usize>,
}

impl<'a> BeatGenerator<'a> {
    /// Creates a generator.
    ///
    /// `cap`, when set, limits how many file notes a beat may carry; the
    /// commit voice still reflects the full diff's totals.
    pub fn new(
        scale: &'a Scale,
        profile: InstrumentProfile,
        volume_range: u8,
        cap: Option<usize>,
    ) -> Self {
        let file_deviation = volume::deviation(volume_range);
        Self {
            scale,
            profile,
            file_deviation,
            commit_deviation: volume::commit_deviation(file_deviation),
            cap,
        }
    }

    /// Generates the beat for one commit.
    pub fn beat(&self, repo: &GitRepository, commit: &Commit<'_>) -> Result<Beat, EngineError> {
        let (mut changes, totals) = repo.change_stats(commit)?;
        if let Some(cap) = self.cap {
            changes.truncate(cap);
        }

        let files = changes
            .iter()
            .map(|change| {
                let blob_id = repo.resolve_blob_id(commit, &change.path);
                FileNote {
                    note: pitch::scale_note(self.scale, &blob_id, self.profile.file.octave),
                    volume: volume::volume(
                        change.deletions,
                        change.insertions,
                        self.profile.file.volume,
                        self.file_deviation,
                    ),
                }
            })
            .collect();

        let commit_id = commit.id().to_string();
        Ok(Beat {
            commit_note: pitch::scale_note(self.scale, &commit_id, self.profile.commit.octave),
            commit_volume: volume::volume(
                totals.deletions,
                totals.insertions,
                self.profile.commit.volume,
                self.commit_deviation,
            ),
            commit_id,
            files,
        })
    }
}
