//! The engine facade tying traversal, beat generation, assembly, and
//! export together behind one handle.

use std::path::Path;

use gitsound_core::profile::InstrumentProfile;
use gitsound_core::scale::Scale;
use gitsound_core::SongConfig;

use crate::beat::{Beat, BeatGenerator};
use crate::error::EngineError;
use crate::history::collect_history;
use crate::midi;
use crate::repo::GitRepository;
use crate::sequence::{self, NoteEvent};

/// Progress reported during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A commit was visited during traversal; carries the running count.
    Visited(usize),
    /// A beat was generated or assembled; carries (current, total).
    Beat {
        /// 1-based index of the beat just processed.
        current: usize,
        /// Total number of beats.
        total: usize,
    },
}

/// Generates a song from one branch of one repository.
///
/// The beat list is computed once and cached; regeneration must be
/// requested explicitly. The expensive repository walk therefore runs a
/// single time even when a caller exports several times.
pub struct SoundEngine {
    config: SongConfig,
    scale: Scale,
    profile: InstrumentProfile,
    repo: GitRepository,
    beats: Option<Vec<Beat>>,
}

impl SoundEngine {
    /// Opens the configured repository and prepares an engine.
    ///
    /// The configuration must already be validated; `scale` and `profile`
    /// are the resolved registry entries it named.
    pub fn open(
        config: SongConfig,
        scale: Scale,
        profile: InstrumentProfile,
    ) -> Result<Self, EngineError> {
        let repo = GitRepository::open(&config.repository)?;
        Ok(Self {
            config,
            scale,
            profile,
            repo,
            beats: None,
        })
    }

    /// The configuration this engine was opened with.
    pub fn config(&self) -> &SongConfig {
        &self.config
    }

    /// Generates (or returns the cached) beat list.
    ///
    /// With `force` set, drops the cache and walks the repository again.
    pub fn gen_beats(
        &mut self,
        force: bool,
        mut progress: impl FnMut(Progress),
    ) -> Result<&[Beat], EngineError> {
        if force {
            self.beats = None;
        }
        if self.beats.is_none() {
            let ids = collect_history(&self.repo, &self.config.branch, self.config.skip, |n| {
                progress(Progress::Visited(n))
            })?;
            let generator = BeatGenerator::new(
                &self.scale,
                self.profile,
                self.config.volume_range,
                self.config.beat_cap(),
            );
            let total = ids.len();
            let mut beats = Vec::with_capacity(total);
            for (i, id) in ids.into_iter().enumerate() {
                let commit = self.repo.find_commit(id)?;
                beats.push(generator.beat(&self.repo, &commit)?);
                progress(Progress::Beat {
                    current: i + 1,
                    total,
                });
            }
            self.beats = Some(beats);
        }
        Ok(self.beats.as_deref().unwrap_or(&[]))
    }

    /// Generates beats if needed and assembles the timed note sequence.
    pub fn generate(
        &mut self,
        mut progress: impl FnMut(Progress),
    ) -> Result<Vec<NoteEvent>, EngineError> {
        self.gen_beats(false, &mut progress)?;
        let beats = self.beats.as_deref().unwrap_or(&[]);
        Ok(sequence::assemble(
            beats,
            &self.profile,
            self.config.note_duration,
            |current, total| progress(Progress::Beat { current, total }),
        ))
    }

    /// Timeline length of the cached beats, in beats.
    pub fn total_beats(&self) -> f64 {
        sequence::total_beats(
            self.beats.as_deref().unwrap_or(&[]),
            self.config.note_duration,
        )
    }

    /// Serializes an assembled sequence to SMF bytes.
    pub fn export(&self, events: &[NoteEvent]) -> Result<Vec<u8>, EngineError> {
        midi::render(events, &self.profile, self.config.tempo)
    }

    /// Serializes an assembled sequence straight to a file.
    pub fn export_to(&self, path: &Path, events: &[NoteEvent]) -> Result<(), EngineError> {
        midi::write_file(path, events, &self.profile, self.config.tempo)
    }
}
