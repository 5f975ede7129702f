//! gitsound Generation Engine
//!
//! Walks a Git branch's history, turns every commit into a beat, lays the
//! beats out on a timeline, and serializes the result as a Standard MIDI
//! File. All randomness-free: the same repository state and configuration
//! always produce byte-identical output.
//!
//! # Pipeline
//!
//! 1. [`history::collect_history`]: branch head -> every reachable
//!    commit, deduplicated, oldest first
//! 2. [`beat::BeatGenerator`]: commit -> notes via the mappings in
//!    `gitsound_core`
//! 3. [`sequence::assemble`]: beats -> timed note events
//! 4. [`midi::render`]: note events -> SMF bytes
//!
//! [`SoundEngine`] drives the pipeline and caches the beat list.

pub mod beat;
pub mod engine;
pub mod error;
pub mod history;
pub mod midi;
pub mod repo;
pub mod sequence;

pub use beat::{Beat, FileNote};
pub use engine::{Progress, SoundEngine};
pub use error::EngineError;
pub use repo::{ChangeStats, FileChange, GitRepository, EMPTY_BLOB_ID};
pub use sequence::{NoteEvent, Voice};
