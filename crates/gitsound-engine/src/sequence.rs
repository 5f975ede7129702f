//! Timed note assembly.
//!
//! Beats are laid out on a single timeline measured in quarter-note
//! beats. Each beat occupies a span proportional to its file count; the
//! commit voice holds one long note across the span while the file voice
//! steps through its notes.

use gitsound_core::profile::InstrumentProfile;

use crate::beat::Beat;

/// Which of the two voices an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    /// The per-commit drone voice.
    Commit,
    /// The per-file melody voice.
    File,
}

/// One scheduled note.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteEvent {
    /// Owning voice.
    pub voice: Voice,
    /// Start time in beats from the song start.
    pub time: f64,
    /// Length in beats.
    pub duration: f64,
    /// MIDI note number, clamped to 0-127.
    pub note: u8,
    /// MIDI velocity.
    pub volume: u8,
}

/// Lays beats out on the timeline.
///
/// Each beat spans `file_count * note_duration` beats. A disabled voice
/// contributes no events; a beat with no changed files occupies no time.
/// `on_beat` is invoked once per assembled beat with (current, total).
pub fn assemble(
    beats: &[Beat],
    profile: &InstrumentProfile,
    note_duration: f64,
    mut on_beat: impl FnMut(usize, usize),
) -> Vec<NoteEvent> {
    let mut events = Vec::new();
    let mut time = 0.0_f64;

    for (idx, beat) in beats.iter().enumerate() {
        let span = beat.files.len() as f64 * note_duration;

        if profile.commit.enabled() {
            events.push(NoteEvent {
                voice: Voice::Commit,
                time,
                duration: span,
                note: clamp_note(beat.commit_note),
                volume: beat.commit_volume,
            });
        }
        if profile.file.enabled() {
            for (i, file) in beat.files.iter().enumerate() {
                events.push(NoteEvent {
                    voice: Voice::File,
                    time: time + i as f64 * note_duration,
                    duration: note_duration,
                    note: clamp_note(file.note),
                    volume: file.volume,
                });
            }
        }

        time += span;
        on_beat(idx + 1, beats.len());
    }

    events
}

/// Total timeline length in beats.
pub fn total_beats(beats: &[Beat], note_duration: f64) -> f64 {
    beats.iter().map(|b| b.files.len() as f64).sum::<f64>() * note_duration
}

fn clamp_note(note: i32) -> u8 {
    note.clamp(0, 127) as u8
}
