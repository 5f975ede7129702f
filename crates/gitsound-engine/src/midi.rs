//! Standard MIDI File serialization.
//!
//! Renders an assembled note sequence into a format-1 SMF with one track
//! per enabled voice. Bytes are produced in memory first; writing to disk
//! is a thin wrapper.

use std::path::Path;

use midly::num::{u15, u24, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};

use gitsound_core::profile::InstrumentProfile;

use crate::error::EngineError;
use crate::sequence::{NoteEvent, Voice};

/// Ticks per quarter note in exported files.
pub const TICKS_PER_BEAT: u16 = 480;

/// MIDI channel of the commit voice.
pub const COMMIT_CHANNEL: u8 = 0;
/// MIDI channel of the file voice.
pub const FILE_CHANNEL: u8 = 1;

// Ordering of simultaneous events within a track. Note-offs precede
// note-ons so zero-length notes cannot strangle a following note.
const PRIO_META: u8 = 0;
const PRIO_PROGRAM: u8 = 1;
const PRIO_NOTE_OFF: u8 = 2;
const PRIO_NOTE_ON: u8 = 3;
// A zero-length note closes right after it opens instead of hanging.
const PRIO_ZERO_OFF: u8 = 4;

/// Renders the note sequence to SMF bytes.
///
/// Produces one track per enabled voice (commit on channel 0, file on
/// channel 1), each opening with a track name and a program change; the
/// first track also carries the tempo. Both voices are silenced only if
/// the profile mutes both, in which case the file holds no tracks.
pub fn render(
    events: &[NoteEvent],
    profile: &InstrumentProfile,
    tempo: u16,
) -> Result<Vec<u8>, EngineError> {
    let mut smf = Smf::new(Header::new(
        Format::Parallel,
        Timing::Metrical(u15::new(TICKS_PER_BEAT)),
    ));

    let voices: [(Voice, &[u8], u8, Option<u8>); 2] = [
        (
            Voice::Commit,
            b"commits",
            COMMIT_CHANNEL,
            profile.commit.program,
        ),
        (Voice::File, b"files", FILE_CHANNEL, profile.file.program),
    ];

    let mut tempo_written = false;
    for (voice, name, channel, program) in voices {
        let Some(program) = program else { continue };

        let mut timed: Vec<(u64, u8, TrackEventKind<'_>)> = Vec::new();
        timed.push((0, PRIO_META, TrackEventKind::Meta(MetaMessage::TrackName(name))));
        if !tempo_written {
            // u24 caps at 16_777_215 usec/beat, reached below ~3.6 BPM.
            let usec_per_beat = (60_000_000 / u32::from(tempo.max(1))).min(0xFF_FFFF);
            timed.push((
                0,
                PRIO_META,
                TrackEventKind::Meta(MetaMessage::Tempo(u24::new(usec_per_beat))),
            ));
            tempo_written = true;
        }
        timed.push((
            0,
            PRIO_PROGRAM,
            TrackEventKind::Midi {
                channel: u4::new(channel),
                message: MidiMessage::ProgramChange {
                    program: u7::new(program.min(127)),
                },
            },
        ));

        for event in events.iter().filter(|e| e.voice == voice) {
            let on_tick = to_tick(event.time);
            let off_tick = to_tick(event.time + event.duration);
            let key = u7::new(event.note.min(127));
            let vel = u7::new(event.volume.min(127));
            timed.push((
                on_tick,
                PRIO_NOTE_ON,
                TrackEventKind::Midi {
                    channel: u4::new(channel),
                    message: MidiMessage::NoteOn { key, vel },
                },
            ));
            let off_prio = if off_tick == on_tick {
                PRIO_ZERO_OFF
            } else {
                PRIO_NOTE_OFF
            };
            timed.push((
                off_tick,
                off_prio,
                TrackEventKind::Midi {
                    channel: u4::new(channel),
                    message: MidiMessage::NoteOff {
                        key,
                        vel: u7::new(0),
                    },
                },
            ));
        }

        timed.sort_by_key(|&(tick, prio, _)| (tick, prio));

        let mut track = Vec::with_capacity(timed.len() + 1);
        let mut cursor = 0u64;
        for (tick, _, kind) in timed {
            track.push(TrackEvent {
                delta: u28::new((tick - cursor) as u32),
                kind,
            });
            cursor = tick;
        }
        track.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        });
        smf.tracks.push(track);
    }

    let mut bytes = Vec::new();
    smf.write_std(&mut bytes)?;
    Ok(bytes)
}

/// Renders and writes the sequence to `path`.
pub fn write_file(
    path: &Path,
    events: &[NoteEvent],
    profile: &InstrumentProfile,
    tempo: u16,
) -> Result<(), EngineError> {
    let bytes = render(events, profile, tempo)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn to_tick(beats: f64) -> u64 {
    (beats * f64::from(TICKS_PER_BEAT)).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitsound_core::profile::VoiceProfile;
    use pretty_assertions::assert_eq;

    fn both_voices() -> InstrumentProfile {
        InstrumentProfile {
            commit: VoiceProfile::new(104, -2),
            file: VoiceProfile::new(115, -1),
        }
    }

    fn event(voice: Voice, time: f64, duration: f64, note: u8) -> NoteEvent {
        NoteEvent {
            voice,
            time,
            duration,
            note,
            volume: 70,
        }
    }

    #[test]
    fn test_render_parses_back() {
        let events = vec![
            event(Voice::Commit, 0.0, 0.6, 44),
            event(Voice::File, 0.0, 0.3, 60),
            event(Voice::File, 0.3, 0.3, 62),
        ];
        let bytes = render(&events, &both_voices(), 120).unwrap();
        let smf = Smf::parse(&bytes).unwrap();

        assert_eq!(smf.header.format, Format::Parallel);
        assert_eq!(
            smf.header.timing,
            Timing::Metrical(u15::new(TICKS_PER_BEAT))
        );
        assert_eq!(smf.tracks.len(), 2);
    }

    #[test]
    fn test_tempo_on_first_track_only() {
        let bytes = render(&[], &both_voices(), 90).unwrap();
        let smf = Smf::parse(&bytes).unwrap();
        let tempos = |track: &[TrackEvent<'_>]| {
            track
                .iter()
                .filter_map(|e| match e.kind {
                    TrackEventKind::Meta(MetaMessage::Tempo(t)) => Some(t.as_int()),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(tempos(&smf.tracks[0]), vec![60_000_000 / 90]);
        assert_eq!(tempos(&smf.tracks[1]), Vec::<u32>::new());
    }

    #[test]
    fn test_muted_voice_has_no_track() {
        let profile = InstrumentProfile {
            commit: VoiceProfile::new(104, -2),
            file: VoiceProfile::muted(),
        };
        let bytes = render(&[event(Voice::Commit, 0.0, 0.5, 44)], &profile, 120).unwrap();
        let smf = Smf::parse(&bytes).unwrap();
        assert_eq!(smf.tracks.len(), 1);
    }

    #[test]
    fn test_note_ticks() {
        let events = vec![event(Voice::File, 0.3, 0.3, 60)];
        let bytes = render(&events, &both_voices(), 120).unwrap();
        let smf = Smf::parse(&bytes).unwrap();

        // File track is the second track; find the note-on's absolute tick.
        let mut tick = 0u64;
        let mut on_tick = None;
        let mut off_tick = None;
        for e in &smf.tracks[1] {
            tick += u64::from(e.delta.as_int());
            match e.kind {
                TrackEventKind::Midi {
                    message: MidiMessage::NoteOn { .. },
                    ..
                } => on_tick = Some(tick),
                TrackEventKind::Midi {
                    message: MidiMessage::NoteOff { .. },
                    ..
                } => off_tick = Some(tick),
                _ => {}
            }
        }
        assert_eq!(on_tick, Some(144)); // 0.3 beats * 480
        assert_eq!(off_tick, Some(288));
    }
}
