//! Full pipeline: repository -> beats -> sequence -> parsed SMF.

mod common;

use midly::{MetaMessage, MidiMessage, Smf, TrackEventKind};
use pretty_assertions::assert_eq;

use gitsound_core::{ProgramRegistry, ScaleRegistry, SongConfig};
use gitsound_engine::{Progress, SoundEngine, Voice};

/// Three commits, each touching the same two files.
fn two_file_repo() -> common::TestRepo {
    let fixture = common::init();
    let c1 = common::commit(
        &fixture.repo,
        &[],
        100,
        "one",
        &[("a.txt", "1\n"), ("b.txt", "x\n")],
    );
    let c2 = common::commit(
        &fixture.repo,
        &[c1],
        200,
        "two",
        &[("a.txt", "1\n2\n"), ("b.txt", "x\ny\n")],
    );
    let c3 = common::commit(
        &fixture.repo,
        &[c2],
        300,
        "three",
        &[("a.txt", "1\n2\n3\n"), ("b.txt", "x\ny\nz\n")],
    );
    common::set_branch(&fixture.repo, "master", c3);
    fixture
}

fn engine_for(config: SongConfig) -> SoundEngine {
    let scales = ScaleRegistry::builtin();
    let programs = ProgramRegistry::builtin();
    assert!(config.validate(&scales, &programs).is_ok());
    let scale = scales.get(&config.scale).unwrap().clone();
    let profile = programs.get(&config.program).unwrap().profile;
    SoundEngine::open(config, scale, profile).unwrap()
}

fn config_for(fixture: &common::TestRepo) -> SongConfig {
    SongConfig {
        repository: fixture.dir.path().to_path_buf(),
        ..SongConfig::default()
    }
}

#[test]
fn beats_follow_history() {
    let fixture = two_file_repo();
    let mut engine = engine_for(config_for(&fixture));

    let mut visited = 0;
    let mut generated = Vec::new();
    let beats = engine
        .gen_beats(false, |p| match p {
            Progress::Visited(n) => visited = n,
            Progress::Beat { current, total } => generated.push((current, total)),
        })
        .unwrap();

    assert_eq!(visited, 3);
    assert_eq!(generated, vec![(1, 3), (2, 3), (3, 3)]);
    assert_eq!(beats.len(), 3);
    for beat in beats {
        assert_eq!(beat.files.len(), 2);
    }
}

#[test]
fn timeline_spans_follow_file_counts() {
    let fixture = two_file_repo();
    let mut engine = engine_for(config_for(&fixture));
    let events = engine.generate(|_| {}).unwrap();

    let commit_times: Vec<f64> = events
        .iter()
        .filter(|e| e.voice == Voice::Commit)
        .map(|e| e.time)
        .collect();
    assert_eq!(commit_times, vec![0.0, 0.6, 1.2]);
    assert_eq!(engine.total_beats(), 1.8);
}

#[test]
fn beat_cap_limits_file_notes() {
    let fixture = common::init();
    let c1 = common::commit(
        &fixture.repo,
        &[],
        100,
        "wide",
        &[("a.txt", "1\n"), ("b.txt", "2\n"), ("c.txt", "3\n")],
    );
    common::set_branch(&fixture.repo, "master", c1);

    let mut config = config_for(&fixture);
    config.max_beat_len = Some(2);
    let mut engine = engine_for(config);
    let beats = engine.gen_beats(false, |_| {}).unwrap();
    assert_eq!(beats[0].files.len(), 2);
}

#[test]
fn generation_is_cached_until_forced() {
    let fixture = two_file_repo();
    let mut engine = engine_for(config_for(&fixture));

    engine.gen_beats(false, |_| {}).unwrap();
    let mut visited = 0;
    engine
        .gen_beats(false, |p| {
            if let Progress::Visited(n) = p {
                visited = n;
            }
        })
        .unwrap();
    assert_eq!(visited, 0);

    engine
        .gen_beats(true, |p| {
            if let Progress::Visited(n) = p {
                visited = n;
            }
        })
        .unwrap();
    assert_eq!(visited, 3);
}

#[test]
fn export_is_deterministic() {
    let fixture = two_file_repo();
    let mut engine = engine_for(config_for(&fixture));

    let events = engine.generate(|_| {}).unwrap();
    let first = engine.export(&events).unwrap();

    engine.gen_beats(true, |_| {}).unwrap();
    let events = engine.generate(|_| {}).unwrap();
    let second = engine.export(&events).unwrap();

    assert_eq!(first, second);
}

#[test]
fn exported_file_parses_with_expected_programs() {
    let fixture = two_file_repo();
    let mut engine = engine_for(config_for(&fixture));
    let events = engine.generate(|_| {}).unwrap();
    let bytes = engine.export(&events).unwrap();

    let smf = Smf::parse(&bytes).unwrap();
    assert_eq!(smf.tracks.len(), 2);

    let programs: Vec<u8> = smf
        .tracks
        .iter()
        .flatten()
        .filter_map(|e| match e.kind {
            TrackEventKind::Midi {
                message: MidiMessage::ProgramChange { program },
                ..
            } => Some(program.as_int()),
            _ => None,
        })
        .collect();
    assert_eq!(programs, vec![104, 115]);

    // Default tempo is 120 BPM.
    let tempo = smf.tracks[0].iter().find_map(|e| match e.kind {
        TrackEventKind::Meta(MetaMessage::Tempo(t)) => Some(t.as_int()),
        _ => None,
    });
    assert_eq!(tempo, Some(500_000));
}

#[test]
fn muted_file_voice_exports_commit_track_only() {
    let fixture = two_file_repo();
    let mut config = config_for(&fixture);
    config.program = "commit-only".to_string();
    let mut engine = engine_for(config);

    let events = engine.generate(|_| {}).unwrap();
    assert!(events.iter().all(|e| e.voice == Voice::Commit));

    let bytes = engine.export(&events).unwrap();
    let smf = Smf::parse(&bytes).unwrap();
    assert_eq!(smf.tracks.len(), 1);
}

#[test]
fn export_to_writes_a_parseable_file() {
    let fixture = two_file_repo();
    let mut engine = engine_for(config_for(&fixture));
    let events = engine.generate(|_| {}).unwrap();

    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("song.mid");
    engine.export_to(&path, &events).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(Smf::parse(&bytes).is_ok());
}
