//! Generate command implementation
//!
//! Loads and validates a song configuration, runs the engine over the
//! repository, and writes the exported MIDI file.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;

use gitsound_core::{ProgramRegistry, ScaleRegistry, SongConfig};
use gitsound_engine::{Progress, SoundEngine};

use crate::cli_args::GenerateArgs;

/// Run the generate command
///
/// # Arguments
/// * `args` - Parsed command-line arguments
///
/// # Returns
/// Exit code: 0 on success, 1 if the configuration is invalid
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    let config = build_config(args)?;

    let scales = ScaleRegistry::builtin();
    let programs = ProgramRegistry::builtin();
    let validation = config.validate(&scales, &programs);
    if !validation.is_ok() {
        for err in &validation.errors {
            eprintln!("  {} {}", "✗".red(), err);
        }
        return Ok(ExitCode::FAILURE);
    }

    // Validation guarantees both lookups succeed.
    let scale = scales
        .get(&config.scale)
        .context("scale disappeared after validation")?
        .clone();
    let profile = programs
        .get(&config.program)
        .context("program disappeared after validation")?
        .profile;

    println!(
        "{} {} @ {}",
        "Generating:".cyan().bold(),
        config.repository.display(),
        config.branch
    );

    let start = Instant::now();
    let mut engine = SoundEngine::open(config, scale, profile)?;

    let verbose = args.verbose;
    let events = engine.generate(|progress| {
        if verbose {
            match progress {
                Progress::Visited(n) => eprintln!("  visited {n} commits"),
                Progress::Beat { current, total } => eprintln!("  beat {current}/{total}"),
            }
        }
    })?;

    engine
        .export_to(&args.output, &events)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "{} {} ({} events, {:.1} beats) in {:.2?}",
        "Wrote:".green().bold(),
        args.output.display(),
        events.len(),
        engine.total_beats(),
        start.elapsed()
    );

    Ok(ExitCode::SUCCESS)
}

/// Builds the effective configuration: file settings, then flag overrides.
fn build_config(args: &GenerateArgs) -> Result<SongConfig> {
    let mut config = match &args.config {
        Some(path) => SongConfig::from_file(path)
            .with_context(|| format!("failed to load config file: {}", path.display()))?,
        None => SongConfig::default(),
    };

    if let Some(repo) = &args.repo {
        config.repository = repo.clone();
    }
    if let Some(branch) = &args.branch {
        config.branch = branch.clone();
    }
    if let Some(scale) = &args.scale {
        config.scale = scale.clone();
    }
    if let Some(program) = &args.program {
        config.program = program.clone();
    }
    if let Some(volume_range) = args.volume_range {
        config.volume_range = volume_range;
    }
    if let Some(skip) = args.skip {
        config.skip = skip;
    }
    if let Some(note_duration) = args.note_duration {
        config.note_duration = note_duration;
    }
    if let Some(max_beat_len) = args.max_beat_len {
        config.max_beat_len = Some(max_beat_len);
    }
    if let Some(tempo) = args.tempo {
        config.tempo = tempo;
    }

    Ok(config)
}
