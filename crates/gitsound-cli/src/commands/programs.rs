//! Programs command implementation
//!
//! Lists the built-in instrument programs.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use gitsound_core::profile::VoiceProfile;
use gitsound_core::ProgramRegistry;

/// Run the programs command
pub fn run() -> Result<ExitCode> {
    let registry = ProgramRegistry::builtin();
    for named in registry.iter() {
        let marker = if named.id == ProgramRegistry::DEFAULT_ID {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:<12} {} (commit: {}, file: {}){}",
            named.id.bold(),
            named.name,
            describe(&named.profile.commit),
            describe(&named.profile.file),
            marker
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn describe(voice: &VoiceProfile) -> String {
    match voice.program {
        Some(program) => format!("program {program} octave {:+}", voice.octave),
        None => "muted".to_string(),
    }
}
