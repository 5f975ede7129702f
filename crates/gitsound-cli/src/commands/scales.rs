//! Scales command implementation
//!
//! Lists the built-in scales.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use gitsound_core::ScaleRegistry;

/// Run the scales command
pub fn run() -> Result<ExitCode> {
    let registry = ScaleRegistry::builtin();
    for scale in registry.iter() {
        let marker = if scale.id == ScaleRegistry::DEFAULT_ID {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:<12} {} [{} pitches]{}",
            scale.id.bold(),
            scale.name,
            scale.pitches().len(),
            marker
        );
    }
    Ok(ExitCode::SUCCESS)
}
