//! CLI argument definitions for the gitsound command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gitsound - Turn Git history into music
#[derive(Parser)]
#[command(name = "gitsound")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a MIDI file from a repository's commit history
    Generate(GenerateArgs),

    /// List the built-in scales
    Scales,

    /// List the built-in instrument programs
    Programs,

    /// List the local branches of a repository
    Branches {
        /// Path to the repository
        #[arg(short, long, default_value = ".")]
        repo: PathBuf,
    },
}

/// Arguments for the generate command.
///
/// A JSON config file supplies the base settings; every flag overrides
/// its field, so `gitsound generate --branch main` works without a file.
#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Path to a JSON song configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the repository to sonify
    #[arg(short, long)]
    pub repo: Option<PathBuf>,

    /// Branch whose history is traversed
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Scale to play on (see `gitsound scales`)
    #[arg(long)]
    pub scale: Option<String>,

    /// Instrument program (see `gitsound programs`)
    #[arg(long)]
    pub program: Option<String>,

    /// Loudness range setting the clamp deviation (0-127)
    #[arg(long)]
    pub volume_range: Option<u8>,

    /// Number of oldest commits to skip
    #[arg(long)]
    pub skip: Option<usize>,

    /// Duration of one file note, in beats
    #[arg(long)]
    pub note_duration: Option<f64>,

    /// Cap on file notes per commit (0 = unlimited)
    #[arg(long)]
    pub max_beat_len: Option<usize>,

    /// Tempo in beats per minute
    #[arg(long)]
    pub tempo: Option<u16>,

    /// Output file path
    #[arg(short, long, default_value = "song.mid")]
    pub output: PathBuf,

    /// Print per-commit progress while generating
    #[arg(long)]
    pub verbose: bool,
}
