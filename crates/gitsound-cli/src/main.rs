//! gitsound CLI - Turn Git history into music
//!
//! This binary parses arguments and dispatches to the command
//! implementations in the library crate.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use gitsound_cli::cli_args::{Cli, Commands};
use gitsound_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(&args),
        Commands::Scales => commands::scales::run(),
        Commands::Programs => commands::programs::run(),
        Commands::Branches { repo } => commands::branches::run(&repo),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::FAILURE
        }
    }
}
