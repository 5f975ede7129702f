//! Branches command implementation
//!
//! Lists the local branches of a repository, so a user can see what to
//! pass to `generate --branch`.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use gitsound_engine::GitRepository;

/// Run the branches command
pub fn run(repo_path: &Path) -> Result<ExitCode> {
    let repo = GitRepository::open(repo_path)?;
    let names = repo.branch_names()?;
    if names.is_empty() {
        println!("{}", "no local branches".dimmed());
        return Ok(ExitCode::SUCCESS);
    }
    for name in names {
        println!("  {name}");
    }
    Ok(ExitCode::SUCCESS)
}
