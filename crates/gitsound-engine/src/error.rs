//! Engine error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a repository or exporting a song.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The configured repository path does not hold a Git repository.
    #[error("no git repository at {}", path.display())]
    RepositoryNotFound {
        /// The path that was probed.
        path: PathBuf,
    },

    /// The configured branch does not exist in the repository.
    #[error("branch '{name}' not found")]
    BranchNotFound {
        /// The branch name that was looked up.
        name: String,
    },

    /// An underlying libgit2 operation failed.
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    /// An I/O failure while writing exported bytes.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
