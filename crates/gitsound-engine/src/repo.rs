//! Repository access layer over libgit2.
//!
//! Everything the rest of the engine needs from Git goes through
//! [`GitRepository`]: branch head lookup, per-commit line statistics, and
//! blob-id resolution for changed paths.

use std::path::Path;

use git2::{BranchType, Commit, ObjectType, Oid, Patch, Repository, Tree};

use crate::error::EngineError;

/// Object id of the empty blob; the fallback for paths that cannot be
/// resolved in a commit's tree (deleted files, paths ending in a tree).
pub const EMPTY_BLOB_ID: &str = "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391";

/// Aggregate line statistics for one commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeStats {
    /// Total lines added across all files.
    pub insertions: u32,
    /// Total lines removed across all files.
    pub deletions: u32,
}

/// Line statistics for a single changed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path of the file within the repository.
    pub path: String,
    /// Lines added in this file.
    pub insertions: u32,
    /// Lines removed in this file.
    pub deletions: u32,
}

/// A read-only handle to a local Git repository.
pub struct GitRepository {
    inner: Repository,
}

impl std::fmt::Debug for GitRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepository")
            .field("path", &self.inner.path())
            .finish()
    }
}

impl GitRepository {
    /// Opens the repository at `path`.
    pub fn open(path: &Path) -> Result<Self, EngineError> {
        let inner = Repository::open(path).map_err(|err| {
            if err.code() == git2::ErrorCode::NotFound {
                EngineError::RepositoryNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                EngineError::Git(err)
            }
        })?;
        Ok(Self { inner })
    }

    /// Resolves a local branch name to its head commit id.
    pub fn branch_head(&self, name: &str) -> Result<Oid, EngineError> {
        let branch = self
            .inner
            .find_branch(name, BranchType::Local)
            .map_err(|err| {
                if err.code() == git2::ErrorCode::NotFound {
                    EngineError::BranchNotFound {
                        name: name.to_string(),
                    }
                } else {
                    EngineError::Git(err)
                }
            })?;
        let commit = branch.get().peel_to_commit()?;
        Ok(commit.id())
    }

    /// Looks up a commit by id.
    pub fn find_commit(&self, id: Oid) -> Result<Commit<'_>, EngineError> {
        Ok(self.inner.find_commit(id)?)
    }

    /// Lists local branch names, for error messages and CLI listings.
    pub fn branch_names(&self) -> Result<Vec<String>, EngineError> {
        let mut names = Vec::new();
        for entry in self.inner.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Computes per-file and aggregate line statistics for a commit.
    ///
    /// Root commits are diffed against the empty tree. Merge commits are
    /// diffed against their first parent only, so a merge sounds like the
    /// changes it actually introduced on the traversed line of history.
    /// Files are returned in the diff's order.
    pub fn change_stats(
        &self,
        commit: &Commit<'_>,
    ) -> Result<(Vec<FileChange>, ChangeStats), EngineError> {
        let tree = commit.tree()?;
        let parent_tree: Option<Tree<'_>> = match commit.parent(0) {
            Ok(parent) => Some(parent.tree()?),
            Err(_) => None,
        };
        let diff = self
            .inner
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        let mut files = Vec::new();
        let mut totals = ChangeStats::default();
        for (idx, delta) in diff.deltas().enumerate() {
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default();

            let (insertions, deletions) = match Patch::from_diff(&diff, idx)? {
                Some(patch) => {
                    let (_, additions, deletions) = patch.line_stats()?;
                    (additions as u32, deletions as u32)
                }
                // Binary or unreadable delta; counts as a change with no lines.
                None => (0, 0),
            };

            totals.insertions += insertions;
            totals.deletions += deletions;
            files.push(FileChange {
                path,
                insertions,
                deletions,
            });
        }

        Ok((files, totals))
    }

    /// Resolves a path in a commit's tree to a blob id string.
    ///
    /// Never errors: a missing path, or a path that terminates in a
    /// subtree instead of a blob, resolves to [`EMPTY_BLOB_ID`]. Deleted
    /// files therefore still contribute a (fixed) pitch.
    pub fn resolve_blob_id(&self, commit: &Commit<'_>, path: &str) -> String {
        let tree = match commit.tree() {
            Ok(tree) => tree,
            Err(_) => return EMPTY_BLOB_ID.to_string(),
        };
        match tree.get_path(Path::new(path)) {
            Ok(entry) if entry.kind() == Some(ObjectType::Blob) => entry.id().to_string(),
            _ => EMPTY_BLOB_ID.to_string(),
        }
    }
}
