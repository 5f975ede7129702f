//! Branch history traversal.

use std::collections::HashSet;

use git2::Oid;

use crate::error::EngineError;
use crate::repo::GitRepository;

/// Collects every commit reachable from a branch head, oldest first.
///
/// Walks the commit graph with an explicit work stack and a visited set,
/// so each commit is visited exactly once no matter how many merge paths
/// reach it, then sorts by author timestamp ascending. The sort is
/// stable; commits sharing a timestamp keep their traversal order. The
/// first `skip` commits of the sorted list are dropped.
///
/// `on_visit` is invoked once per visited commit with the running count,
/// before sorting, so callers can report traversal progress.
pub fn collect_history(
    repo: &GitRepository,
    branch: &str,
    skip: usize,
    mut on_visit: impl FnMut(usize),
) -> Result<Vec<Oid>, EngineError> {
    let head = repo.branch_head(branch)?;

    let mut stack = vec![head];
    let mut seen: HashSet<Oid> = HashSet::new();
    seen.insert(head);

    let mut commits: Vec<(i64, Oid)> = Vec::new();
    while let Some(id) = stack.pop() {
        let commit = repo.find_commit(id)?;
        on_visit(commits.len() + 1);
        for parent in commit.parent_ids() {
            if seen.insert(parent) {
                stack.push(parent);
            }
        }
        commits.push((commit.author().when().seconds(), id));
    }

    commits.sort_by_key(|&(timestamp, _)| timestamp);
    Ok(commits.into_iter().map(|(_, id)| id).skip(skip).collect())
}
