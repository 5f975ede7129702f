//! Shared test fixtures: real bare repositories built with libgit2.

use std::collections::BTreeMap;

use git2::{Commit, Oid, Repository, Signature, Time};
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

/// Creates an empty bare repository in a temp directory.
pub fn init() -> TestRepo {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init_bare(dir.path()).unwrap();
    TestRepo { dir, repo }
}

#[derive(Default)]
struct DirNode {
    files: BTreeMap<String, String>,
    dirs: BTreeMap<String, DirNode>,
}

impl DirNode {
    fn insert(&mut self, path: &str, content: &str) {
        match path.split_once('/') {
            Some((dir, rest)) => self
                .dirs
                .entry(dir.to_string())
                .or_default()
                .insert(rest, content),
            None => {
                self.files.insert(path.to_string(), content.to_string());
            }
        }
    }

    fn write(&self, repo: &Repository) -> Oid {
        let mut builder = repo.treebuilder(None).unwrap();
        for (name, content) in &self.files {
            let blob = repo.blob(content.as_bytes()).unwrap();
            builder.insert(name, blob, 0o100_644).unwrap();
        }
        for (name, node) in &self.dirs {
            let sub = node.write(repo);
            builder.insert(name, sub, 0o040_000).unwrap();
        }
        builder.write().unwrap()
    }
}

/// Creates a commit whose tree holds exactly `files` (path, content),
/// with a fixed author timestamp for deterministic ordering.
pub fn commit(
    repo: &Repository,
    parents: &[Oid],
    when: i64,
    message: &str,
    files: &[(&str, &str)],
) -> Oid {
    let mut root = DirNode::default();
    for (path, content) in files {
        root.insert(path, content);
    }
    let tree = repo.find_tree(root.write(repo)).unwrap();
    let sig = Signature::new("Test Author", "author@example.com", &Time::new(when, 0)).unwrap();
    let parent_commits: Vec<Commit<'_>> = parents
        .iter()
        .map(|id| repo.find_commit(*id).unwrap())
        .collect();
    let parent_refs: Vec<&Commit<'_>> = parent_commits.iter().collect();
    repo.commit(None, &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

/// Points a local branch at a commit, creating or moving it.
pub fn set_branch(repo: &Repository, name: &str, target: Oid) {
    let commit = repo.find_commit(target).unwrap();
    repo.branch(name, &commit, true).unwrap();
}
