//! Shared test helpers for gitrig integration tests.
//!
//! All tests use temp directories — no side effects outside them. Each
//! test gets its own repository via `setup_test_repo()`; fixtures are
//! built with raw `git` so the crate under test is not used to set up
//! its own expectations.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run git in `dir` and panic with stderr if it fails.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let out = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        out.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

/// Create a repository on branch `main` with one initial commit.
pub fn setup_test_repo() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    git(dir.path(), &["init", "-b", "main"]);
    git(dir.path(), &["config", "user.email", "test@gitrig.invalid"]);
    git(dir.path(), &["config", "user.name", "Test User"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
    git(dir.path(), &["config", "tag.gpgsign", "false"]);
    git(dir.path(), &["commit", "--allow-empty", "-m", "initial commit"]);
    dir
}

/// A repository plus a bare remote configured as `origin` with `main`
/// already pushed.
pub fn setup_with_remote() -> (TempDir, TempDir) {
    let remote = TempDir::new().expect("failed to create remote temp dir");
    git(remote.path(), &["init", "--bare", "-b", "main"]);

    let repo = setup_test_repo();
    let url = remote.path().to_str().expect("utf-8 temp path").to_owned();
    git(repo.path(), &["remote", "add", "origin", &url]);
    git(repo.path(), &["push", "--quiet", "origin", "main"]);
    (repo, remote)
}

/// Write a file relative to the repository root.
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create parent dirs");
    }
    std::fs::write(path, contents).expect("failed to write file");
}
