//! Flows against a local bare remote: push, fetch, clone, ls-remote.

#![allow(clippy::all, clippy::pedantic, clippy::nursery)]

mod common;

use common::{git, setup_test_repo, setup_with_remote, write_file};
use gitrig::Repository;

#[test]
fn remotes_are_listed_by_name() {
    let (dir, _remote) = setup_with_remote();
    let repo = Repository::new(dir.path());
    assert_eq!(repo.remotes().unwrap(), ["origin"]);
}

#[test]
fn remote_add_and_remove_round_trip() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    repo.remote()
        .execute(&["add", "mirror", "https://example.com/mirror.git"])
        .unwrap();
    assert_eq!(repo.remotes().unwrap(), ["mirror"]);

    repo.remote().execute(&["remove", "mirror"]).unwrap();
    assert!(repo.remotes().unwrap().is_empty());
}

#[test]
fn push_then_fetch_updates_tracking_refs() {
    let (dir, _remote) = setup_with_remote();
    let repo = Repository::new(dir.path());

    write_file(dir.path(), "update.txt", "payload\n");
    git(dir.path(), &["add", "update.txt"]);
    git(dir.path(), &["commit", "-m", "payload commit"]);

    repo.push().quiet().execute(&["origin", "main"]).unwrap();
    repo.fetch().prune().quiet().execute(&["origin"]).unwrap();

    let remote_head = repo
        .rev_parse()
        .verify()
        .execute(&["refs/remotes/origin/main"])
        .unwrap();
    assert_eq!(remote_head, repo.head_id().unwrap());
}

#[test]
fn ls_remote_indexes_refs_and_drops_peeled_tags() {
    let (dir, _remote) = setup_with_remote();
    let repo = Repository::new(dir.path());

    git(dir.path(), &["tag", "-a", "-m", "annotated", "v1.0.0"]);
    git(dir.path(), &["tag", "light"]);
    git(dir.path(), &["push", "--quiet", "origin", "--tags"]);

    let refs = repo.ls_remote().refs(&["origin"]).unwrap();
    assert!(refs.contains_key("refs/heads/main"));
    assert!(refs.contains_key("refs/tags/light"));
    assert!(refs.contains_key("refs/tags/v1.0.0"));
    // The raw listing carries a peeled line for the annotated tag; the
    // map must not.
    assert!(refs.keys().all(|name| !name.ends_with("^{}")), "got: {refs:?}");

    // The annotated tag maps to the tag object, not the peeled commit.
    let tag_object = git(dir.path(), &["rev-parse", "v1.0.0"]);
    assert_eq!(refs["refs/tags/v1.0.0"], tag_object.trim());
    assert_ne!(refs["refs/tags/v1.0.0"], refs["refs/heads/main"]);

    // The lightweight tag points straight at the commit.
    assert_eq!(refs["refs/tags/light"], refs["refs/heads/main"]);
}

#[test]
fn clone_into_a_fresh_directory() {
    let (dir, remote) = setup_with_remote();
    let _ = dir;

    let target = tempfile::TempDir::new().unwrap();
    let launcher = Repository::new(target.path());
    let url = remote.path().to_str().unwrap();
    launcher
        .clone_repository()
        .quiet()
        .execute(url, Some("checkout"))
        .unwrap();

    let cloned = Repository::new(target.path().join("checkout"));
    assert!(cloned.is_initialized());
    assert_eq!(cloned.current_branch().unwrap(), "main");
}

#[test]
fn pull_fast_forwards_a_stale_clone() {
    let (dir, remote) = setup_with_remote();

    let target = tempfile::TempDir::new().unwrap();
    let url = remote.path().to_str().unwrap();
    git(target.path(), &["clone", "--quiet", url, "stale"]);
    let stale = Repository::new(target.path().join("stale"));

    // Advance the remote from the original repository.
    write_file(dir.path(), "ahead.txt", "ahead\n");
    git(dir.path(), &["add", "ahead.txt"]);
    git(dir.path(), &["commit", "-m", "ahead commit"]);
    git(dir.path(), &["push", "--quiet", "origin", "main"]);

    stale
        .pull()
        .ff_only()
        .quiet()
        .execute(&["origin", "main"])
        .unwrap();
    assert_eq!(stale.head_id().unwrap(), Repository::new(dir.path()).head_id().unwrap());
}
