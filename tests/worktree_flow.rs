//! End-to-end flows against a real repository: staging, committing,
//! status parsing, branching, and history queries.

#![allow(clippy::all, clippy::pedantic, clippy::nursery)]

mod common;

use common::{git, setup_test_repo, write_file};
use gitrig::{Repository, StatusCode};

#[test]
fn stage_commit_and_observe_a_clean_tree() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    write_file(dir.path(), "src/lib.rs", "pub fn answer() -> u32 { 42 }\n");
    repo.add().all().execute(&[]).unwrap();
    repo.commit()
        .message("add answer")
        .unwrap()
        .execute(&[])
        .unwrap();

    assert!(repo.status_entries().unwrap().is_empty());

    let log = repo.log().oneline().execute(None, &[]).unwrap();
    assert!(log.contains("add answer"), "got: {log}");
}

#[test]
fn status_entries_reflect_index_and_worktree_sides() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    write_file(dir.path(), "tracked.txt", "one\n");
    git(dir.path(), &["add", "tracked.txt"]);
    git(dir.path(), &["commit", "-m", "track a file"]);

    // Staged addition, unstaged modification, untracked file.
    write_file(dir.path(), "staged.txt", "staged\n");
    git(dir.path(), &["add", "staged.txt"]);
    write_file(dir.path(), "tracked.txt", "one\ntwo\n");
    write_file(dir.path(), "untracked.txt", "new\n");

    let entries = repo.status_entries().unwrap();
    let by_path = |path: &str| {
        entries
            .iter()
            .find(|entry| entry.path == path)
            .unwrap_or_else(|| panic!("no entry for {path}: {entries:?}"))
    };

    let staged = by_path("staged.txt");
    assert_eq!(staged.index, Some(StatusCode::Added));
    assert_eq!(staged.worktree, None);
    assert!(staged.is_staged());

    let modified = by_path("tracked.txt");
    assert_eq!(modified.index, None);
    assert_eq!(modified.worktree, Some(StatusCode::Modified));

    let untracked = by_path("untracked.txt");
    assert_eq!(untracked.index, Some(StatusCode::Untracked));
    assert_eq!(untracked.worktree, Some(StatusCode::Untracked));
    assert!(untracked.is_untracked());
}

#[test]
fn status_restricted_to_paths_uses_the_separator() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    write_file(dir.path(), "inside/a.txt", "a\n");
    write_file(dir.path(), "outside.txt", "b\n");

    let entries = repo.status().entries(&["inside"]).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].path.starts_with("inside/"), "got: {entries:?}");
}

#[test]
fn branch_lifecycle_and_name_listing() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    repo.branch().execute(&["feature/parser"]).unwrap();
    repo.branch().execute(&["feature/facade"]).unwrap();

    let names = repo.branches().unwrap();
    assert_eq!(names, ["feature/facade", "feature/parser", "main"]);

    repo.checkout()
        .quiet()
        .execute(Some("feature/parser"), &[])
        .unwrap();
    assert_eq!(repo.current_branch().unwrap(), "feature/parser");

    // The current-branch marker is stripped regardless of position.
    let names = repo.branches().unwrap();
    assert!(names.contains(&"feature/parser".to_owned()));
    assert!(names.iter().all(|name| !name.starts_with('*')));

    repo.checkout().quiet().execute(Some("main"), &[]).unwrap();
    repo.branch()
        .delete()
        .force()
        .execute(&["feature/facade"])
        .unwrap();
    assert!(!repo.branches().unwrap().contains(&"feature/facade".to_owned()));
}

#[test]
fn tag_names_and_describe() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    repo.tag()
        .annotate()
        .message("first release")
        .unwrap()
        .execute(&["v1.0.0"])
        .unwrap();
    repo.tag().execute(&["lightweight"]).unwrap();

    assert_eq!(repo.tag().names().unwrap(), ["lightweight", "v1.0.0"]);

    let described = repo
        .describe()
        .tags()
        .match_pattern("v*")
        .unwrap()
        .execute(&["HEAD"])
        .unwrap();
    assert_eq!(described, "v1.0.0");
}

#[test]
fn rm_and_reset_round_trip() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    write_file(dir.path(), "doomed.txt", "bye\n");
    git(dir.path(), &["add", "doomed.txt"]);
    git(dir.path(), &["commit", "-m", "add doomed file"]);

    repo.rm().quiet().execute(&["doomed.txt"]).unwrap();
    let entries = repo.status_entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].index, Some(StatusCode::Deleted));

    // Unstage the deletion, then drop the working tree change.
    repo.reset().quiet().execute(Some("HEAD"), &["doomed.txt"]).unwrap();
    repo.checkout().execute(None, &["doomed.txt"]).unwrap();
    assert!(repo.status_entries().unwrap().is_empty());
}

#[test]
fn rev_parse_and_show_inspect_head() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    let head = repo.head_id().unwrap();
    assert_eq!(head.len(), 40, "got: {head}");

    let resolved = repo.rev_parse().verify().execute(&["HEAD"]).unwrap();
    assert_eq!(resolved, head);

    let subject = repo
        .show()
        .no_patch()
        .pretty("format:%s")
        .unwrap()
        .execute(&["HEAD"])
        .unwrap();
    assert_eq!(subject, "initial commit");

    let summary = repo.shortlog().numbered().summary().execute(&["HEAD"]).unwrap();
    assert!(summary.contains("Test User"), "got: {summary}");
}

#[test]
fn stash_shelves_and_restores() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    write_file(dir.path(), "kept.txt", "v1\n");
    git(dir.path(), &["add", "kept.txt"]);
    git(dir.path(), &["commit", "-m", "add kept file"]);
    write_file(dir.path(), "kept.txt", "v2\n");

    repo.stash().quiet().execute(&[]).unwrap();
    assert!(repo.status_entries().unwrap().is_empty());

    repo.stash().quiet().execute(&["pop"]).unwrap();
    let entries = repo.status_entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].worktree, Some(StatusCode::Modified));
}

#[test]
fn config_set_and_read_back() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    repo.config()
        .local()
        .execute(&["gitrig.test-key", "some value"])
        .unwrap();
    let value = repo
        .config()
        .get()
        .execute(&["gitrig.test-key"])
        .unwrap();
    assert_eq!(value, "some value");

    let canonical = repo
        .config()
        .value_type("bool")
        .unwrap()
        .get()
        .execute(&["commit.gpgsign"])
        .unwrap();
    assert_eq!(canonical, "false");
}
