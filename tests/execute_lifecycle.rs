//! Execute-at-most-once and dry-run behavior across builder families.

#![allow(clippy::all, clippy::pedantic, clippy::nursery)]

mod common;

use common::setup_test_repo;
use gitrig::{GitError, Repository};

#[test]
fn second_execution_fails_for_every_builder_shape() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    // A path-accepting builder.
    let mut status = repo.status().porcelain();
    status.execute(&[]).unwrap();
    assert!(matches!(
        status.execute(&[]).unwrap_err(),
        GitError::AlreadyExecuted { .. }
    ));

    // A ref-accepting builder.
    let mut branch = repo.branch();
    branch.execute(&[]).unwrap();
    assert!(matches!(
        branch.execute(&[]).unwrap_err(),
        GitError::AlreadyExecuted { .. }
    ));

    // A builder with a custom execute signature.
    let mut log = repo.log().max_count(1);
    log.execute(None, &[]).unwrap();
    assert!(matches!(
        log.execute(None, &[]).unwrap_err(),
        GitError::AlreadyExecuted { .. }
    ));
}

#[test]
fn a_failed_execution_still_consumes_the_builder() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    let mut checkout = repo.checkout();
    let first = checkout.execute(Some("no-such-branch"), &[]).unwrap_err();
    assert!(matches!(first, GitError::CommandFailed { .. }), "got: {first:?}");
    let second = checkout.execute(Some("main"), &[]).unwrap_err();
    assert!(matches!(second, GitError::AlreadyExecuted { .. }));
}

#[test]
fn already_executed_reports_the_command_line() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    let mut tag = repo.tag();
    tag.execute(&[]).unwrap();
    match tag.execute(&[]).unwrap_err() {
        GitError::AlreadyExecuted { command } => assert_eq!(command, "git tag"),
        other => panic!("expected AlreadyExecuted, got {other:?}"),
    }
}

#[test]
fn dry_runs_repeat_then_one_real_run_is_left() {
    let dir = setup_test_repo();
    let repo = Repository::new(dir.path());

    let mut status = repo.status().porcelain().dry_run(true);
    let first = status.execute(&[]).unwrap();
    let second = status.execute(&[]).unwrap();
    assert_eq!(first, "git status --porcelain");
    assert_eq!(first, second);

    // The dry runs did not consume the single real execution.
    let mut real = repo.status().porcelain();
    real.execute(&[]).unwrap();
    assert!(matches!(
        real.execute(&[]).unwrap_err(),
        GitError::AlreadyExecuted { .. }
    ));
}

#[test]
fn dry_run_output_is_deterministic_per_option_chain() {
    let repo = Repository::new("/never-touched");
    for _ in 0..3 {
        let line = repo
            .log()
            .oneline()
            .max_count(5)
            .dry_run(true)
            .execute(Some("main..topic"), &["docs"])
            .unwrap();
        assert_eq!(line, "git log --oneline --max-count=5 main..topic -- docs");
    }
}

#[test]
fn invalid_option_appends_nothing() {
    let repo = Repository::new("/never-touched");

    // Chain a good option, fail one, then show the vector is untouched
    // by the failed call.
    let branch = repo.branch().all();
    let err = branch.color("sometimes").unwrap_err();
    assert!(matches!(err, GitError::InvalidOption { .. }));

    let line = repo
        .branch()
        .all()
        .dry_run(true)
        .execute(&[])
        .unwrap();
    assert_eq!(line, "git branch --all");
}

#[test]
fn separator_appears_only_with_paths() {
    let repo = Repository::new("/never-touched");

    let with_paths = repo
        .add()
        .dry_run(true)
        .execute(&["a.txt", "b.txt"])
        .unwrap();
    assert_eq!(with_paths, "git add -- a.txt b.txt");

    let without = repo.add().all().dry_run(true).execute(&[]).unwrap();
    assert_eq!(without, "git add --all");
    assert!(!without.split(' ').any(|token| token == "--"), "got: {without}");
}
