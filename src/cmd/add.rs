//! `git add`: stage file contents into the index.

use crate::GitError;
use crate::cmd::{path_tail, require_one_of};
use crate::invocation::Invocation;

/// Builder for `git add`.
///
/// Pathspecs go to [`Add::execute`]; they are separated from the options
/// with `--` so nothing a caller passes can be mistaken for a flag.
#[derive(Debug)]
pub struct Add {
    invocation: Invocation,
}

impl Add {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("add");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--all`: stage modifications, deletions, and untracked files.
    #[must_use]
    pub fn all(mut self) -> Self {
        self.invocation.push("--all");
        self
    }

    /// `--no-all`: do not stage deletions the pathspec matches.
    #[must_use]
    pub fn no_all(mut self) -> Self {
        self.invocation.push("--no-all");
        self
    }

    /// `--update`: only match pathspecs against tracked files.
    #[must_use]
    pub fn update(mut self) -> Self {
        self.invocation.push("--update");
        self
    }

    /// `--refresh`: only refresh stat information in the index.
    #[must_use]
    pub fn refresh(mut self) -> Self {
        self.invocation.push("--refresh");
        self
    }

    /// `--force`: allow adding otherwise ignored files.
    #[must_use]
    pub fn force(mut self) -> Self {
        self.invocation.push("--force");
        self
    }

    /// `--intent-to-add`: record only that the path will be added later.
    #[must_use]
    pub fn intent_to_add(mut self) -> Self {
        self.invocation.push("--intent-to-add");
        self
    }

    /// `--ignore-errors`: keep adding after per-file failures.
    #[must_use]
    pub fn ignore_errors(mut self) -> Self {
        self.invocation.push("--ignore-errors");
        self
    }

    /// `--ignore-removal`: alias of `--no-all`.
    #[must_use]
    pub fn ignore_removal(mut self) -> Self {
        self.invocation.push("--ignore-removal");
        self
    }

    /// `--verbose`: list files as they are added.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.invocation.push("--verbose");
        self
    }

    /// `--chmod=<mode>`: override the executable bit. Accepts `+x` or `-x`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] for any other mode.
    pub fn chmod(mut self, mode: &str) -> Result<Self, GitError> {
        require_one_of("--chmod", mode, &["+x", "-x"])?;
        self.invocation.push(format!("--chmod={mode}"));
        Ok(self)
    }

    /// Run `git add` against `paths`.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, paths: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&path_tail(paths))
    }
}

#[cfg(test)]
mod tests {
    use crate::{GitError, Repository};

    #[test]
    fn composes_flags_in_call_order() {
        let repo = Repository::new("/repo");
        let line = repo
            .add()
            .all()
            .verbose()
            .dry_run(true)
            .execute(&["src/a.rs", "b c.txt"])
            .unwrap();
        assert_eq!(line, "git add --all --verbose -- src/a.rs 'b c.txt'");
    }

    #[test]
    fn no_separator_without_paths() {
        let repo = Repository::new("/repo");
        let line = repo.add().update().dry_run(true).execute(&[]).unwrap();
        assert_eq!(line, "git add --update");
    }

    #[test]
    fn chmod_accepts_only_the_two_modes() {
        let repo = Repository::new("/repo");
        let line = repo
            .add()
            .chmod("+x")
            .unwrap()
            .dry_run(true)
            .execute(&["run.sh"])
            .unwrap();
        assert_eq!(line, "git add --chmod=+x -- run.sh");

        let err = repo.add().chmod("777").unwrap_err();
        assert!(matches!(
            err,
            GitError::InvalidOption { option, .. } if option == "--chmod"
        ));
    }
}
