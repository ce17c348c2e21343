//! `git rm`: remove files from the working tree and the index.

use crate::GitError;
use crate::cmd::path_tail;
use crate::invocation::Invocation;

/// Builder for `git rm`.
///
/// Pathspecs go to [`Rm::execute`] and are separated with `--`. Git
/// itself requires at least one pathspec; the builder leaves that check
/// to git so the error carries git's own wording.
#[derive(Debug)]
pub struct Rm {
    invocation: Invocation,
}

impl Rm {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("rm");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--cached`: remove from the index only, keep the file on disk.
    #[must_use]
    pub fn cached(mut self) -> Self {
        self.invocation.push("--cached");
        self
    }

    /// `--force`: override the up-to-date check.
    #[must_use]
    pub fn force(mut self) -> Self {
        self.invocation.push("--force");
        self
    }

    /// `-r`: remove directory contents recursively.
    #[must_use]
    pub fn recursive(mut self) -> Self {
        self.invocation.push("-r");
        self
    }

    /// `--ignore-unmatch`: exit zero even when nothing matched.
    #[must_use]
    pub fn ignore_unmatch(mut self) -> Self {
        self.invocation.push("--ignore-unmatch");
        self
    }

    /// `--quiet`: do not list removed files.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// Run `git rm` against `paths`.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, paths: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&path_tail(paths))
    }
}
