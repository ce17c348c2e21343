//! `git status`: show the working tree state.

use crate::GitError;
use crate::cmd::{path_tail, require_one_of};
use crate::invocation::Invocation;
use crate::parse::{self, StatusEntry};

/// Builder for `git status`.
///
/// [`Status::entries`] is the usual entry point: it forces porcelain
/// output and parses it into [`StatusEntry`] values. The raw `execute`
/// remains available for human-oriented formats.
#[derive(Debug)]
pub struct Status {
    invocation: Invocation,
}

impl Status {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("status");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--porcelain`: stable machine-readable output.
    #[must_use]
    pub fn porcelain(mut self) -> Self {
        self.invocation.push("--porcelain");
        self
    }

    /// `--short`: the short human format.
    #[must_use]
    pub fn short(mut self) -> Self {
        self.invocation.push("--short");
        self
    }

    /// `--branch`: include branch and tracking info.
    #[must_use]
    pub fn branch(mut self) -> Self {
        self.invocation.push("--branch");
        self
    }

    /// `--ignored`: also show ignored files.
    #[must_use]
    pub fn ignored(mut self) -> Self {
        self.invocation.push("--ignored");
        self
    }

    /// `--untracked-files=<mode>`: untracked handling. Accepts `no`,
    /// `normal`, `all`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] for any other mode.
    pub fn untracked_files(mut self, mode: &str) -> Result<Self, GitError> {
        require_one_of("--untracked-files", mode, &["no", "normal", "all"])?;
        self.invocation.push(format!("--untracked-files={mode}"));
        Ok(self)
    }

    /// `--ignore-submodules=<when>`: submodule change handling. Accepts
    /// `none`, `untracked`, `dirty`, `all`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] for any other value.
    pub fn ignore_submodules(mut self, when: &str) -> Result<Self, GitError> {
        require_one_of(
            "--ignore-submodules",
            when,
            &["none", "untracked", "dirty", "all"],
        )?;
        self.invocation.push(format!("--ignore-submodules={when}"));
        Ok(self)
    }

    /// Run `git status`, optionally restricted to `paths`.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, paths: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&path_tail(paths))
    }

    /// Run with `--porcelain` and parse the output.
    ///
    /// # Errors
    /// Same failure modes as [`Status::execute`].
    pub fn entries(self, paths: &[&str]) -> Result<Vec<StatusEntry>, GitError> {
        let raw = self.porcelain().execute(paths)?;
        Ok(parse::status_entries(&raw))
    }
}
