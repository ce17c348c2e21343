//! `git branch`: list, create, and delete branches.

use crate::GitError;
use crate::cmd::{arg_tail, require_one_of, require_value};
use crate::invocation::Invocation;
use crate::parse;

/// Builder for `git branch`.
///
/// Branch names and start points are positional and go to
/// [`Branch::execute`]. [`Branch::names`] is a shortcut that lists
/// branches and parses the output.
#[derive(Debug)]
pub struct Branch {
    invocation: Invocation,
}

impl Branch {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("branch");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--delete`: delete fully merged branches.
    #[must_use]
    pub fn delete(mut self) -> Self {
        self.invocation.push("--delete");
        self
    }

    /// `--force`: with `--delete`, delete regardless of merge status.
    #[must_use]
    pub fn force(mut self) -> Self {
        self.invocation.push("--force");
        self
    }

    /// `--remotes`: act on remote-tracking branches.
    #[must_use]
    pub fn remotes(mut self) -> Self {
        self.invocation.push("--remotes");
        self
    }

    /// `--all`: list both local and remote-tracking branches.
    #[must_use]
    pub fn all(mut self) -> Self {
        self.invocation.push("--all");
        self
    }

    /// `--list`: list mode, optionally filtered by patterns.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.invocation.push("--list");
        self
    }

    /// `--verbose`: show sha1 and subject line per branch.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.invocation.push("--verbose");
        self
    }

    /// `--quiet`: suppress non-error messages.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// `--track`: set up upstream configuration for a new branch.
    #[must_use]
    pub fn track(mut self) -> Self {
        self.invocation.push("--track");
        self
    }

    /// `--no-track`: skip upstream configuration even if defaulted on.
    #[must_use]
    pub fn no_track(mut self) -> Self {
        self.invocation.push("--no-track");
        self
    }

    /// `--color=<when>`: colorize output. Accepts `always`, `never`,
    /// `auto`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] for any other value.
    pub fn color(mut self, when: &str) -> Result<Self, GitError> {
        require_one_of("--color", when, &["always", "never", "auto"])?;
        self.invocation.push(format!("--color={when}"));
        Ok(self)
    }

    /// `--no-color`: turn colorization off.
    #[must_use]
    pub fn no_color(mut self) -> Self {
        self.invocation.push("--no-color");
        self
    }

    /// `--set-upstream-to=<upstream>`: change the tracked upstream.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `upstream` is empty.
    pub fn set_upstream_to(mut self, upstream: &str) -> Result<Self, GitError> {
        require_value("--set-upstream-to", upstream)?;
        self.invocation.push(format!("--set-upstream-to={upstream}"));
        Ok(self)
    }

    /// `--unset-upstream`: remove the tracked upstream.
    #[must_use]
    pub fn unset_upstream(mut self) -> Self {
        self.invocation.push("--unset-upstream");
        self
    }

    /// `--contains=<commit>`: only list branches containing the commit.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `commit` is empty.
    pub fn contains(mut self, commit: &str) -> Result<Self, GitError> {
        require_value("--contains", commit)?;
        self.invocation.push(format!("--contains={commit}"));
        Ok(self)
    }

    /// `--merged=<commit>`: only list branches merged into the commit.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `commit` is empty.
    pub fn merged(mut self, commit: &str) -> Result<Self, GitError> {
        require_value("--merged", commit)?;
        self.invocation.push(format!("--merged={commit}"));
        Ok(self)
    }

    /// `--no-merged=<commit>`: only list branches not merged into the
    /// commit.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `commit` is empty.
    pub fn no_merged(mut self, commit: &str) -> Result<Self, GitError> {
        require_value("--no-merged", commit)?;
        self.invocation.push(format!("--no-merged={commit}"));
        Ok(self)
    }

    /// Run `git branch` with positional `args` (branch name, start
    /// point, patterns).
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, args: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(args))
    }

    /// List branch names, stripped of the `*` current-branch marker.
    ///
    /// # Errors
    /// Same failure modes as [`Branch::execute`].
    pub fn names(mut self) -> Result<Vec<String>, GitError> {
        let raw = self.execute(&[])?;
        Ok(parse::name_list(&raw))
    }
}
