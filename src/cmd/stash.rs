//! `git stash`: shelve and restore working tree changes.

use crate::GitError;
use crate::cmd::arg_tail;
use crate::invocation::Invocation;

/// Builder for `git stash`.
///
/// The stash subcommand and its operands are positional, e.g.
/// `execute(&["pop"])` or `execute(&["drop", "stash@{1}"])`. With no
/// arguments git performs `stash push`.
#[derive(Debug)]
pub struct Stash {
    invocation: Invocation,
}

impl Stash {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("stash");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--include-untracked`: stash untracked files too (push mode).
    #[must_use]
    pub fn include_untracked(mut self) -> Self {
        self.invocation.push("--include-untracked");
        self
    }

    /// `--keep-index`: leave staged changes in place (push mode).
    #[must_use]
    pub fn keep_index(mut self) -> Self {
        self.invocation.push("--keep-index");
        self
    }

    /// `--quiet`: suppress feedback messages.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// Run `git stash` with positional `args` (`push`, `pop`, `apply`,
    /// `list`, `drop`, `clear`, ... and their operands).
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, args: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(args))
    }
}
