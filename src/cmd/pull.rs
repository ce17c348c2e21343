//! `git pull`: fetch and integrate with another repository.

use crate::GitError;
use crate::cmd::{arg_tail, require_one_of};
use crate::invocation::Invocation;

/// Builder for `git pull`.
///
/// The remote and refspecs are positional and go to [`Pull::execute`].
#[derive(Debug)]
pub struct Pull {
    invocation: Invocation,
}

impl Pull {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("pull");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--rebase=<mode>`: rebase instead of merging. Accepts `false`,
    /// `true`, `merges`, `interactive`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] for any other mode.
    pub fn rebase(mut self, mode: &str) -> Result<Self, GitError> {
        require_one_of("--rebase", mode, &["false", "true", "merges", "interactive"])?;
        self.invocation.push(format!("--rebase={mode}"));
        Ok(self)
    }

    /// `--no-rebase`: merge, overriding `pull.rebase` configuration.
    #[must_use]
    pub fn no_rebase(mut self) -> Self {
        self.invocation.push("--no-rebase");
        self
    }

    /// `--ff-only`: only update if a fast-forward suffices.
    #[must_use]
    pub fn ff_only(mut self) -> Self {
        self.invocation.push("--ff-only");
        self
    }

    /// `--no-ff`: always create a merge commit when merging.
    #[must_use]
    pub fn no_ff(mut self) -> Self {
        self.invocation.push("--no-ff");
        self
    }

    /// `--prune`: prune remote-tracking refs while fetching.
    #[must_use]
    pub fn prune(mut self) -> Self {
        self.invocation.push("--prune");
        self
    }

    /// `--tags`: fetch all tags too.
    #[must_use]
    pub fn tags(mut self) -> Self {
        self.invocation.push("--tags");
        self
    }

    /// `--quiet`: suppress progress reporting.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// `--verbose`: be chatty about fetch and merge.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.invocation.push("--verbose");
        self
    }

    /// Run `git pull` with positional `args` (remote, then refspecs).
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, args: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(args))
    }
}
