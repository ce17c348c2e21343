//! `git fetch`: download objects and refs from another repository.

use crate::GitError;
use crate::cmd::arg_tail;
use crate::invocation::Invocation;

/// Builder for `git fetch`.
///
/// The remote and refspecs are positional and go to [`Fetch::execute`].
#[derive(Debug)]
pub struct Fetch {
    invocation: Invocation,
}

impl Fetch {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("fetch");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--all`: fetch every configured remote.
    #[must_use]
    pub fn all(mut self) -> Self {
        self.invocation.push("--all");
        self
    }

    /// `--prune`: drop remote-tracking refs that no longer exist.
    #[must_use]
    pub fn prune(mut self) -> Self {
        self.invocation.push("--prune");
        self
    }

    /// `--tags`: fetch all tags in addition to the usual refs.
    #[must_use]
    pub fn tags(mut self) -> Self {
        self.invocation.push("--tags");
        self
    }

    /// `--no-tags`: do not fetch tags automatically.
    #[must_use]
    pub fn no_tags(mut self) -> Self {
        self.invocation.push("--no-tags");
        self
    }

    /// `--force`: allow non-fast-forward ref updates.
    #[must_use]
    pub fn force(mut self) -> Self {
        self.invocation.push("--force");
        self
    }

    /// `--quiet`: suppress progress reporting.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// `--verbose`: be chatty about what is fetched.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.invocation.push("--verbose");
        self
    }

    /// `--depth=<n>`: deepen or shorten a shallow history.
    #[must_use]
    pub fn depth(mut self, depth: u32) -> Self {
        self.invocation.push(format!("--depth={depth}"));
        self
    }

    /// Run `git fetch` with positional `args` (remote, then refspecs).
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, args: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(args))
    }
}
