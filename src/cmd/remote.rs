//! `git remote`: manage the set of tracked repositories.

use crate::GitError;
use crate::cmd::arg_tail;
use crate::invocation::Invocation;
use crate::parse;

/// Builder for `git remote`.
///
/// The remote subcommand and its arguments are positional, e.g.
/// `execute(&["add", "origin", url])`. With no arguments git lists the
/// configured remote names; [`Remote::names`] parses that listing.
#[derive(Debug)]
pub struct Remote {
    invocation: Invocation,
}

impl Remote {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("remote");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--verbose`: show URLs next to remote names.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.invocation.push("--verbose");
        self
    }

    /// Run `git remote` with positional `args` (`add`, `remove`,
    /// `rename`, `set-url`, ... and their operands).
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, args: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(args))
    }

    /// List configured remote names.
    ///
    /// # Errors
    /// Same failure modes as [`Remote::execute`].
    pub fn names(mut self) -> Result<Vec<String>, GitError> {
        let raw = self.execute(&[])?;
        Ok(parse::name_list(&raw))
    }
}
