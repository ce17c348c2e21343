//! `git ls-remote`: list references in a remote repository.

use std::collections::BTreeMap;

use crate::GitError;
use crate::cmd::arg_tail;
use crate::invocation::Invocation;
use crate::parse;

/// Builder for `git ls-remote`.
///
/// [`LsRemote::refs`] parses the listing into a map of ref name to
/// object id, with `^{}` peeled-tag entries dropped.
#[derive(Debug)]
pub struct LsRemote {
    invocation: Invocation,
}

impl LsRemote {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("ls-remote");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--heads`: limit to `refs/heads`.
    #[must_use]
    pub fn heads(mut self) -> Self {
        self.invocation.push("--heads");
        self
    }

    /// `--tags`: limit to `refs/tags`.
    #[must_use]
    pub fn tags(mut self) -> Self {
        self.invocation.push("--tags");
        self
    }

    /// `--refs`: omit peeled-tag lines on the git side too.
    #[must_use]
    pub fn refs_only(mut self) -> Self {
        self.invocation.push("--refs");
        self
    }

    /// `--get-url`: print the resolved remote URL instead of refs.
    #[must_use]
    pub fn get_url(mut self) -> Self {
        self.invocation.push("--get-url");
        self
    }

    /// `--quiet`: do not print the remote URL to stderr.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// Run `git ls-remote` with positional `args` (remote, then ref
    /// patterns).
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, args: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(args))
    }

    /// Run and index the listing as ref name to object id.
    ///
    /// Peeled-tag entries (`^{}` suffix) are excluded, so annotated tags
    /// map to the tag object itself.
    ///
    /// # Errors
    /// Same failure modes as [`LsRemote::execute`].
    pub fn refs(mut self, args: &[&str]) -> Result<BTreeMap<String, String>, GitError> {
        let raw = self.execute(args)?;
        Ok(parse::ref_map(&raw))
    }
}
