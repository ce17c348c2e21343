//! `git show`: display objects (commits, tags, trees, blobs).

use crate::GitError;
use crate::cmd::{arg_tail, require_value};
use crate::invocation::Invocation;

/// Builder for `git show`.
///
/// The objects to display are positional and go to [`Show::execute`].
#[derive(Debug)]
pub struct Show {
    invocation: Invocation,
}

impl Show {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("show");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--stat`: show a diffstat instead of the full patch.
    #[must_use]
    pub fn stat(mut self) -> Self {
        self.invocation.push("--stat");
        self
    }

    /// `--name-only`: only the names of changed files.
    #[must_use]
    pub fn name_only(mut self) -> Self {
        self.invocation.push("--name-only");
        self
    }

    /// `--name-status`: changed files with status letters.
    #[must_use]
    pub fn name_status(mut self) -> Self {
        self.invocation.push("--name-status");
        self
    }

    /// `--no-patch`: suppress diff output entirely.
    #[must_use]
    pub fn no_patch(mut self) -> Self {
        self.invocation.push("--no-patch");
        self
    }

    /// `--abbrev-commit`: show abbreviated commit ids.
    #[must_use]
    pub fn abbrev_commit(mut self) -> Self {
        self.invocation.push("--abbrev-commit");
        self
    }

    /// `--pretty=<style>`: format the commit header.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `style` is empty.
    pub fn pretty(mut self, style: &str) -> Result<Self, GitError> {
        require_value("--pretty", style)?;
        self.invocation.push(format!("--pretty={style}"));
        Ok(self)
    }

    /// Run `git show` against the named objects.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, objects: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(objects))
    }
}
