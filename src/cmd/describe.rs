//! `git describe`: name a commit from the nearest reachable tag.

use crate::GitError;
use crate::cmd::{arg_tail, require_value};
use crate::invocation::Invocation;

/// Builder for `git describe`.
#[derive(Debug)]
pub struct Describe {
    invocation: Invocation,
}

impl Describe {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("describe");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--tags`: consider lightweight tags too.
    #[must_use]
    pub fn tags(mut self) -> Self {
        self.invocation.push("--tags");
        self
    }

    /// `--all`: consider any ref, not just tags.
    #[must_use]
    pub fn all(mut self) -> Self {
        self.invocation.push("--all");
        self
    }

    /// `--long`: always print the long form with distance and hash.
    #[must_use]
    pub fn long(mut self) -> Self {
        self.invocation.push("--long");
        self
    }

    /// `--always`: fall back to an abbreviated commit id.
    #[must_use]
    pub fn always(mut self) -> Self {
        self.invocation.push("--always");
        self
    }

    /// `--exact-match`: only accept a tag directly on the commit.
    #[must_use]
    pub fn exact_match(mut self) -> Self {
        self.invocation.push("--exact-match");
        self
    }

    /// `--dirty`: append a marker when the working tree has changes.
    #[must_use]
    pub fn dirty(mut self) -> Self {
        self.invocation.push("--dirty");
        self
    }

    /// `--abbrev=<n>`: hash abbreviation length.
    #[must_use]
    pub fn abbrev(mut self, digits: u32) -> Self {
        self.invocation.push(format!("--abbrev={digits}"));
        self
    }

    /// `--match=<pattern>`: only consider tags matching the glob.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `pattern` is empty.
    pub fn match_pattern(mut self, pattern: &str) -> Result<Self, GitError> {
        require_value("--match", pattern)?;
        self.invocation.push(format!("--match={pattern}"));
        Ok(self)
    }

    /// Run `git describe` against zero or more committishes.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, committish: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(committish))
    }
}
