//! `git shortlog`: summarize history grouped by author.

use crate::GitError;
use crate::cmd::arg_tail;
use crate::invocation::Invocation;

/// Builder for `git shortlog`.
#[derive(Debug)]
pub struct Shortlog {
    invocation: Invocation,
}

impl Shortlog {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("shortlog");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--numbered`: sort authors by commit count.
    #[must_use]
    pub fn numbered(mut self) -> Self {
        self.invocation.push("--numbered");
        self
    }

    /// `--summary`: counts only, no commit subjects.
    #[must_use]
    pub fn summary(mut self) -> Self {
        self.invocation.push("--summary");
        self
    }

    /// `--email`: show author email addresses.
    #[must_use]
    pub fn email(mut self) -> Self {
        self.invocation.push("--email");
        self
    }

    /// `--committer`: group by committer instead of author.
    #[must_use]
    pub fn committer(mut self) -> Self {
        self.invocation.push("--committer");
        self
    }

    /// Run `git shortlog` over a revision range.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, revisions: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(revisions))
    }
}
