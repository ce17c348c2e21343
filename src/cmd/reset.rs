//! `git reset`: move HEAD and optionally the index and working tree.

use crate::GitError;
use crate::cmd::{path_tail, require_one_of};
use crate::invocation::Invocation;

/// Builder for `git reset`.
///
/// The target commit and pathspecs go to [`Reset::execute`]; paths are
/// separated with `--`.
#[derive(Debug)]
pub struct Reset {
    invocation: Invocation,
}

impl Reset {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("reset");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--<mode>`: how far the reset reaches. Accepts `soft`, `mixed`,
    /// `hard`, `merge`, `keep`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] for any other mode.
    pub fn mode(mut self, mode: &str) -> Result<Self, GitError> {
        require_one_of("--<mode>", mode, &["soft", "mixed", "hard", "merge", "keep"])?;
        self.invocation.push(format!("--{mode}"));
        Ok(self)
    }

    /// `--quiet`: only report errors.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// Run `git reset`, optionally against a commit and pathspecs.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, commit: Option<&str>, paths: &[&str]) -> Result<String, GitError> {
        let mut tail = Vec::new();
        if let Some(commit) = commit {
            tail.push(commit.to_owned());
        }
        tail.extend(path_tail(paths));
        self.invocation.run_with(&tail)
    }
}
