//! `git rev-parse`: resolve revisions and repository facts.

use crate::GitError;
use crate::cmd::{arg_tail, require_one_of};
use crate::invocation::Invocation;

/// Builder for `git rev-parse`.
///
/// The revisions to resolve are positional and go to
/// [`RevParse::execute`].
#[derive(Debug)]
pub struct RevParse {
    invocation: Invocation,
}

impl RevParse {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("rev-parse");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--abbrev-ref`: print a short ref name instead of an object id.
    #[must_use]
    pub fn abbrev_ref(mut self) -> Self {
        self.invocation.push("--abbrev-ref");
        self
    }

    /// `--abbrev-ref=<mode>`: short-name mode. Accepts `strict`,
    /// `loose`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] for any other mode.
    pub fn abbrev_ref_mode(mut self, mode: &str) -> Result<Self, GitError> {
        require_one_of("--abbrev-ref", mode, &["strict", "loose"])?;
        self.invocation.push(format!("--abbrev-ref={mode}"));
        Ok(self)
    }

    /// `--verify`: require exactly one resolvable argument.
    #[must_use]
    pub fn verify(mut self) -> Self {
        self.invocation.push("--verify");
        self
    }

    /// `--quiet`: with `--verify`, fail silently.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// `--short=<n>`: abbreviate object ids to `n` digits.
    #[must_use]
    pub fn short(mut self, digits: u32) -> Self {
        self.invocation.push(format!("--short={digits}"));
        self
    }

    /// `--git-dir`: print the path to the repository directory.
    #[must_use]
    pub fn git_dir(mut self) -> Self {
        self.invocation.push("--git-dir");
        self
    }

    /// `--show-toplevel`: print the working tree root.
    #[must_use]
    pub fn show_toplevel(mut self) -> Self {
        self.invocation.push("--show-toplevel");
        self
    }

    /// `--is-inside-work-tree`: print whether the cwd is in a work tree.
    #[must_use]
    pub fn is_inside_work_tree(mut self) -> Self {
        self.invocation.push("--is-inside-work-tree");
        self
    }

    /// Run `git rev-parse` over the given revisions.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, revisions: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(revisions))
    }
}
