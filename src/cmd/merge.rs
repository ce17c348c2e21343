//! `git merge`: join development histories together.

use crate::GitError;
use crate::cmd::{arg_tail, require_value};
use crate::invocation::Invocation;

/// Builder for `git merge`.
///
/// The commits to merge are positional and go to [`Merge::execute`].
#[derive(Debug)]
pub struct Merge {
    invocation: Invocation,
}

impl Merge {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("merge");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--no-ff`: always create a merge commit.
    #[must_use]
    pub fn no_ff(mut self) -> Self {
        self.invocation.push("--no-ff");
        self
    }

    /// `--ff-only`: refuse to merge unless a fast-forward suffices.
    #[must_use]
    pub fn ff_only(mut self) -> Self {
        self.invocation.push("--ff-only");
        self
    }

    /// `--squash`: stage the merged result without committing.
    #[must_use]
    pub fn squash(mut self) -> Self {
        self.invocation.push("--squash");
        self
    }

    /// `--no-commit`: stop just before creating the merge commit.
    #[must_use]
    pub fn no_commit(mut self) -> Self {
        self.invocation.push("--no-commit");
        self
    }

    /// `--abort`: abandon an in-progress merge.
    #[must_use]
    pub fn abort(mut self) -> Self {
        self.invocation.push("--abort");
        self
    }

    /// `--quiet`: suppress progress output.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// `--message=<msg>`: the merge commit message.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `message` is empty.
    pub fn message(mut self, message: &str) -> Result<Self, GitError> {
        require_value("--message", message)?;
        self.invocation.push(format!("--message={message}"));
        Ok(self)
    }

    /// `--strategy=<s>`: the merge strategy, e.g. `ort`, `octopus`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `strategy` is empty.
    pub fn strategy(mut self, strategy: &str) -> Result<Self, GitError> {
        require_value("--strategy", strategy)?;
        self.invocation.push(format!("--strategy={strategy}"));
        Ok(self)
    }

    /// `--strategy-option=<opt>`: pass an option to the strategy.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `option` is empty.
    pub fn strategy_option(mut self, option: &str) -> Result<Self, GitError> {
        require_value("--strategy-option", option)?;
        self.invocation.push(format!("--strategy-option={option}"));
        Ok(self)
    }

    /// Run `git merge` against the named commits.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero (conflicts included).
    pub fn execute(&mut self, commits: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(commits))
    }
}

#[cfg(test)]
mod tests {
    use crate::{GitError, Repository};

    #[test]
    fn composes_a_no_ff_merge() {
        let repo = Repository::new("/repo");
        let line = repo
            .merge()
            .no_ff()
            .message("merge topic into main")
            .unwrap()
            .dry_run(true)
            .execute(&["topic"])
            .unwrap();
        assert_eq!(
            line,
            "git merge --no-ff '--message=merge topic into main' topic"
        );
    }

    #[test]
    fn strategy_must_not_be_empty() {
        let repo = Repository::new("/repo");
        assert!(matches!(
            repo.merge().strategy("").unwrap_err(),
            GitError::InvalidOption {
                option: "--strategy",
                ..
            }
        ));
    }
}
