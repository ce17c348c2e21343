//! `git commit`: record staged changes.

use crate::GitError;
use crate::cmd::{path_tail, require_value};
use crate::invocation::Invocation;

/// Builder for `git commit`.
///
/// When the shared [`GitContext`](crate::GitContext) has commit signing
/// enabled and no signing option was called on this builder, `execute`
/// injects a single `--gpg-sign=<identity>` flag. Calling
/// [`Commit::gpg_sign`], [`Commit::gpg_sign_as`], or
/// [`Commit::no_gpg_sign`] suppresses the injection.
#[derive(Debug)]
pub struct Commit {
    invocation: Invocation,
    signing_set: bool,
}

impl Commit {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("commit");
        Self {
            invocation,
            signing_set: false,
        }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--message=<msg>`: the commit message.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `message` is empty.
    pub fn message(mut self, message: &str) -> Result<Self, GitError> {
        require_value("--message", message)?;
        self.invocation.push(format!("--message={message}"));
        Ok(self)
    }

    /// `--all`: stage tracked modifications and deletions first.
    #[must_use]
    pub fn all(mut self) -> Self {
        self.invocation.push("--all");
        self
    }

    /// `--amend`: replace the tip commit instead of adding one.
    #[must_use]
    pub fn amend(mut self) -> Self {
        self.invocation.push("--amend");
        self
    }

    /// `--allow-empty`: permit a commit with no changes.
    #[must_use]
    pub fn allow_empty(mut self) -> Self {
        self.invocation.push("--allow-empty");
        self
    }

    /// `--allow-empty-message`: permit a commit with an empty message.
    #[must_use]
    pub fn allow_empty_message(mut self) -> Self {
        self.invocation.push("--allow-empty-message");
        self
    }

    /// `--no-verify`: skip pre-commit and commit-msg hooks.
    #[must_use]
    pub fn no_verify(mut self) -> Self {
        self.invocation.push("--no-verify");
        self
    }

    /// `--quiet`: suppress the summary message.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// `--verbose`: show the staged diff in the message template.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.invocation.push("--verbose");
        self
    }

    /// `--author=<author>`: override the commit author.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `author` is empty.
    pub fn author(mut self, author: &str) -> Result<Self, GitError> {
        require_value("--author", author)?;
        self.invocation.push(format!("--author={author}"));
        Ok(self)
    }

    /// `--date=<date>`: override the author date.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `date` is empty.
    pub fn date(mut self, date: &str) -> Result<Self, GitError> {
        require_value("--date", date)?;
        self.invocation.push(format!("--date={date}"));
        Ok(self)
    }

    /// `--reuse-message=<commit>`: take message and authorship from an
    /// existing commit.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `commit` is empty.
    pub fn reuse_message(mut self, commit: &str) -> Result<Self, GitError> {
        require_value("--reuse-message", commit)?;
        self.invocation.push(format!("--reuse-message={commit}"));
        Ok(self)
    }

    /// `--fixup=<commit>`: create a fixup commit for autosquash.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `commit` is empty.
    pub fn fixup(mut self, commit: &str) -> Result<Self, GitError> {
        require_value("--fixup", commit)?;
        self.invocation.push(format!("--fixup={commit}"));
        Ok(self)
    }

    /// `--squash=<commit>`: create a squash commit for autosquash.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `commit` is empty.
    pub fn squash(mut self, commit: &str) -> Result<Self, GitError> {
        require_value("--squash", commit)?;
        self.invocation.push(format!("--squash={commit}"));
        Ok(self)
    }

    /// `--gpg-sign`: sign with the committer's default key.
    ///
    /// Also marks signing as explicitly handled, so the context's
    /// identity is not injected on top.
    #[must_use]
    pub fn gpg_sign(mut self) -> Self {
        self.invocation.push("--gpg-sign");
        self.signing_set = true;
        self
    }

    /// `--gpg-sign=<identity>`: sign with a specific key.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `identity` is empty.
    pub fn gpg_sign_as(mut self, identity: &str) -> Result<Self, GitError> {
        require_value("--gpg-sign", identity)?;
        self.invocation.push(format!("--gpg-sign={identity}"));
        self.signing_set = true;
        Ok(self)
    }

    /// `--no-gpg-sign`: do not sign, overriding context configuration.
    #[must_use]
    pub fn no_gpg_sign(mut self) -> Self {
        self.invocation.push("--no-gpg-sign");
        self.signing_set = true;
        self
    }

    /// Run `git commit`, optionally restricted to `paths`.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, paths: &[&str]) -> Result<String, GitError> {
        // Composed per attempt so repeated dry runs never stack flags.
        let mut tail = Vec::new();
        if !self.signing_set
            && let Some(identity) = self.invocation.context().commit_signing()
        {
            tail.push(format!("--gpg-sign={identity}"));
        }
        tail.extend(path_tail(paths));
        self.invocation.run_with(&tail)
    }
}
