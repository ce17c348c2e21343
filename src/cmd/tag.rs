//! `git tag`: create, list, and delete tags.

use crate::GitError;
use crate::cmd::{arg_tail, require_value};
use crate::invocation::Invocation;
use crate::parse;

/// Builder for `git tag`.
///
/// When the shared [`GitContext`](crate::GitContext) has tag signing
/// enabled and no signing option was called on this builder, `execute`
/// injects a single `--local-user=<identity>` flag. Calling
/// [`Tag::sign`], [`Tag::sign_by`], or [`Tag::no_sign`] suppresses the
/// injection.
#[derive(Debug)]
pub struct Tag {
    invocation: Invocation,
    signing_set: bool,
}

impl Tag {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("tag");
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

    /// `--annotate`: create an annotated tag object.
    #[must_use]
    pub fn annotate(mut self) -> Self {
        self.invocation.push("--annotate");
        self
    }

    /// `--message=<msg>`: the tag message, implies an annotated tag.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `message` is empty.
    pub fn message(mut self, message: &str) -> Result<Self, GitError> {
        require_value("--message", message)?;
        self.invocation.push(format!("--message={message}"));
        Ok(self)
    }

    /// `--delete`: delete the named tags.
    #[must_use]
    pub fn delete(mut self) -> Self {
        self.invocation.push("--delete");
        self
    }

    /// `--force`: replace an existing tag of the same name.
    #[must_use]
    pub fn force(mut self) -> Self {
        self.invocation.push("--force");
        self
    }

    /// `--list`: list mode, optionally filtered by patterns.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.invocation.push("--list");
        self
    }

    /// `--verify`: check the GPG signature of the named tags.
    #[must_use]
    pub fn verify(mut self) -> Self {
        self.invocation.push("--verify");
        self
    }

    /// `--contains=<commit>`: only list tags containing the commit.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `commit` is empty.
    pub fn contains(mut self, commit: &str) -> Result<Self, GitError> {
        require_value("--contains", commit)?;
        self.invocation.push(format!("--contains={commit}"));
        Ok(self)
    }

    /// `--sign`: make a GPG-signed tag with the default key.
    ///
    /// Also marks signing as explicitly handled, so the context's
    /// identity is not injected on top.
    #[must_use]
    pub fn sign(mut self) -> Self {
        self.invocation.push("--sign");
        self.signing_set = true;
        self
    }

    /// `--local-user=<identity>`: make a GPG-signed tag with a specific
    /// key.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `identity` is empty.
    pub fn sign_by(mut self, identity: &str) -> Result<Self, GitError> {
        require_value("--local-user", identity)?;
        self.invocation.push(format!("--local-user={identity}"));
        self.signing_set = true;
        Ok(self)
    }

    /// `--no-sign`: do not sign, overriding context configuration.
    #[must_use]
    pub fn no_sign(mut self) -> Self {
        self.invocation.push("--no-sign");
        self.signing_set = true;
        self
    }

    /// Run `git tag` with positional `args` (tag name, commit, patterns).
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, args: &[&str]) -> Result<String, GitError> {
        let mut tail = Vec::new();
        if !self.signing_set
            && let Some(identity) = self.invocation.context().tag_signing()
        {
            tail.push(format!("--local-user={identity}"));
        }
        tail.extend(arg_tail(args));
        self.invocation.run_with(&tail)
    }

    /// List tag names, one per line as git prints them.
    ///
    /// # Errors
    /// Same failure modes as [`Tag::execute`].
    pub fn names(mut self) -> Result<Vec<String>, GitError> {
        let raw = self.execute(&[])?;
        Ok(parse::name_list(&raw))
    }
}
