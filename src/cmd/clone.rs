//! `git clone`: copy a repository into a new directory.

use crate::GitError;
use crate::cmd::require_value;
use crate::invocation::Invocation;

/// Builder for `git clone`.
///
/// Named `CloneRepo` so the facade method does not collide with
/// [`Clone::clone`]. The source URL and optional target directory go to
/// [`CloneRepo::execute`].
#[derive(Debug)]
pub struct CloneRepo {
    invocation: Invocation,
}

impl CloneRepo {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("clone");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--bare`: make a bare repository.
    #[must_use]
    pub fn bare(mut self) -> Self {
        self.invocation.push("--bare");
        self
    }

    /// `--mirror`: mirror all refs, implies `--bare`.
    #[must_use]
    pub fn mirror(mut self) -> Self {
        self.invocation.push("--mirror");
        self
    }

    /// `--local`: optimize for a source on the same filesystem.
    #[must_use]
    pub fn local(mut self) -> Self {
        self.invocation.push("--local");
        self
    }

    /// `--quiet`: suppress progress reporting.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// `--no-checkout`: skip checking out HEAD after cloning.
    #[must_use]
    pub fn no_checkout(mut self) -> Self {
        self.invocation.push("--no-checkout");
        self
    }

    /// `--single-branch`: clone history of one branch only.
    #[must_use]
    pub fn single_branch(mut self) -> Self {
        self.invocation.push("--single-branch");
        self
    }

    /// `--recurse-submodules`: initialize submodules after cloning.
    #[must_use]
    pub fn recurse_submodules(mut self) -> Self {
        self.invocation.push("--recurse-submodules");
        self
    }

    /// `--depth=<n>`: shallow clone with truncated history.
    #[must_use]
    pub fn depth(mut self, depth: u32) -> Self {
        self.invocation.push(format!("--depth={depth}"));
        self
    }

    /// `--branch=<name>`: check out this branch instead of HEAD.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `name` is empty.
    pub fn branch(mut self, name: &str) -> Result<Self, GitError> {
        require_value("--branch", name)?;
        self.invocation.push(format!("--branch={name}"));
        Ok(self)
    }

    /// `--origin=<name>`: name the upstream remote something other than
    /// `origin`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `name` is empty.
    pub fn origin(mut self, name: &str) -> Result<Self, GitError> {
        require_value("--origin", name)?;
        self.invocation.push(format!("--origin={name}"));
        Ok(self)
    }

    /// Run `git clone` from `repository`, optionally into `directory`.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero. Also returns
    /// [`GitError::InvalidOption`] when `repository` is empty.
    pub fn execute(
        &mut self,
        repository: &str,
        directory: Option<&str>,
    ) -> Result<String, GitError> {
        require_value("<repository>", repository)?;
        let mut tail = vec![repository.to_owned()];
        if let Some(directory) = directory {
            tail.push(directory.to_owned());
        }
        self.invocation.run_with(&tail)
    }
}
