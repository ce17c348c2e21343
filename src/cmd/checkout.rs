//! `git checkout`: switch branches or restore working tree files.

use crate::GitError;
use crate::cmd::{path_tail, require_value};
use crate::invocation::Invocation;

/// Builder for `git checkout`.
///
/// The target (branch, commit) and any pathspecs go to
/// [`Checkout::execute`]; pathspecs are separated with `--`.
#[derive(Debug)]
pub struct Checkout {
    invocation: Invocation,
}

impl Checkout {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("checkout");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--quiet`: suppress feedback messages.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// `--force`: throw away local modifications.
    #[must_use]
    pub fn force(mut self) -> Self {
        self.invocation.push("--force");
        self
    }

    /// `--merge`: three-way merge local modifications into the target.
    #[must_use]
    pub fn merge(mut self) -> Self {
        self.invocation.push("--merge");
        self
    }

    /// `--detach`: check out a commit without moving any branch.
    #[must_use]
    pub fn detach(mut self) -> Self {
        self.invocation.push("--detach");
        self
    }

    /// `--track`: set up upstream configuration for the new branch.
    #[must_use]
    pub fn track(mut self) -> Self {
        self.invocation.push("--track");
        self
    }

    /// `--no-track`: skip upstream configuration.
    #[must_use]
    pub fn no_track(mut self) -> Self {
        self.invocation.push("--no-track");
        self
    }

    /// `--ours`: for unmerged paths, check out stage 2.
    #[must_use]
    pub fn ours(mut self) -> Self {
        self.invocation.push("--ours");
        self
    }

    /// `--theirs`: for unmerged paths, check out stage 3.
    #[must_use]
    pub fn theirs(mut self) -> Self {
        self.invocation.push("--theirs");
        self
    }

    /// `-b <name>`: create the branch and check it out.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `name` is empty.
    pub fn new_branch(mut self, name: &str) -> Result<Self, GitError> {
        require_value("-b", name)?;
        self.invocation.push_all(["-b", name]);
        Ok(self)
    }

    /// `-B <name>`: create or reset the branch, then check it out.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `name` is empty.
    pub fn force_new_branch(mut self, name: &str) -> Result<Self, GitError> {
        require_value("-B", name)?;
        self.invocation.push_all(["-B", name]);
        Ok(self)
    }

    /// `--orphan=<name>`: start an unborn branch with no history.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `name` is empty.
    pub fn orphan(mut self, name: &str) -> Result<Self, GitError> {
        require_value("--orphan", name)?;
        self.invocation.push(format!("--orphan={name}"));
        Ok(self)
    }

    /// Run `git checkout`, optionally against a target ref and pathspecs.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, target: Option<&str>, paths: &[&str]) -> Result<String, GitError> {
        let mut tail = Vec::new();
        if let Some(target) = target {
            tail.push(target.to_owned());
        }
        tail.extend(path_tail(paths));
        self.invocation.run_with(&tail)
    }
}

#[cfg(test)]
mod tests {
    use crate::{GitError, Repository};

    #[test]
    fn switches_to_a_branch() {
        let repo = Repository::new("/repo");
        let line = repo
            .checkout()
            .quiet()
            .dry_run(true)
            .execute(Some("develop"), &[])
            .unwrap();
        assert_eq!(line, "git checkout --quiet develop");
    }

    #[test]
    fn creates_a_branch_and_restores_paths() {
        let repo = Repository::new("/repo");
        let line = repo
            .checkout()
            .new_branch("feature/x")
            .unwrap()
            .dry_run(true)
            .execute(None, &[])
            .unwrap();
        assert_eq!(line, "git checkout -b feature/x");

        let line = repo
            .checkout()
            .theirs()
            .dry_run(true)
            .execute(Some("HEAD"), &["src/conflicted.rs"])
            .unwrap();
        assert_eq!(line, "git checkout --theirs HEAD -- src/conflicted.rs");
    }

    #[test]
    fn branch_names_must_not_be_empty() {
        let repo = Repository::new("/repo");
        assert!(matches!(
            repo.checkout().new_branch("").unwrap_err(),
            GitError::InvalidOption { option: "-b", .. }
        ));
        assert!(matches!(
            repo.checkout().orphan("").unwrap_err(),
            GitError::InvalidOption { option: "--orphan", .. }
        ));
    }
}
