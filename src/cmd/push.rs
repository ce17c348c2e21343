//! `git push`: update remote refs and their objects.

use crate::GitError;
use crate::cmd::arg_tail;
use crate::invocation::Invocation;

/// Builder for `git push`.
///
/// The remote and refspecs are positional and go to [`Push::execute`].
#[derive(Debug)]
pub struct Push {
    invocation: Invocation,
}

impl Push {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("push");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--all`: push all branches.
    #[must_use]
    pub fn all(mut self) -> Self {
        self.invocation.push("--all");
        self
    }

    /// `--mirror`: push all refs, deletions included.
    #[must_use]
    pub fn mirror(mut self) -> Self {
        self.invocation.push("--mirror");
        self
    }

    /// `--tags`: push all tags.
    #[must_use]
    pub fn tags(mut self) -> Self {
        self.invocation.push("--tags");
        self
    }

    /// `--delete`: delete the named remote refs.
    #[must_use]
    pub fn delete(mut self) -> Self {
        self.invocation.push("--delete");
        self
    }

    /// `--force`: allow non-fast-forward updates.
    #[must_use]
    pub fn force(mut self) -> Self {
        self.invocation.push("--force");
        self
    }

    /// `--force-with-lease`: force only if the remote ref is where we
    /// last saw it.
    #[must_use]
    pub fn force_with_lease(mut self) -> Self {
        self.invocation.push("--force-with-lease");
        self
    }

    /// `--set-upstream`: record the pushed branch as upstream.
    #[must_use]
    pub fn set_upstream(mut self) -> Self {
        self.invocation.push("--set-upstream");
        self
    }

    /// `--quiet`: suppress all non-error output.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// `--verbose`: be chatty about what is pushed.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.invocation.push("--verbose");
        self
    }

    /// Run `git push` with positional `args` (remote, then refspecs).
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero (rejected updates
    /// included).
    pub fn execute(&mut self, args: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(args))
    }
}

#[cfg(test)]
mod tests {
    use crate::Repository;

    #[test]
    fn composes_an_upstream_push() {
        let repo = Repository::new("/repo");
        let line = repo
            .push()
            .set_upstream()
            .quiet()
            .dry_run(true)
            .execute(&["origin", "feature/x"])
            .unwrap();
        assert_eq!(line, "git push --set-upstream --quiet origin feature/x");
    }

    #[test]
    fn deletes_refs_positionally() {
        let repo = Repository::new("/repo");
        let line = repo
            .push()
            .delete()
            .dry_run(true)
            .execute(&["origin", "stale-branch"])
            .unwrap();
        assert_eq!(line, "git push --delete origin stale-branch");
    }
}
