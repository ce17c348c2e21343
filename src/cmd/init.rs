//! `git init`: create an empty repository.

use crate::GitError;
use crate::cmd::require_value;
use crate::invocation::Invocation;

const SHARED_WORDS: &[&str] = &[
    "false",
    "true",
    "umask",
    "group",
    "all",
    "world",
    "everybody",
];

/// Builder for `git init`.
#[derive(Debug)]
pub struct Init {
    invocation: Invocation,
}

impl Init {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("init");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--bare`: create a bare repository.
    #[must_use]
    pub fn bare(mut self) -> Self {
        self.invocation.push("--bare");
        self
    }

    /// `--quiet`: only print errors and warnings.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.invocation.push("--quiet");
        self
    }

    /// `--template=<dir>`: take repository templates from `dir`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `dir` is empty.
    pub fn template(mut self, dir: &str) -> Result<Self, GitError> {
        require_value("--template", dir)?;
        self.invocation.push(format!("--template={dir}"));
        Ok(self)
    }

    /// `--separate-git-dir=<dir>`: keep the repository outside the
    /// working tree.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `dir` is empty.
    pub fn separate_git_dir(mut self, dir: &str) -> Result<Self, GitError> {
        require_value("--separate-git-dir", dir)?;
        self.invocation.push(format!("--separate-git-dir={dir}"));
        Ok(self)
    }

    /// `--shared=<perms>`: share the repository among several users.
    /// Accepts `false`, `true`, `umask`, `group`, `all`, `world`,
    /// `everybody`, or an octal mode such as `0660`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] for any other value.
    pub fn shared(mut self, perms: &str) -> Result<Self, GitError> {
        let octal = !perms.is_empty() && perms.bytes().all(|byte| (b'0'..=b'7').contains(&byte));
        if !octal && !SHARED_WORDS.contains(&perms) {
            return Err(GitError::InvalidOption {
                option: "--shared",
                value: perms.to_owned(),
                expected: format!("one of {} or an octal mode", SHARED_WORDS.join(", ")),
            });
        }
        self.invocation.push(format!("--shared={perms}"));
        Ok(self)
    }

    /// Run `git init`, optionally targeting `directory`.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, directory: Option<&str>) -> Result<String, GitError> {
        let tail: Vec<String> = directory.map(ToOwned::to_owned).into_iter().collect();
        self.invocation.run_with(&tail)
    }
}

#[cfg(test)]
mod tests {
    use crate::{GitError, Repository};

    #[test]
    fn composes_a_bare_init() {
        let repo = Repository::new("/work");
        let line = repo
            .init()
            .bare()
            .quiet()
            .dry_run(true)
            .execute(Some("store.git"))
            .unwrap();
        assert_eq!(line, "git init --bare --quiet store.git");
    }

    #[test]
    fn shared_accepts_words_and_octal() {
        let repo = Repository::new("/work");
        let line = repo
            .init()
            .shared("group")
            .unwrap()
            .dry_run(true)
            .execute(None)
            .unwrap();
        assert_eq!(line, "git init --shared=group");

        let line = repo
            .init()
            .shared("0660")
            .unwrap()
            .dry_run(true)
            .execute(None)
            .unwrap();
        assert_eq!(line, "git init --shared=0660");
    }

    #[test]
    fn shared_rejects_other_values() {
        let repo = Repository::new("/work");
        for bad in ["0668", "everyone", "", "07 7"] {
            assert!(
                matches!(
                    repo.init().shared(bad),
                    Err(GitError::InvalidOption {
                        option: "--shared",
                        ..
                    })
                ),
                "`{bad}` should be rejected"
            );
        }
    }
}
