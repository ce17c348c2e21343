//! `git config`: read and write configuration values.

use crate::GitError;
use crate::cmd::{arg_tail, require_one_of, require_value};
use crate::invocation::Invocation;

/// Builder for `git config`.
///
/// The key and value are positional: `execute(&["user.name", "Jo"])`
/// sets, `execute(&["user.name"])` reads.
#[derive(Debug)]
pub struct Config {
    invocation: Invocation,
}

impl Config {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("config");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--global`: use the user-level configuration file.
    #[must_use]
    pub fn global(mut self) -> Self {
        self.invocation.push("--global");
        self
    }

    /// `--system`: use the system-level configuration file.
    #[must_use]
    pub fn system(mut self) -> Self {
        self.invocation.push("--system");
        self
    }

    /// `--local`: use the repository configuration file.
    #[must_use]
    pub fn local(mut self) -> Self {
        self.invocation.push("--local");
        self
    }

    /// `--file=<path>`: use an explicit configuration file.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `path` is empty.
    pub fn file(mut self, path: &str) -> Result<Self, GitError> {
        require_value("--file", path)?;
        self.invocation.push(format!("--file={path}"));
        Ok(self)
    }

    /// `--list`: list all variables with their values.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.invocation.push("--list");
        self
    }

    /// `--get`: read one value.
    #[must_use]
    pub fn get(mut self) -> Self {
        self.invocation.push("--get");
        self
    }

    /// `--get-all`: read every value of a multi-valued key.
    #[must_use]
    pub fn get_all(mut self) -> Self {
        self.invocation.push("--get-all");
        self
    }

    /// `--add`: append rather than replace.
    #[must_use]
    pub fn add(mut self) -> Self {
        self.invocation.push("--add");
        self
    }

    /// `--unset`: remove the key.
    #[must_use]
    pub fn unset(mut self) -> Self {
        self.invocation.push("--unset");
        self
    }

    /// `--type=<type>`: canonicalize the value. Accepts `bool`, `int`,
    /// `bool-or-int`, `path`.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] for any other type.
    pub fn value_type(mut self, value_type: &str) -> Result<Self, GitError> {
        require_one_of("--type", value_type, &["bool", "int", "bool-or-int", "path"])?;
        self.invocation.push(format!("--type={value_type}"));
        Ok(self)
    }

    /// Run `git config` with positional `args` (key, then optionally a
    /// value).
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, args: &[&str]) -> Result<String, GitError> {
        self.invocation.run_with(&arg_tail(args))
    }
}

#[cfg(test)]
mod tests {
    use crate::{GitError, Repository};

    #[test]
    fn composes_a_scoped_set() {
        let repo = Repository::new("/repo");
        let line = repo
            .config()
            .local()
            .dry_run(true)
            .execute(&["user.name", "Test User"])
            .unwrap();
        assert_eq!(line, "git config --local user.name 'Test User'");
    }

    #[test]
    fn value_type_is_enumerated() {
        let repo = Repository::new("/repo");
        let line = repo
            .config()
            .value_type("bool-or-int")
            .unwrap()
            .get()
            .dry_run(true)
            .execute(&["core.autocrlf"])
            .unwrap();
        assert_eq!(line, "git config --type=bool-or-int --get core.autocrlf");

        let err = repo.config().value_type("float").unwrap_err();
        match err {
            GitError::InvalidOption {
                option, expected, ..
            } => {
                assert_eq!(option, "--type");
                assert_eq!(expected, "one of bool, int, bool-or-int, path");
            }
            other => panic!("expected InvalidOption, got {other:?}"),
        }
    }

    #[test]
    fn file_path_must_not_be_empty() {
        let repo = Repository::new("/repo");
        assert!(matches!(
            repo.config().file("").unwrap_err(),
            GitError::InvalidOption { option: "--file", .. }
        ));
    }
}
