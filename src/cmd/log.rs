//! `git log`: show commit history.

use crate::GitError;
use crate::cmd::{path_tail, require_value};
use crate::invocation::Invocation;

/// Builder for `git log`.
///
/// The revision range and pathspecs go to [`Log::execute`]; paths are
/// separated with `--` so ambiguous names resolve as paths.
#[derive(Debug)]
pub struct Log {
    invocation: Invocation,
}

impl Log {
    pub(crate) fn new(mut invocation: Invocation) -> Self {
        invocation.push("log");
        Self { invocation }
    }

    /// Compose and return the command line instead of running it.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.invocation.set_dry_run(enabled);
        self
    }

    /// `--max-count=<n>`: limit the number of commits shown.
    #[must_use]
    pub fn max_count(mut self, count: u32) -> Self {
        self.invocation.push(format!("--max-count={count}"));
        self
    }

    /// `--skip=<n>`: skip commits before starting to show.
    #[must_use]
    pub fn skip(mut self, count: u32) -> Self {
        self.invocation.push(format!("--skip={count}"));
        self
    }

    /// `--oneline`: one line per commit.
    #[must_use]
    pub fn oneline(mut self) -> Self {
        self.invocation.push("--oneline");
        self
    }

    /// `--abbrev-commit`: show abbreviated commit ids.
    #[must_use]
    pub fn abbrev_commit(mut self) -> Self {
        self.invocation.push("--abbrev-commit");
        self
    }

    /// `--no-merges`: skip merge commits.
    #[must_use]
    pub fn no_merges(mut self) -> Self {
        self.invocation.push("--no-merges");
        self
    }

    /// `--merges`: only merge commits.
    #[must_use]
    pub fn merges(mut self) -> Self {
        self.invocation.push("--merges");
        self
    }

    /// `--first-parent`: follow only the first parent of merges.
    #[must_use]
    pub fn first_parent(mut self) -> Self {
        self.invocation.push("--first-parent");
        self
    }

    /// `--reverse`: oldest commit first.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.invocation.push("--reverse");
        self
    }

    /// `--name-status`: show changed paths with status letters.
    #[must_use]
    pub fn name_status(mut self) -> Self {
        self.invocation.push("--name-status");
        self
    }

    /// `--pretty=<style>`: format commits with a named or custom style.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `style` is empty.
    pub fn pretty(mut self, style: &str) -> Result<Self, GitError> {
        require_value("--pretty", style)?;
        self.invocation.push(format!("--pretty={style}"));
        Ok(self)
    }

    /// `--author=<pattern>`: limit to commits by matching authors.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `pattern` is empty.
    pub fn author(mut self, pattern: &str) -> Result<Self, GitError> {
        require_value("--author", pattern)?;
        self.invocation.push(format!("--author={pattern}"));
        Ok(self)
    }

    /// `--grep=<pattern>`: limit to commits whose message matches.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `pattern` is empty.
    pub fn grep(mut self, pattern: &str) -> Result<Self, GitError> {
        require_value("--grep", pattern)?;
        self.invocation.push(format!("--grep={pattern}"));
        Ok(self)
    }

    /// `--since=<date>`: only commits after the date.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `date` is empty.
    pub fn since(mut self, date: &str) -> Result<Self, GitError> {
        require_value("--since", date)?;
        self.invocation.push(format!("--since={date}"));
        Ok(self)
    }

    /// `--until=<date>`: only commits before the date.
    ///
    /// # Errors
    /// Returns [`GitError::InvalidOption`] when `date` is empty.
    pub fn until(mut self, date: &str) -> Result<Self, GitError> {
        require_value("--until", date)?;
        self.invocation.push(format!("--until={date}"));
        Ok(self)
    }

    /// Run `git log`, optionally over a revision range and pathspecs.
    ///
    /// # Errors
    /// Returns an error if the invocation already ran, the process could
    /// not be started, or git exited non-zero.
    pub fn execute(&mut self, range: Option<&str>, paths: &[&str]) -> Result<String, GitError> {
        let mut tail = Vec::new();
        if let Some(range) = range {
            tail.push(range.to_owned());
        }
        tail.extend(path_tail(paths));
        self.invocation.run_with(&tail)
    }
}
