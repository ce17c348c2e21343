//! Single-use git invocations.
//!
//! An [`Invocation`] owns the argument vector for one git command, launches
//! the process with captured output, and remembers that it ran. Builders in
//! [`crate::cmd`] append their tokens here and delegate execution.
//!
//! Execution always passes the argument vector directly to the process, no
//! shell is involved. The quoted command line exists purely for logging,
//! dry runs, and error messages.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::GitError;
use crate::context::GitContext;

/// Lifecycle of an invocation. Dry runs never leave `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Pending,
    Done,
}

/// One composed git command, executable at most once.
#[derive(Debug)]
pub(crate) struct Invocation {
    ctx: GitContext,
    working_dir: PathBuf,
    args: Vec<String>,
    state: RunState,
    dry_run: bool,
    output: Option<String>,
}

impl Invocation {
    pub(crate) fn new(ctx: GitContext, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            ctx,
            working_dir: working_dir.into(),
            args: Vec::new(),
            state: RunState::Pending,
            dry_run: false,
            output: None,
        }
    }

    /// Append one token to the stored arguments.
    pub(crate) fn push(&mut self, token: impl Into<String>) {
        self.args.push(token.into());
    }

    /// Append several tokens to the stored arguments.
    pub(crate) fn push_all<I>(&mut self, tokens: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.args.extend(tokens.into_iter().map(Into::into));
    }

    pub(crate) fn set_dry_run(&mut self, enabled: bool) {
        self.dry_run = enabled;
    }

    pub(crate) const fn context(&self) -> &GitContext {
        &self.ctx
    }

    pub(crate) fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Trimmed stdout of the completed run, if one happened.
    pub(crate) fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Render the full command line, executable included, with `tail`
    /// appended after the stored arguments.
    ///
    /// The executable is read from the context here, at composition time,
    /// so a rendered line always reflects the current configuration.
    pub(crate) fn command_line_with(&self, tail: &[String]) -> String {
        let executable = self.ctx.executable();
        let mut line = quote(&executable);
        for token in self.args.iter().chain(tail) {
            line.push(' ');
            line.push_str(&quote(token));
        }
        line
    }

    pub(crate) fn command_line(&self) -> String {
        self.command_line_with(&[])
    }

    pub(crate) fn run(&mut self) -> Result<String, GitError> {
        self.run_with(&[])
    }

    /// Execute with `tail` appended after the stored arguments.
    ///
    /// The tail is composed per attempt and never stored, so repeated dry
    /// runs see identical command lines and execute-time flags cannot
    /// accumulate. A real attempt consumes the invocation whether it
    /// succeeds or fails; dry runs never do.
    pub(crate) fn run_with(&mut self, tail: &[String]) -> Result<String, GitError> {
        let command = self.command_line_with(tail);
        if self.state == RunState::Done {
            return Err(GitError::AlreadyExecuted { command });
        }
        if self.args.is_empty() && tail.is_empty() {
            return Err(GitError::InvalidInvocation);
        }
        tracing::debug!(
            working_dir = %self.working_dir.display(),
            command = %command,
            dry_run = self.dry_run,
            "git invocation"
        );
        if self.dry_run {
            return Ok(command);
        }
        self.state = RunState::Done;
        let output = Command::new(self.ctx.executable())
            .args(self.args.iter().chain(tail))
            .current_dir(&self.working_dir)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(GitError::CommandFailed {
                working_dir: self.working_dir.clone(),
                command,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code(),
            });
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let trimmed = stdout.trim_end_matches(['\r', '\n']).to_owned();
        self.output = Some(trimmed.clone());
        Ok(trimmed)
    }
}

/// Quote one token so the rendered line survives a POSIX shell round trip.
fn quote(token: &str) -> String {
    if !token.is_empty() && token.bytes().all(is_plain) {
        return token.to_owned();
    }
    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('\'');
    for ch in token.chars() {
        if ch == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    quoted
}

const fn is_plain(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'/' | b':' | b'=' | b'@' | b'+' | b'%'
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
