//! Error types for git invocations.
//!
//! [`GitError`] is the single error type returned throughout this crate.
//! Variants are structured so callers can match on the failure mode (bad
//! builder input, repeated execution, non-zero exit, spawn failure) without
//! parsing error messages. [`GitError::CommandFailed`] carries the full
//! captured output of the failed process for diagnostics.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by command builders and
/// [`Repository`](crate::Repository) operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// An invocation reached execution with no arguments at all.
    ///
    /// Builders always seed their subcommand token, so this indicates an
    /// invocation that was never populated.
    #[error("refusing to run an empty git invocation")]
    InvalidInvocation,

    /// A second execution was attempted on an invocation that already ran.
    ///
    /// Each invocation runs at most once; compose a fresh builder to run
    /// the command again. Dry runs do not consume the invocation.
    #[error("`{command}` has already been executed")]
    AlreadyExecuted {
        /// The composed command line of the consumed invocation.
        command: String,
    },

    /// A builder option was given a value outside its accepted set.
    ///
    /// Raised before anything is appended to the command, at the offending
    /// option call.
    #[error("invalid value `{value}` for `{option}`: expected {expected}")]
    InvalidOption {
        /// The option that rejected the value, e.g. `--untracked-files`.
        option: &'static str,
        /// The offending value as given.
        value: String,
        /// Description of the accepted values.
        expected: String,
    },

    /// The process ran and reported failure.
    #[error("`{command}` {} in `{}`{}", describe_exit(*exit_code), working_dir.display(), failure_detail(stderr, stdout))]
    CommandFailed {
        /// Directory the process was launched in.
        working_dir: PathBuf,
        /// The composed command line that failed.
        command: String,
        /// Captured standard output, untrimmed.
        stdout: String,
        /// Captured standard error, untrimmed.
        stderr: String,
        /// Exit code, or `None` when the process died to a signal.
        exit_code: Option<i32>,
    },

    /// The process could not be started at all.
    ///
    /// Usually a missing or non-executable binary, or a working directory
    /// that does not exist.
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        /// The composed command line that could not be started.
        command: String,
        /// The underlying error from process creation.
        #[source]
        source: std::io::Error,
    },
}

fn describe_exit(code: Option<i32>) -> String {
    code.map_or_else(
        || "was terminated by a signal".to_owned(),
        |code| format!("exited with code {code}"),
    )
}

// Prefer stderr for the message; git writes its diagnostics there. Fall
// back to stdout for the handful of commands that report failure on stdout.
fn failure_detail(stderr: &str, stdout: &str) -> String {
    let detail = if stderr.trim().is_empty() { stdout } else { stderr };
    let detail = detail.trim();
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {detail}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
