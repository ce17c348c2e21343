//! Fluent builders, one per git subcommand.
//!
//! Every builder follows the same grammar. [`Repository`](crate::Repository)
//! hands out the builder with its subcommand token pre-seeded, option
//! methods append tokens in call order and return `self`, and `execute`
//! runs the composed command exactly once, returning captured stdout.
//! Options with an enumerated value set validate eagerly and return
//! [`GitError::InvalidOption`](crate::GitError::InvalidOption) before
//! anything is appended.
//!
//! Positional arguments go to `execute`, not to option methods, so the
//! same builder can be dry-run several times with different tails. Builders
//! whose positionals are working-tree paths insert a `--` separator ahead
//! of them; builders taking refs or object names do not.
//!
//! ```no_run
//! use gitrig::Repository;
//!
//! # fn main() -> Result<(), gitrig::GitError> {
//! let repo = Repository::new("/path/to/repo");
//! repo.add().all().execute(&[])?;
//! repo.commit().message("checkpoint")?.execute(&[])?;
//! # Ok(())
//! # }
//! ```

mod add;
mod branch;
mod checkout;
mod clone;
mod commit;
mod config;
mod describe;
mod fetch;
mod init;
mod log;
mod ls_remote;
mod merge;
mod pull;
mod push;
mod remote;
mod reset;
mod rev_parse;
mod rm;
mod shortlog;
mod show;
mod stash;
mod status;
mod tag;

pub use add::Add;
pub use branch::Branch;
pub use checkout::Checkout;
pub use clone::CloneRepo;
pub use commit::Commit;
pub use config::Config;
pub use describe::Describe;
pub use fetch::Fetch;
pub use init::Init;
pub use log::Log;
pub use ls_remote::LsRemote;
pub use merge::Merge;
pub use pull::Pull;
pub use push::Push;
pub use remote::Remote;
pub use reset::Reset;
pub use rev_parse::RevParse;
pub use rm::Rm;
pub use shortlog::Shortlog;
pub use show::Show;
pub use stash::Stash;
pub use status::Status;
pub use tag::Tag;

use crate::GitError;

/// Validate an enumerated option value before it is appended.
pub(crate) fn require_one_of(
    option: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), GitError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(GitError::InvalidOption {
            option,
            value: value.to_owned(),
            expected: format!("one of {}", allowed.join(", ")),
        })
    }
}

/// Reject empty values for options that require one, so a bare
/// `--option=` never reaches git.
pub(crate) fn require_value(option: &'static str, value: &str) -> Result<(), GitError> {
    if value.is_empty() {
        Err(GitError::InvalidOption {
            option,
            value: String::new(),
            expected: "a non-empty value".to_owned(),
        })
    } else {
        Ok(())
    }
}

/// Tail for working-tree paths: `--` then the paths, or nothing at all.
pub(crate) fn path_tail(paths: &[&str]) -> Vec<String> {
    if paths.is_empty() {
        return Vec::new();
    }
    let mut tail = Vec::with_capacity(paths.len() + 1);
    tail.push("--".to_owned());
    tail.extend(paths.iter().map(|path| (*path).to_owned()));
    tail
}

/// Tail of plain arguments (refs, object names), no separator.
pub(crate) fn arg_tail(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| (*arg).to_owned()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
