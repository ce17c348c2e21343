//! Typed command builders over the `git` executable.
//!
//! gitrig shapes argument vectors for git's subcommands, runs them as
//! child processes, and parses the porcelain outputs worth parsing. It
//! does not reimplement any git semantics; git itself is an opaque
//! subprocess contract.
//!
//! # Crate layout
//!
//! - [`repo`] — the [`Repository`] facade, one factory method per
//!   subcommand plus a few one-shot conveniences.
//! - [`cmd`] — fluent builders, one per subcommand family.
//! - [`parse`] — pure parsers for porcelain status, name listings, and
//!   `ls-remote` output.
//! - [`context`] — the shared [`GitContext`] (executable path, signing
//!   identities).
//! - [`error`] — the [`GitError`] enum returned by all fallible calls.
//!
//! # Execution model
//!
//! Every builder composes exactly one invocation and runs it at most
//! once; a second attempt returns [`GitError::AlreadyExecuted`]. Runs
//! are synchronous and blocking, argv is passed directly to the process
//! (never through a shell), and a failed exit surfaces as
//! [`GitError::CommandFailed`] carrying the captured stdout and stderr.
//! Dry-run mode returns the composed command line without launching
//! anything and may be repeated freely.
//!
//! ```no_run
//! use gitrig::Repository;
//!
//! # fn main() -> Result<(), gitrig::GitError> {
//! let repo = Repository::new("/path/to/repo");
//! repo.add().all().execute(&[])?;
//! repo.commit().message("checkpoint")?.execute(&[])?;
//! for entry in repo.status_entries()? {
//!     println!("{:?} {}", entry.index, entry.path);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cmd;
pub mod context;
pub mod error;
pub mod parse;
pub mod repo;

mod invocation;

pub use context::GitContext;
pub use error::GitError;
pub use parse::{StatusCode, StatusEntry};
pub use repo::Repository;
