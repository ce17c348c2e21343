//! The repository facade: one factory method per git subcommand.

use std::path::{Path, PathBuf};

use crate::GitError;
use crate::cmd::{
    Add, Branch, Checkout, CloneRepo, Commit, Config, Describe, Fetch, Init, Log, LsRemote, Merge,
    Pull, Push, Remote, Reset, RevParse, Rm, Shortlog, Show, Stash, Status, Tag,
};
use crate::context::GitContext;
use crate::invocation::Invocation;
use crate::parse::StatusEntry;

/// A working directory plus the shared [`GitContext`] every command
/// built from it reads.
///
/// `Repository` does not touch the directory at construction time; the
/// path may not exist yet (e.g. before [`Repository::init`] or
/// [`Repository::clone_repository`]). Each factory method returns a
/// fresh, unexecuted builder; builders are single-use and the facade can
/// hand out any number of them.
///
/// ```no_run
/// use gitrig::Repository;
///
/// # fn main() -> Result<(), gitrig::GitError> {
/// let repo = Repository::new("/path/to/repo");
/// for name in repo.branches()? {
///     println!("{name}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Repository {
    work_dir: PathBuf,
    ctx: GitContext,
}

impl Repository {
    /// A repository at `work_dir` with a fresh default context.
    #[must_use]
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self::with_context(work_dir, GitContext::new())
    }

    /// A repository at `work_dir` sharing an existing context.
    ///
    /// Several repositories may share one context; executable and
    /// signing changes then apply to all of them.
    #[must_use]
    pub fn with_context(work_dir: impl Into<PathBuf>, ctx: GitContext) -> Self {
        Self {
            work_dir: work_dir.into(),
            ctx,
        }
    }

    /// The working directory commands run in.
    #[must_use]
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// The shared context; mutate it to reconfigure every holder.
    #[must_use]
    pub const fn context(&self) -> &GitContext {
        &self.ctx
    }

    fn invocation(&self) -> Invocation {
        Invocation::new(self.ctx.clone(), &self.work_dir)
    }

    // -- builder factories --------------------------------------------------

    /// `git add` builder.
    #[must_use]
    pub fn add(&self) -> Add {
        Add::new(self.invocation())
    }

    /// `git branch` builder.
    #[must_use]
    pub fn branch(&self) -> Branch {
        Branch::new(self.invocation())
    }

    /// `git checkout` builder.
    #[must_use]
    pub fn checkout(&self) -> Checkout {
        Checkout::new(self.invocation())
    }

    /// `git clone` builder. Named to avoid [`Clone::clone`].
    #[must_use]
    pub fn clone_repository(&self) -> CloneRepo {
        CloneRepo::new(self.invocation())
    }

    /// `git commit` builder.
    #[must_use]
    pub fn commit(&self) -> Commit {
        Commit::new(self.invocation())
    }

    /// `git config` builder.
    #[must_use]
    pub fn config(&self) -> Config {
        Config::new(self.invocation())
    }

    /// `git describe` builder.
    #[must_use]
    pub fn describe(&self) -> Describe {
        Describe::new(self.invocation())
    }

    /// `git fetch` builder.
    #[must_use]
    pub fn fetch(&self) -> Fetch {
        Fetch::new(self.invocation())
    }

    /// `git init` builder.
    #[must_use]
    pub fn init(&self) -> Init {
        Init::new(self.invocation())
    }

    /// `git log` builder.
    #[must_use]
    pub fn log(&self) -> Log {
        Log::new(self.invocation())
    }

    /// `git ls-remote` builder.
    #[must_use]
    pub fn ls_remote(&self) -> LsRemote {
        LsRemote::new(self.invocation())
    }

    /// `git merge` builder.
    #[must_use]
    pub fn merge(&self) -> Merge {
        Merge::new(self.invocation())
    }

    /// `git pull` builder.
    #[must_use]
    pub fn pull(&self) -> Pull {
        Pull::new(self.invocation())
    }

    /// `git push` builder.
    #[must_use]
    pub fn push(&self) -> Push {
        Push::new(self.invocation())
    }

    /// `git remote` builder.
    #[must_use]
    pub fn remote(&self) -> Remote {
        Remote::new(self.invocation())
    }

    /// `git reset` builder.
    #[must_use]
    pub fn reset(&self) -> Reset {
        Reset::new(self.invocation())
    }

    /// `git rev-parse` builder.
    #[must_use]
    pub fn rev_parse(&self) -> RevParse {
        RevParse::new(self.invocation())
    }

    /// `git rm` builder.
    #[must_use]
    pub fn rm(&self) -> Rm {
        Rm::new(self.invocation())
    }

    /// `git shortlog` builder.
    #[must_use]
    pub fn shortlog(&self) -> Shortlog {
        Shortlog::new(self.invocation())
    }

    /// `git show` builder.
    #[must_use]
    pub fn show(&self) -> Show {
        Show::new(self.invocation())
    }

    /// `git stash` builder.
    #[must_use]
    pub fn stash(&self) -> Stash {
        Stash::new(self.invocation())
    }

    /// `git status` builder.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::new(self.invocation())
    }

    /// `git tag` builder.
    #[must_use]
    pub fn tag(&self) -> Tag {
        Tag::new(self.invocation())
    }

    // -- convenience one-shots ----------------------------------------------

    /// Whether the working directory already holds a repository.
    ///
    /// Probes for `.git` without spawning git. Accepts both a directory
    /// (normal checkout) and a file (linked worktree).
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.work_dir.join(".git").exists()
    }

    /// Run `git init` unless the directory already holds a repository.
    ///
    /// Returns `true` when an init actually ran.
    ///
    /// # Errors
    /// Returns an error if the process could not be started or git
    /// exited non-zero.
    pub fn init_if_needed(&self) -> Result<bool, GitError> {
        if self.is_initialized() {
            return Ok(false);
        }
        self.init().execute(None)?;
        Ok(true)
    }

    /// The short name of the current branch (`HEAD` when detached).
    ///
    /// # Errors
    /// Returns an error if the process could not be started or git
    /// exited non-zero.
    pub fn current_branch(&self) -> Result<String, GitError> {
        let mut invocation = self.invocation();
        invocation.push_all(["rev-parse", "--abbrev-ref", "HEAD"]);
        invocation.run()
    }

    /// The object id HEAD points at.
    ///
    /// # Errors
    /// Returns an error if the process could not be started or git
    /// exited non-zero (e.g. an unborn branch).
    pub fn head_id(&self) -> Result<String, GitError> {
        let mut invocation = self.invocation();
        invocation.push_all(["rev-parse", "HEAD"]);
        invocation.run()
    }

    /// The version line of the configured executable.
    ///
    /// # Errors
    /// Returns an error if the process could not be started or git
    /// exited non-zero.
    pub fn version(&self) -> Result<String, GitError> {
        let mut invocation = self.invocation();
        invocation.push("--version");
        invocation.run()
    }

    /// Local branch names.
    ///
    /// # Errors
    /// Returns an error if the process could not be started or git
    /// exited non-zero.
    pub fn branches(&self) -> Result<Vec<String>, GitError> {
        self.branch().names()
    }

    /// Configured remote names.
    ///
    /// # Errors
    /// Returns an error if the process could not be started or git
    /// exited non-zero.
    pub fn remotes(&self) -> Result<Vec<String>, GitError> {
        self.remote().names()
    }

    /// Porcelain status of the whole working tree.
    ///
    /// # Errors
    /// Returns an error if the process could not be started or git
    /// exited non-zero.
    pub fn status_entries(&self) -> Result<Vec<StatusEntry>, GitError> {
        self.status().entries(&[])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
