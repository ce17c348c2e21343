//! Shared configuration consulted by every invocation at run time.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Executable launched when none has been configured.
pub const DEFAULT_EXECUTABLE: &str = "git";

/// Shared, mutable configuration for git invocations.
///
/// Cloning a `GitContext` yields a handle to the same underlying state.
/// Builders hold such a handle, and the context is read when a command
/// actually runs, so configuration changes made after a builder was created
/// still apply to its execution.
///
/// The context carries the executable name (or path) and optional signing
/// identities. When commit or tag signing is enabled, the corresponding
/// builders inject a signing flag automatically unless an invocation
/// requested signing explicitly.
#[derive(Debug, Clone, Default)]
pub struct GitContext {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug)]
struct Inner {
    executable: String,
    commit_signing: Option<String>,
    tag_signing: Option<String>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_owned(),
            commit_signing: None,
            tag_signing: None,
        }
    }
}

impl GitContext {
    /// Create a context with the default executable and signing disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The executable launched for every invocation.
    #[must_use]
    pub fn executable(&self) -> String {
        self.read().executable.clone()
    }

    /// Replace the executable, e.g. with an absolute path to a pinned git.
    pub fn set_executable(&self, executable: impl Into<String>) {
        self.write().executable = executable.into();
    }

    /// Identity commits are signed with, if commit signing is enabled.
    #[must_use]
    pub fn commit_signing(&self) -> Option<String> {
        self.read().commit_signing.clone()
    }

    /// Sign future commits as `identity` unless an invocation opts out.
    pub fn enable_commit_signing(&self, identity: impl Into<String>) {
        self.write().commit_signing = Some(identity.into());
    }

    /// Stop injecting commit signing flags.
    pub fn disable_commit_signing(&self) {
        self.write().commit_signing = None;
    }

    /// Identity tags are signed with, if tag signing is enabled.
    #[must_use]
    pub fn tag_signing(&self) -> Option<String> {
        self.read().tag_signing.clone()
    }

    /// Sign future tags as `identity` unless an invocation opts out.
    pub fn enable_tag_signing(&self, identity: impl Into<String>) {
        self.write().tag_signing = Some(identity.into());
    }

    /// Stop injecting tag signing flags.
    pub fn disable_tag_signing(&self) {
        self.write().tag_signing = None;
    }

    // A poisoned lock still holds usable plain data; take the guard either
    // way.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
