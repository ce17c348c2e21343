//! Parsers for machine-readable git output.
//!
//! Free functions over borrowed strings: no I/O, no state. [`status_entries`]
//! understands `--porcelain` v1 status lines, [`name_list`] cleans
//! `branch`/`tag`-style name listings, and [`ref_map`] indexes `ls-remote`
//! output by ref name. All three are lenient: lines that do not match the
//! expected shape are skipped, never reported as errors.

use std::collections::BTreeMap;
use std::fmt;

/// One side of a porcelain v1 status code (index or worktree column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// `M`: content modified.
    Modified,
    /// `A`: addition staged.
    Added,
    /// `D`: deleted.
    Deleted,
    /// `R`: renamed.
    Renamed,
    /// `C`: copied.
    Copied,
    /// `U`: unmerged conflict entry.
    Unmerged,
    /// `?`: untracked.
    Untracked,
    /// `!`: ignored.
    Ignored,
}

impl StatusCode {
    /// Map one porcelain column character. Space and unrecognized
    /// characters map to `None`.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'M' => Some(Self::Modified),
            'A' => Some(Self::Added),
            'D' => Some(Self::Deleted),
            'R' => Some(Self::Renamed),
            'C' => Some(Self::Copied),
            'U' => Some(Self::Unmerged),
            '?' => Some(Self::Untracked),
            '!' => Some(Self::Ignored),
            _ => None,
        }
    }

    /// The porcelain column character for this code.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Modified => 'M',
            Self::Added => 'A',
            Self::Deleted => 'D',
            Self::Renamed => 'R',
            Self::Copied => 'C',
            Self::Unmerged => 'U',
            Self::Untracked => '?',
            Self::Ignored => '!',
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One porcelain status line: a path plus its index and worktree codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Path as printed by git. Quoted paths have the surrounding quotes
    /// removed; rename lines keep their `old -> new` form.
    pub path: String,
    /// Staged (index) side, `None` when the column is a space.
    pub index: Option<StatusCode>,
    /// Working tree side, `None` when the column is a space.
    pub worktree: Option<StatusCode>,
}

impl StatusEntry {
    /// True when the index column carries a code.
    #[must_use]
    pub const fn is_staged(&self) -> bool {
        self.index.is_some()
    }

    /// True for `??` entries.
    #[must_use]
    pub const fn is_untracked(&self) -> bool {
        matches!(self.index, Some(StatusCode::Untracked))
            || matches!(self.worktree, Some(StatusCode::Untracked))
    }
}

/// Parse `git status --porcelain` (v1) output.
///
/// A line yields an entry when at least one of its two status columns
/// carries a recognized code and a path follows. Blank lines, short lines,
/// and lines with two blank or unrecognized columns are skipped.
#[must_use]
pub fn status_entries(raw: &str) -> Vec<StatusEntry> {
    raw.lines().filter_map(parse_status_line).collect()
}

fn parse_status_line(line: &str) -> Option<StatusEntry> {
    let mut chars = line.chars();
    let index = StatusCode::from_char(chars.next()?);
    let worktree = StatusCode::from_char(chars.next()?);
    if index.is_none() && worktree.is_none() {
        return None;
    }
    // Exactly the separator column is dropped, never path whitespace.
    let rest = chars.as_str();
    let path = rest.strip_prefix(' ').unwrap_or(rest);
    if path.is_empty() {
        return None;
    }
    Some(StatusEntry {
        path: unquote(path).to_owned(),
        index,
        worktree,
    })
}

// git double-quotes paths containing specials; drop the surrounding quotes
// but leave the escaped contents alone.
fn unquote(path: &str) -> &str {
    path.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(path)
}

/// Clean a newline-separated name listing (`branch`, `tag`, `remote`).
///
/// Strips at most one leading `*` current-branch marker per line, trims
/// surrounding whitespace, and drops empty lines. Order is preserved.
#[must_use]
pub fn name_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            let name = line.trim();
            name.strip_prefix('*').map_or(name, str::trim_start)
        })
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Index `ls-remote` output as ref name to object id.
///
/// Each useful line splits into exactly two whitespace-separated fields,
/// object id then ref name; anything else is skipped. `^{}` peeled-tag
/// entries are dropped so an annotated tag maps to the tag object itself.
/// When a ref name repeats, the last occurrence wins.
#[must_use]
pub fn ref_map(raw: &str) -> BTreeMap<String, String> {
    let mut refs = BTreeMap::new();
    for line in raw.lines() {
        let mut fields = line.split_whitespace();
        let (Some(oid), Some(name), None) = (fields.next(), fields.next(), fields.next()) else {
            continue;
        };
        if name.ends_with("^{}") {
            continue;
        }
        refs.insert(name.to_owned(), oid.to_owned());
    }
    refs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------
