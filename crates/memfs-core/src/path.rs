//! Filesystem-scoped path algebra.
//!
//! [`FsPath`] is an immutable address made of ordered segments, an
//! absolute/relative flag, and the identity of the filesystem instance
//! that produced it. Parsing collapses repeated and trailing separators;
//! every later operation works on whole segments and never re-normalizes
//! behind the caller's back.
//!
//! Two paths are equal only when they were produced by the *same*
//! filesystem instance: identical text bound to two different instances
//! compares unequal by design.
//!
//! # Examples
//!
//! ```
//! use memfs_core::{FsId, FsPath};
//!
//! let fs = FsId::new();
//! let path = FsPath::parse("/a/b/", fs)?;
//!
//! assert!(path.is_absolute());
//! assert_eq!(path.count(), 2);
//! assert_eq!(path, FsPath::parse("/a//b", fs)?);
//! assert_eq!(path.to_string(), "/a/b");
//! # Ok::<(), memfs_core::FsError>(())
//! ```

use crate::error::{FsError, Result};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// The path separator token.
pub const SEPARATOR: &str = "/";

const PARENT: &str = "..";
const CURRENT: &str = ".";

/// Opaque identity of one filesystem instance.
///
/// Every [`FsPath`] carries the `FsId` of the filesystem that produced
/// it; path equality and resolution are scoped to that identity. Two
/// filesystems never share an `FsId`, even when registered under the
/// same external identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FsId(Uuid);

impl FsId {
    /// Creates a fresh, globally unique filesystem identity.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FsId {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable, filesystem-scoped path.
///
/// See the [module documentation](self) for the parsing and equality
/// rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FsPath {
    fs: FsId,
    absolute: bool,
    segments: Vec<String>,
}

impl FsPath {
    /// Parses a raw path string bound to the given filesystem identity.
    ///
    /// The string is split on `/`; empty segments (repeated or trailing
    /// separators) are dropped, and a leading separator marks the path
    /// absolute. `"/"`, `"//"` and `"///"` all parse to the root.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::InvalidArgument`] when `raw` is empty, or when
    /// an absolute path starts with a `..` segment (which would ascend
    /// past the root).
    ///
    /// # Examples
    ///
    /// ```
    /// use memfs_core::{FsId, FsPath};
    ///
    /// let fs = FsId::new();
    /// assert_eq!(FsPath::parse("/a/", fs)?, FsPath::parse("//a", fs)?);
    /// assert!(FsPath::parse("", fs).is_err());
    /// assert!(FsPath::parse("/..", fs).is_err());
    /// # Ok::<(), memfs_core::FsError>(())
    /// ```
    pub fn parse(raw: &str, fs: FsId) -> Result<Self> {
        if raw.is_empty() {
            return Err(FsError::invalid("empty path"));
        }
        let absolute = raw.starts_with(SEPARATOR);
        let segments: Vec<String> = raw
            .split(SEPARATOR)
            .filter(|part| !part.is_empty())
            .map(ToString::to_string)
            .collect();
        if absolute && segments.first().is_some_and(|first| first == PARENT) {
            return Err(FsError::invalid(format!(
                "absolute path ascends past root: {raw}"
            )));
        }
        Ok(Self {
            fs,
            absolute,
            segments,
        })
    }

    /// The zero-segment absolute path of the given instance.
    pub(crate) const fn root_for(fs: FsId) -> Self {
        Self {
            fs,
            absolute: true,
            segments: Vec::new(),
        }
    }

    /// Returns the identity of the owning filesystem instance.
    #[must_use]
    pub const fn filesystem(&self) -> FsId {
        self.fs
    }

    /// Returns `true` if this path is absolute.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Returns the ordered segment sequence.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments (0 for the root).
    #[must_use]
    pub const fn count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::InvalidArgument`] when `index` is outside
    /// `[0, count)`, including any index on the zero-segment root.
    pub fn segment(&self, index: usize) -> Result<&str> {
        self.segments
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| {
                FsError::invalid(format!(
                    "segment index {index} out of range for path with {} segments",
                    self.segments.len()
                ))
            })
    }

    /// Returns the root of this path, or `None` for a relative path.
    ///
    /// The root is the zero-segment absolute path sharing this path's
    /// filesystem identity; the root is its own root.
    #[must_use]
    pub fn root(&self) -> Option<Self> {
        self.absolute.then(|| Self {
            fs: self.fs,
            absolute: true,
            segments: Vec::new(),
        })
    }

    /// Returns the last segment as a single-segment relative path, or
    /// `None` for the zero-segment root.
    #[must_use]
    pub fn file_name(&self) -> Option<Self> {
        self.segments.last().map(|last| Self {
            fs: self.fs,
            absolute: false,
            segments: vec![last.clone()],
        })
    }

    /// Returns the path formed by dropping the last segment, preserving
    /// absoluteness.
    ///
    /// The root has no parent; a single-segment absolute path's parent
    /// is the root; a single-segment relative path has no parent.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() || (!self.absolute && self.segments.len() == 1) {
            return None;
        }
        Some(Self {
            fs: self.fs,
            absolute: self.absolute,
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Returns this path as an absolute path.
    ///
    /// Absolute paths return themselves; relative paths are re-rooted at
    /// `/` with the same segment sequence.
    #[must_use]
    pub fn to_absolute(&self) -> Self {
        if self.absolute {
            return self.clone();
        }
        Self {
            fs: self.fs,
            absolute: true,
            segments: self.segments.clone(),
        }
    }

    /// Lexically resolves `.` and `..` segments without touching the
    /// tree.
    ///
    /// Leading ascents on a relative path (`..`, `../a`) are already
    /// irreducible and kept as-is. Normalization is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::InvalidArgument`] when folding the ascents of
    /// an absolute path would cross above the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use memfs_core::{FsId, FsPath};
    ///
    /// let fs = FsId::new();
    /// let folded = FsPath::parse("/a/../b", fs)?.normalize()?;
    /// assert_eq!(folded, FsPath::parse("/b", fs)?);
    ///
    /// let kept = FsPath::parse("../a", fs)?.normalize()?;
    /// assert_eq!(kept, FsPath::parse("../a", fs)?);
    /// # Ok::<(), memfs_core::FsError>(())
    /// ```
    pub fn normalize(&self) -> Result<Self> {
        let mut folded: Vec<String> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment.as_str() {
                CURRENT => {}
                PARENT => match folded.last() {
                    Some(top) if top != PARENT => {
                        folded.pop();
                    }
                    _ if self.absolute => {
                        return Err(FsError::invalid(format!(
                            "normalizing {self} ascends past root"
                        )));
                    }
                    _ => folded.push(segment.clone()),
                },
                _ => folded.push(segment.clone()),
            }
        }
        Ok(Self {
            fs: self.fs,
            absolute: self.absolute,
            segments: folded,
        })
    }

    /// Resolves `other` against this path.
    ///
    /// An absolute `other` is returned unchanged; a relative `other` is
    /// appended to this path's segments, keeping this path's
    /// absoluteness.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::FilesystemMismatch`] when `other` is bound to
    /// a different filesystem instance.
    pub fn resolve(&self, other: &Self) -> Result<Self> {
        if other.fs != self.fs {
            return Err(FsError::FilesystemMismatch);
        }
        if other.absolute {
            return Ok(other.clone());
        }
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Ok(Self {
            fs: self.fs,
            absolute: self.absolute,
            segments,
        })
    }

    /// Parses `other` and resolves it against this path.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::InvalidArgument`] when `other` does not parse.
    pub fn resolve_str(&self, other: &str) -> Result<Self> {
        let other = Self::parse(other, self.fs)?;
        self.resolve(&other)
    }

    /// Returns a relative path from this path to `other`.
    ///
    /// The delta is computed ascend-then-descend: one `..` segment for
    /// each of this path's segments past the common prefix, followed by
    /// `other`'s divergent suffix.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::FilesystemMismatch`] when the instances
    /// differ, and [`FsError::InvalidArgument`] when one path is
    /// absolute and the other relative.
    pub fn relativize(&self, other: &Self) -> Result<Self> {
        if other.fs != self.fs {
            return Err(FsError::FilesystemMismatch);
        }
        if self.absolute != other.absolute {
            return Err(FsError::invalid(
                "cannot relativize an absolute path against a relative one",
            ));
        }
        let common = self
            .segments
            .iter()
            .zip(&other.segments)
            .take_while(|(a, b)| a == b)
            .count();
        let mut segments: Vec<String> = Vec::new();
        segments.resize(self.segments.len() - common, PARENT.to_string());
        segments.extend(other.segments[common..].iter().cloned());
        Ok(Self {
            fs: self.fs,
            absolute: false,
            segments,
        })
    }

    /// Returns `true` if this path equals-or-extends `other` from the
    /// front: same filesystem instance, same absoluteness, and `other`'s
    /// segments are a whole-segment prefix of this path's.
    ///
    /// Never normalizes: `/b/../a` does not start with `/a` even though
    /// its normalization does.
    #[must_use]
    pub fn starts_with(&self, other: &Self) -> bool {
        other.fs == self.fs
            && other.absolute == self.absolute
            && self.segments.starts_with(&other.segments)
    }

    /// Returns `true` if this path ends with `other`'s whole segments.
    ///
    /// An absolute `other` only matches this path in its entirety; a
    /// relative `other` matches any whole-segment suffix, so `/a/b/c`
    /// ends with the relative path `a/b/c`.
    #[must_use]
    pub fn ends_with(&self, other: &Self) -> bool {
        if other.fs != self.fs {
            return false;
        }
        if other.absolute {
            return self.absolute && self.segments == other.segments;
        }
        self.segments.ends_with(&other.segments)
    }

    /// Returns `true` if this path's rendered text starts with the
    /// rendered text of `other` parsed under this path's rules.
    ///
    /// The comparison is literal and segment-boundary-insensitive:
    /// `a/bc/d` starts with the string `"a/b"` even though it does not
    /// start with the *path* `a/b`. An unparseable `other` is simply
    /// `false`.
    #[must_use]
    pub fn starts_with_str(&self, other: &str) -> bool {
        Self::parse(other, self.fs)
            .is_ok_and(|parsed| self.to_string().starts_with(&parsed.to_string()))
    }

    /// Returns `true` if this path's rendered text ends with the
    /// rendered text of `other` parsed under this path's rules.
    ///
    /// Like [`starts_with_str`](Self::starts_with_str), the comparison
    /// is literal: `a/bc/d` ends with the string `"c/d"`.
    #[must_use]
    pub fn ends_with_str(&self, other: &str) -> bool {
        Self::parse(other, self.fs)
            .is_ok_and(|parsed| self.to_string().ends_with(&parsed.to_string()))
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str(if self.absolute { SEPARATOR } else { "" });
        }
        if self.absolute {
            f.write_str(SEPARATOR)?;
        }
        f.write_str(&self.segments.join(SEPARATOR))
    }
}

impl Ord for FsPath {
    /// Total order: absolute paths sort strictly before relative paths;
    /// within an absoluteness class, segment sequences compare
    /// lexicographically with a strict prefix sorting first. Paths from
    /// different filesystem instances are ordered by instance identity
    /// last, keeping the order consistent with equality.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .absolute
            .cmp(&self.absolute)
            .then_with(|| self.segments.cmp(&other.segments))
            .then_with(|| self.fs.cmp(&other.fs))
    }
}

impl PartialOrd for FsPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
