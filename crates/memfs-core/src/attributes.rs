//! Basic file attributes as standalone value objects.
//!
//! Attributes are constructed by [`MemoryFs::attributes`] and carry no
//! reference back to the tree node they describe; the tree
//! representation does not have to satisfy any attribute-capability
//! interface.
//!
//! [`MemoryFs::attributes`]: crate::MemoryFs::attributes

use serde::{Deserialize, Serialize};

/// The kind of a tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// A directory with ordered, uniquely named children.
    Directory,
    /// A regular file holding one content buffer.
    Regular,
}

/// A basic attribute view over one resolved path.
///
/// Symbolic links and "other" entries do not exist in this in-memory
/// design, so [`is_symbolic_link`](Self::is_symbolic_link) and
/// [`is_other`](Self::is_other) are always `false`.
///
/// # Examples
///
/// ```
/// use memfs_core::MemoryFs;
///
/// let fs = MemoryFs::new("example");
/// let attrs = fs.attributes(&fs.path("/")?)?;
///
/// assert!(attrs.is_directory());
/// assert_eq!(attrs.size(), 0);
/// # Ok::<(), memfs_core::FsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttributes {
    kind: FileKind,
    size: u64,
}

impl FileAttributes {
    pub(crate) const fn new(kind: FileKind, size: u64) -> Self {
        Self { kind, size }
    }

    /// Returns the entry kind.
    #[must_use]
    pub const fn kind(&self) -> FileKind {
        self.kind
    }

    /// Returns `true` for directories.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self.kind, FileKind::Directory)
    }

    /// Returns `true` for regular files.
    #[must_use]
    pub const fn is_regular_file(&self) -> bool {
        matches!(self.kind, FileKind::Regular)
    }

    /// Always `false`: symbolic links are not supported.
    #[must_use]
    pub const fn is_symbolic_link(&self) -> bool {
        false
    }

    /// Always `false`: there is no "other" entry kind.
    #[must_use]
    pub const fn is_other(&self) -> bool {
        false
    }

    /// Returns the content size in bytes; always 0 for directories.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_attributes() {
        let attrs = FileAttributes::new(FileKind::Directory, 0);
        assert!(attrs.is_directory());
        assert!(!attrs.is_regular_file());
        assert!(!attrs.is_symbolic_link());
        assert!(!attrs.is_other());
        assert_eq!(attrs.size(), 0);
    }

    #[test]
    fn regular_file_attributes() {
        let attrs = FileAttributes::new(FileKind::Regular, 12);
        assert!(attrs.is_regular_file());
        assert!(!attrs.is_directory());
        assert_eq!(attrs.size(), 12);
    }

    #[test]
    fn attributes_round_trip_as_json() {
        let attrs = FileAttributes::new(FileKind::Regular, 5);
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"kind":"regular","size":5}"#);
        let back: FileAttributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attrs);
    }
}
