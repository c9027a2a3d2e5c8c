//! Error types for the in-memory file store.
//!
//! All fallible operations in this crate return [`FsError`] through the
//! crate-wide [`Result`] alias. Every error is locally terminal for the
//! operation that raised it: nothing in an in-memory structure is
//! transient, so there are no internal retries and errors propagate
//! directly to the caller.
//!
//! Two documented no-ops are deliberately *not* errors: truncating a
//! channel to a size at or above the current size, and closing an
//! already-closed channel.
//!
//! # Examples
//!
//! ```
//! use memfs_core::{FsError, MemoryFs};
//!
//! let fs = MemoryFs::new("example");
//! let err = fs.delete(&fs.path("/missing")?).unwrap_err();
//! assert!(err.is_not_found());
//! # Ok::<(), memfs_core::FsError>(())
//! ```

use thiserror::Error;

/// Errors raised by filesystem, path and channel operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    /// Malformed path text, out-of-range index, or an out-of-bounds
    /// position or truncation target.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// A path did not resolve to an existing entry.
    #[error("no such entry: {path}")]
    NotFound {
        /// The path that did not resolve
        path: String,
    },

    /// Tree creation collided with an existing child.
    #[error("entry already exists: {path}")]
    AlreadyExists {
        /// The colliding path
        path: String,
    },

    /// Refused to delete a directory that still has children.
    #[error("directory not empty: {path}")]
    DirectoryNotEmpty {
        /// The non-empty directory
        path: String,
    },

    /// A channel operation other than `close` was invoked after close.
    #[error("channel is closed")]
    ClosedChannel,

    /// A read was attempted on a write channel or vice versa.
    #[error("channel is not open for {required}")]
    WrongMode {
        /// The mode the operation needed ("reading" or "writing")
        required: &'static str,
    },

    /// A path bound to a different filesystem instance was supplied.
    #[error("path belongs to a different filesystem instance")]
    FilesystemMismatch,

    /// The capability is not provided by this in-memory design.
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// Name of the unsupported capability
        operation: String,
    },
}

impl FsError {
    /// Returns `true` if this is an invalid-argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` if this is a not-found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use memfs_core::FsError;
    ///
    /// let err = FsError::NotFound { path: "/missing".to_string() };
    /// assert!(err.is_not_found());
    /// assert!(!err.is_already_exists());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is an already-exists error.
    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Returns `true` if this is a directory-not-empty error.
    #[must_use]
    pub const fn is_not_empty(&self) -> bool {
        matches!(self, Self::DirectoryNotEmpty { .. })
    }

    /// Returns `true` if this is a closed-channel error.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::ClosedChannel)
    }

    /// Returns `true` if this is a wrong-mode error.
    #[must_use]
    pub const fn is_wrong_mode(&self) -> bool {
        matches!(self, Self::WrongMode { .. })
    }

    /// Returns `true` if this is a filesystem-mismatch error.
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(self, Self::FilesystemMismatch)
    }

    /// Returns `true` if this is an unsupported-operation error.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    pub(crate) fn invalid<M: Into<String>>(message: M) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn not_found<P: ToString + ?Sized>(path: &P) -> Self {
        Self::NotFound {
            path: path.to_string(),
        }
    }

    pub(crate) fn already_exists<P: ToString + ?Sized>(path: &P) -> Self {
        Self::AlreadyExists {
            path: path.to_string(),
        }
    }
}

/// Type alias for operations that can fail with [`FsError`].
pub type Result<T> = std::result::Result<T, FsError>;
