//! Value-semantics byte storage for file entries.
//!
//! A [`ContentBuffer`] owns its byte sequence outright: construction
//! from external bytes takes a defensive copy, and `Clone` produces a
//! fully independent duplicate. Equality and hashing are content-based,
//! so two buffers holding the same bytes are equal even as distinct
//! instances.
//!
//! The buffer carries no concurrency control of its own; callers (the
//! byte channel) serialize access.

use std::io::{Cursor, Read};

/// An owned, copyable byte sequence with content equality.
///
/// # Examples
///
/// ```
/// use memfs_core::ContentBuffer;
///
/// let original = ContentBuffer::from_bytes(&[1, 2, 3]);
/// let mut copy = original.clone();
/// copy.truncate(1);
///
/// assert_eq!(original.len(), 3);
/// assert_eq!(copy.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ContentBuffer {
    bytes: Vec<u8>,
}

impl ContentBuffer {
    /// Creates a zero-length buffer.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Creates a buffer holding a defensive copy of `data`.
    ///
    /// Later changes to the caller's slice never affect the buffer.
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            bytes: data.to_vec(),
        }
    }

    /// Returns the current size in bytes.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Returns `true` if the buffer holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns a view of the current bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a fresh read view over the current bytes.
    ///
    /// The view is finite and restartable by recreation: each call
    /// starts reading from the beginning.
    ///
    /// # Examples
    ///
    /// ```
    /// use memfs_core::ContentBuffer;
    /// use std::io::Read;
    ///
    /// let buffer = ContentBuffer::from_bytes(b"abc");
    /// let mut out = String::new();
    /// buffer.reader().read_to_string(&mut out).unwrap();
    /// assert_eq!(out, "abc");
    /// ```
    #[must_use]
    pub fn reader(&self) -> impl Read + '_ {
        Cursor::new(&self.bytes)
    }

    /// Overwrites or extends the buffer at `offset` with `data`.
    ///
    /// The buffer grows as needed to hold the highest byte written;
    /// writing past the current end zero-fills the gap. There is no
    /// capacity limit.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn write_at(&mut self, offset: u64, data: &[u8]) {
        let offset = offset as usize;
        let end = offset + data.len();
        if end > self.bytes.len() {
            self.bytes.resize(end, 0);
        }
        self.bytes[offset..end].copy_from_slice(data);
    }

    /// Shrinks the buffer to `new_len` bytes.
    ///
    /// A `new_len` at or above the current size is a no-op; truncation
    /// never grows the buffer.
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncate(&mut self, new_len: u64) {
        if new_len < self.len() {
            self.bytes.truncate(new_len as usize);
        }
    }
}
