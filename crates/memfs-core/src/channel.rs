//! Position-based byte channels over content buffers.
//!
//! A [`ByteChannel`] is a stateful session bound to exactly one
//! [`ContentBuffer`]: it carries a mode (read-only, or write with an
//! optional append flag), an open/closed flag, and a current position.
//! The channel serializes its own read/write/position/truncate
//! operations, so several threads sharing one channel observe each
//! write as a single indivisible step: fetch position, mutate the
//! buffer, advance position.
//!
//! Channels never take a tree lock; the channel/buffer mutex pair is
//! the only mutual exclusion involved.
//!
//! # Examples
//!
//! ```
//! use memfs_core::{ByteChannel, ContentBuffer};
//! use std::sync::{Arc, Mutex};
//!
//! let data = Arc::new(Mutex::new(ContentBuffer::from_bytes(b"hi")));
//!
//! let writer = ByteChannel::writable(Arc::clone(&data), true);
//! assert_eq!(writer.position()?, 2); // append starts at the end
//! writer.write(b"!")?;
//!
//! let reader = ByteChannel::read_only(data);
//! let mut out = [0u8; 3];
//! assert_eq!(reader.read(&mut out)?, Some(3));
//! assert_eq!(&out, b"hi!");
//! # Ok::<(), memfs_core::FsError>(())
//! ```

use crate::buffer::ContentBuffer;
use crate::error::{FsError, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Access mode of a [`ByteChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    /// Read-only access; writes and truncation are rejected.
    Read,
    /// Write access; reads are rejected.
    Write {
        /// When set, the initial position is the buffer's current size
        /// and the open-time truncation to zero is skipped.
        append: bool,
    },
}

#[derive(Debug)]
struct ChannelState {
    open: bool,
    position: u64,
}

/// A stateful read or write session over one content buffer.
///
/// Opening a non-append write channel truncates the buffer to size 0
/// immediately; an append channel starts positioned at the current
/// size. Once closed, every operation except a repeated [`close`]
/// fails with [`FsError::ClosedChannel`].
///
/// [`close`]: Self::close
#[derive(Debug)]
pub struct ByteChannel {
    mode: ChannelMode,
    data: Arc<Mutex<ContentBuffer>>,
    state: Mutex<ChannelState>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ByteChannel {
    /// Opens a read-only channel positioned at 0.
    #[must_use]
    pub fn read_only(data: Arc<Mutex<ContentBuffer>>) -> Self {
        Self {
            mode: ChannelMode::Read,
            data,
            state: Mutex::new(ChannelState {
                open: true,
                position: 0,
            }),
        }
    }

    /// Opens a write channel.
    ///
    /// Without `append` the buffer is truncated to size 0 and the
    /// position starts at 0; with `append` the buffer is left intact
    /// and the position starts at its current size.
    #[must_use]
    pub fn writable(data: Arc<Mutex<ContentBuffer>>, append: bool) -> Self {
        let position = {
            let mut buffer = lock(&data);
            if append {
                buffer.len()
            } else {
                buffer.truncate(0);
                0
            }
        };
        Self {
            mode: ChannelMode::Write { append },
            data,
            state: Mutex::new(ChannelState {
                open: true,
                position,
            }),
        }
    }

    /// Returns this channel's access mode.
    #[must_use]
    pub const fn mode(&self) -> ChannelMode {
        self.mode
    }

    /// Returns `true` until [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_open(&self) -> bool {
        lock(&self.state).open
    }

    /// Closes the channel. Repeated closes are a no-op.
    pub fn close(&self) {
        lock(&self.state).open = false;
    }

    /// Reads up to `dst.len()` bytes from the current position.
    ///
    /// Returns the number of bytes copied, or `None` when the position
    /// already equals the buffer size (end of data, not an error). The
    /// position advances by the bytes copied.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::ClosedChannel`] after close and
    /// [`FsError::WrongMode`] on a write channel.
    #[allow(clippy::cast_possible_truncation)]
    pub fn read(&self, dst: &mut [u8]) -> Result<Option<usize>> {
        let mut state = self.check_open()?;
        if self.mode != ChannelMode::Read {
            return Err(FsError::WrongMode {
                required: "reading",
            });
        }
        let buffer = lock(&self.data);
        let size = buffer.len();
        if state.position >= size {
            return Ok(None);
        }
        let count = (size - state.position).min(dst.len() as u64) as usize;
        let start = state.position as usize;
        dst[..count].copy_from_slice(&buffer.as_slice()[start..start + count]);
        state.position += count as u64;
        trace!(count, position = state.position, "channel read");
        Ok(Some(count))
    }

    /// Writes all of `src` at the current position and advances the
    /// position by `src.len()`.
    ///
    /// The whole sequence (fetch position, extend/overwrite the
    /// buffer, advance position) executes as one critical section
    /// relative to other users of this channel, so concurrent writers
    /// never lose updates or interleave within a single write. The
    /// buffer grows as needed; there is no capacity limit.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::ClosedChannel`] after close and
    /// [`FsError::WrongMode`] on a read channel.
    pub fn write(&self, src: &[u8]) -> Result<usize> {
        let mut state = self.check_open()?;
        self.check_writable()?;
        let mut buffer = lock(&self.data);
        buffer.write_at(state.position, src);
        state.position += src.len() as u64;
        trace!(count = src.len(), position = state.position, "channel write");
        Ok(src.len())
    }

    /// Returns the current position.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::ClosedChannel`] after close.
    pub fn position(&self) -> Result<u64> {
        Ok(self.check_open()?.position)
    }

    /// Moves the position to `new_position` without altering the size.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::InvalidArgument`] when `new_position` is
    /// strictly greater than the current size, and
    /// [`FsError::ClosedChannel`] after close.
    pub fn set_position(&self, new_position: u64) -> Result<()> {
        let mut state = self.check_open()?;
        let size = lock(&self.data).len();
        if new_position > size {
            return Err(FsError::invalid(format!(
                "position {new_position} is past the current size {size}"
            )));
        }
        state.position = new_position;
        Ok(())
    }

    /// Returns the current size of the bound buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::ClosedChannel`] after close.
    pub fn size(&self) -> Result<u64> {
        let _state = self.check_open()?;
        Ok(lock(&self.data).len())
    }

    /// Shrinks the buffer to `new_size` bytes.
    ///
    /// Truncation never grows: a `new_size` at or above the current
    /// size leaves both size and position untouched. When the buffer
    /// does shrink, the position clamps to `min(position, new_size)`.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::ClosedChannel`] after close and
    /// [`FsError::WrongMode`] on a read channel.
    pub fn truncate(&self, new_size: u64) -> Result<()> {
        let mut state = self.check_open()?;
        self.check_writable()?;
        let mut buffer = lock(&self.data);
        if new_size < buffer.len() {
            buffer.truncate(new_size);
            state.position = state.position.min(new_size);
        }
        Ok(())
    }

    fn check_open(&self) -> Result<MutexGuard<'_, ChannelState>> {
        let state = lock(&self.state);
        if !state.open {
            return Err(FsError::ClosedChannel);
        }
        Ok(state)
    }

    const fn check_writable(&self) -> Result<()> {
        match self.mode {
            ChannelMode::Write { .. } => Ok(()),
            ChannelMode::Read => Err(FsError::WrongMode {
                required: "writing",
            }),
        }
    }
}
