//! In-memory hierarchical file store.
//!
//! This crate provides a complete filesystem held entirely in memory:
//! a directory/file tree addressed through an immutable path algebra and
//! accessed through position-based byte channels with atomicity
//! guarantees under concurrent access.
//!
//! # Architecture
//!
//! The core consists of:
//! - [`FsPath`]: filesystem-scoped path algebra (parsing, normalization,
//!   ordering, prefix relations)
//! - [`ContentBuffer`]: value-semantics byte storage with
//!   copy-on-duplicate
//! - [`ByteChannel`]: stateful read/write sessions with atomic position
//!   advancement
//! - [`MemoryFs`]: the tree owner, orchestrating lookup, creation,
//!   deletion, move and copy
//!
//! # Examples
//!
//! ```
//! use memfs_core::MemoryFs;
//!
//! let fs = MemoryFs::new("example");
//! fs.create_directories(&fs.path("/a/b")?)?;
//!
//! let file = fs.path("/a/b/data.bin")?;
//! let channel = fs.open_write(&file, false)?;
//! channel.write(b"hello")?;
//! channel.close();
//!
//! assert_eq!(fs.attributes(&file)?.size(), 5);
//! # Ok::<(), memfs_core::FsError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod attributes;
mod buffer;
mod channel;
mod error;
mod filesystem;
mod path;
mod tree;

pub use attributes::{FileAttributes, FileKind};
pub use buffer::ContentBuffer;
pub use channel::{ByteChannel, ChannelMode};
pub use error::{FsError, Result};
pub use filesystem::{DirStream, MemoryFs, TransferOptions};
pub use path::{FsId, FsPath};
