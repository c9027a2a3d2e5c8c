//! Registry of named in-memory filesystem instances.
//!
//! This crate is the thin adapter between external `memory:` addresses
//! and [`memfs_core::MemoryFs`] instances: it derives a filesystem
//! identifier from an address string and keeps an explicit,
//! lock-guarded map of registered instances. There is no ambient
//! global state; consumers own their [`FsRegistry`].
//!
//! # Examples
//!
//! ```
//! use memfs_registry::FsRegistry;
//!
//! let registry = FsRegistry::new();
//! let fs = registry.create_from_address("memory:/scratch")?;
//!
//! assert_eq!(fs.id(), "scratch");
//! assert!(registry.lookup("scratch").is_ok());
//!
//! registry.remove("scratch")?;
//! assert!(registry.lookup("scratch").is_err());
//! # Ok::<(), memfs_registry::RegistryError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod address;
mod error;
mod registry;

pub use address::{filesystem_id, SCHEME};
pub use error::{RegistryError, Result};
pub use registry::FsRegistry;
