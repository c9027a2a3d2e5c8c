//! Registry of live filesystem instances keyed by identifier.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use memfs_core::MemoryFs;
use tracing::debug;

use crate::address::filesystem_id;
use crate::error::{RegistryError, Result};

/// Thread-safe registry mapping identifiers to shared filesystem handles.
///
/// Each identifier maps to at most one live instance. Removing an entry
/// frees the identifier for a later [`create`](Self::create) with the same
/// name; handles held by other callers stay valid after removal.
#[derive(Debug, Default)]
pub struct FsRegistry {
    filesystems: Mutex<HashMap<String, Arc<MemoryFs>>>,
}

impl FsRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and registers a filesystem under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyExists`] if `id` is taken.
    pub fn create(&self, id: &str) -> Result<Arc<MemoryFs>> {
        let mut map = self.lock();
        if map.contains_key(id) {
            return Err(RegistryError::AlreadyExists { id: id.to_string() });
        }
        let fs = Arc::new(MemoryFs::new(id));
        map.insert(id.to_string(), Arc::clone(&fs));
        debug!(id, "registered filesystem");
        Ok(fs)
    }

    /// Creates and registers a filesystem named by an address string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidAddress`] if `address` does not
    /// parse, or [`RegistryError::AlreadyExists`] if the derived identifier
    /// is taken.
    pub fn create_from_address(&self, address: &str) -> Result<Arc<MemoryFs>> {
        let id = filesystem_id(address)?;
        self.create(&id)
    }

    /// Looks up the filesystem registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no instance is registered.
    pub fn lookup(&self, id: &str) -> Result<Arc<MemoryFs>> {
        self.lock()
            .get(id)
            .map(Arc::clone)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })
    }

    /// Looks up the filesystem named by an address string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidAddress`] if `address` does not
    /// parse, or [`RegistryError::NotFound`] if no instance is registered
    /// under the derived identifier.
    pub fn lookup_address(&self, address: &str) -> Result<Arc<MemoryFs>> {
        let id = filesystem_id(address)?;
        self.lookup(&id)
    }

    /// Removes the filesystem registered under `id`, returning its handle.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] if no instance is
    /// registered.
    pub fn remove(&self, id: &str) -> Result<Arc<MemoryFs>> {
        let removed = self
            .lock()
            .remove(id)
            .ok_or_else(|| RegistryError::NotRegistered { id: id.to_string() })?;
        debug!(id, "removed filesystem");
        Ok(removed)
    }

    /// Number of registered instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no instance is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<MemoryFs>>> {
        self.filesystems
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
