//! Error types for the filesystem registry.

use thiserror::Error;

/// Errors raised by address parsing and registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The address string is not a valid `memory:` address.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress {
        /// The rejected address
        address: String,
        /// What made it invalid
        reason: String,
    },

    /// An instance is already registered under this identifier.
    #[error("filesystem already exists: '{id}'")]
    AlreadyExists {
        /// The colliding identifier
        id: String,
    },

    /// No instance is registered under this identifier.
    #[error("no filesystem exists with identifier '{id}'")]
    NotFound {
        /// The unknown identifier
        id: String,
    },

    /// Removal was requested for an identifier that is not registered.
    #[error("filesystem is not registered: '{id}'")]
    NotRegistered {
        /// The unknown identifier
        id: String,
    },
}

impl RegistryError {
    /// Returns `true` if this is an invalid-address error.
    #[must_use]
    pub const fn is_invalid_address(&self) -> bool {
        matches!(self, Self::InvalidAddress { .. })
    }

    /// Returns `true` if this is an already-exists error.
    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Returns `true` if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is a not-registered error.
    #[must_use]
    pub const fn is_not_registered(&self) -> bool {
        matches!(self, Self::NotRegistered { .. })
    }

    pub(crate) fn invalid_address<A, R>(address: A, reason: R) -> Self
    where
        A: Into<String>,
        R: Into<String>,
    {
        Self::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }
}

/// Type alias for operations that can fail with [`RegistryError`].
pub type Result<T> = std::result::Result<T, RegistryError>;
