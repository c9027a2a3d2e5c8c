//! Address parsing for the `memory:` scheme.
//!
//! An address names a filesystem instance. The identifier is the first
//! non-empty path segment; an address whose path has no non-empty segment
//! names the default instance, whose identifier is the empty string.
//!
//! Accepted shapes:
//!
//! | address            | identifier |
//! |--------------------|------------|
//! | `memory:/`         | `""`       |
//! | `memory:///`       | `""`       |
//! | `memory:/fs1`      | `"fs1"`    |
//! | `memory:/fs1/a/b`  | `"fs1"`    |

use crate::error::{RegistryError, Result};

/// Scheme token identifying in-memory filesystem addresses.
pub const SCHEME: &str = "memory";

/// Derives the filesystem identifier from an address string.
///
/// The address must use the [`SCHEME`] scheme, carry no authority
/// component, and have an absolute path.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidAddress`] when the scheme is missing or
/// wrong, when a non-empty authority is present, or when the path is not
/// absolute.
///
/// # Examples
///
/// ```
/// use memfs_registry::filesystem_id;
///
/// assert_eq!(filesystem_id("memory:/fs1/a")?, "fs1");
/// assert_eq!(filesystem_id("memory:/")?, "");
/// assert!(filesystem_id("memory://host/fs1").is_err());
/// # Ok::<(), memfs_registry::RegistryError>(())
/// ```
pub fn filesystem_id(address: &str) -> Result<String> {
    let Some((scheme, rest)) = address.split_once(':') else {
        return Err(RegistryError::invalid_address(address, "missing scheme"));
    };
    if scheme != SCHEME {
        return Err(RegistryError::invalid_address(
            address,
            format!("scheme must be '{SCHEME}'"),
        ));
    }

    // "memory://host/..." carries an authority; only an empty one is allowed,
    // so "memory:///path" collapses to the plain absolute form.
    let path = if let Some(after_slashes) = rest.strip_prefix("//") {
        let (authority, remainder) = match after_slashes.find('/') {
            Some(i) => (&after_slashes[..i], &after_slashes[i..]),
            None => (after_slashes, ""),
        };
        if !authority.is_empty() {
            return Err(RegistryError::invalid_address(
                address,
                "authority component is not supported",
            ));
        }
        remainder
    } else {
        rest
    };

    if !path.starts_with('/') {
        return Err(RegistryError::invalid_address(
            address,
            "path must be absolute",
        ));
    }

    let id = path
        .split('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or_default();
    Ok(id.to_string())
}
