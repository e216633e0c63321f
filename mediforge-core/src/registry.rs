//! Registry JSON encoding and loading.
//!
//! The registry is always written wholesale by the builder; this module only
//! turns a [`Registry`] into its on-disk text and reads it back.
//!
//! # File shape
//!
//! ```text
//! {
//!   "1": { "name": "Agent1_FedEHR", "description": "...", "status": "active" },
//!   ...
//! }
//! ```

use std::path::Path;

use crate::error::{io_err, StoreError};
use crate::types::Registry;

/// Encode a registry as indented JSON (two-space indent, keys in id order).
pub fn to_json(registry: &Registry) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(registry)?)
}

/// Load a registry from `path`.
///
/// Returns `StoreError::NotFound` if absent,
/// `StoreError::Parse` (with path) if the file is not a registry document.
pub fn load_at(path: &Path) -> Result<Registry, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
