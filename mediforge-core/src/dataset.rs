//! Sample evidence dataset encoding and loading.

use std::path::Path;

use crate::error::{io_err, StoreError};
use crate::types::SampleRecord;

/// Encode records as an indented JSON array.
pub fn to_json(records: &[SampleRecord]) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Load the dataset at `path`. Same error contract as [`crate::registry::load_at`].
pub fn load_at(path: &Path) -> Result<Vec<SampleRecord>, StoreError> {
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
