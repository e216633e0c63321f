//! Hash-gated atomic writer.
//!
//! ## `atomic_write` protocol
//!
//! 1. SHA-256 hash the new content.
//! 2. If the target is a regular file, hash its current bytes.
//! 3. Skip if identical.
//! 4. Write to `<path>.mediforge.tmp`.
//! 5. Rename to the final path (atomic on POSIX). On failure remove the tmp.
//!
//! The target is always replaced wholesale; nothing from a previous file
//! survives a write.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{io_err, BuildError};

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — the existing bytes already match.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

fn digest(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Write UTF-8 text with line endings normalised to LF.
pub fn write_text(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, BuildError> {
    let normalized = content.replace("\r\n", "\n");
    atomic_write(path, normalized.as_bytes(), dry_run)
}

/// Atomically replace `path` with `content`.
pub fn atomic_write(path: &Path, content: &[u8], dry_run: bool) -> Result<WriteResult, BuildError> {
    let tmp = PathBuf::from(format!("{}.mediforge.tmp", path.display()));
    atomic_write_with_tmp(path, content, dry_run, &tmp)
}

fn atomic_write_with_tmp(
    path: &Path,
    content: &[u8],
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, BuildError> {
    if path.is_file() {
        let existing = std::fs::read(path).map_err(|e| io_err(path, e))?;
        if digest(&existing) == digest(content) {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
