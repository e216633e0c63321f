//! Error types for mediforge-build.

use std::path::PathBuf;

use thiserror::Error;

use mediforge_core::StoreError;
use mediforge_renderer::RenderError;

/// Errors that abort a build step. Per-agent failures never surface here;
/// they are logged and reported in the step's result instead.
#[derive(Debug, Error)]
pub enum BuildError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error encoding or loading registry/dataset documents.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a single generation call.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request never produced an HTTP response.
    #[error("generation request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("generation backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("malformed generation response: {0}")]
    Decode(String),

    /// The response parsed but carried no text.
    #[error("generation response contained no text")]
    Empty,
}

/// Convenience constructor for [`BuildError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> BuildError {
    BuildError::Io {
        path: path.into(),
        source,
    }
}
