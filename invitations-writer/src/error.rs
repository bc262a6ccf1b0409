//! Error types for invitations-writer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can arise while writing a rendered invitation.
#[derive(Debug, Error)]
pub enum WriteError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`WriteError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> WriteError {
    WriteError::Io {
        path: path.into(),
        source,
    }
}
