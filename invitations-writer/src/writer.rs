//! Single-file writer for rendered invitations.
//!
//! Each call opens the target, writes the full content and drops the handle
//! before returning, on success and on error alike. Existing files are
//! truncated and overwritten. Writes are not atomic.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{io_err, WriteError};

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was created or overwritten.
    Written { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

/// Write `content` to `path` verbatim.
pub fn write_output(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, WriteError> {
    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    let mut file = File::create(path).map_err(|e| io_err(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| io_err(path, e))?;

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
