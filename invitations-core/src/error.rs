//! Error types for invitations-core.

use std::path::PathBuf;

use thiserror::Error;

/// Input values that do not have the shape rendering needs.
///
/// The `Display` text is the exact status line reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Error: Template is not a string")]
    TemplateNotString,

    #[error("Error: Attendees is not a list")]
    AttendeesNotList,

    /// `index` is the 0-based position of the first offending element.
    #[error("Error: Attendees is not a list of dictionaries")]
    AttendeeNotMapping { index: usize },
}

/// Errors raised while reading an input document from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse YAML at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Convenience constructor for [`LoadError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.into(),
        source,
    }
}
