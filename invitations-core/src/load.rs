//! Reading invitation input documents from disk.
//!
//! A batch document is JSON or YAML with two top-level keys:
//!
//! ```yaml
//! template: "Hello {name}, welcome to {event_title}!"
//! attendees:
//!   - name: Ana
//!     event_title: Launch
//! ```
//!
//! Values are kept untyped so that shape problems are reported by
//! [`crate::validate`] rather than by the parser.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{io_err, LoadError};

/// Raw template and attendee values as read from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvitationBatch {
    #[serde(default)]
    pub template: Value,
    #[serde(default)]
    pub attendees: Value,
}

/// Document encodings accepted by [`load_batch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `.yaml` / `.yml` (any case) select YAML; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// Parse a batch document from a string.
pub fn parse_batch(contents: &str, format: Format, path: &Path) -> Result<InvitationBatch, LoadError> {
    match format {
        Format::Json => serde_json::from_str(contents).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Format::Yaml => serde_yaml::from_str(contents).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a batch document, picking the format from the file extension.
pub fn load_batch(path: &Path) -> Result<InvitationBatch, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    parse_batch(&contents, Format::from_path(path), path)
}

/// Read a template file verbatim.
pub fn load_template_text(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| io_err(path, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn missing_keys_default_to_null() {
        let batch = parse_batch("{}", Format::Json, Path::new("in.json")).unwrap();
        assert_eq!(batch.template, Value::Null);
        assert_eq!(batch.attendees, Value::Null);
    }

    #[test]
    fn yaml_document_loads() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("batch.yml");
        std::fs::write(
            &path,
            "template: \"Hi {name}\"\nattendees:\n  - name: Ana\n    event_date: 2024-05-01\n",
        )
        .unwrap();

        let batch = load_batch(&path).unwrap();
        assert_eq!(batch.template, json!("Hi {name}"));
        assert_eq!(batch.attendees[0]["name"], json!("Ana"));
    }

    #[test]
    fn wrong_types_survive_loading() {
        let batch = parse_batch(
            r#"{ "template": 42, "attendees": "nope" }"#,
            Format::Json,
            Path::new("in.json"),
        )
        .unwrap();
        assert_eq!(batch.template, json!(42));
        assert_eq!(batch.attendees, json!("nope"));
    }

    #[test]
    fn malformed_json_reports_path() {
        let err = parse_batch("{", Format::Json, Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, LoadError::Json { ref path, .. } if path == &PathBuf::from("broken.json")));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_template_text(&tmp.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
