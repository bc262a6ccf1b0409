//! Batch pipeline: validate, render and write one file per attendee.
//!
//! Every outcome is reported as a status line on the console sink:
//!
//! ```text
//! Error: Template is not a string
//! Error: Attendees is not a list
//! Error: Attendees is not a list of dictionaries
//! Template is empty, no output files generated.
//! No data provided, no output files generated.
//! Generated output_1.txt
//! [dry-run] Would generate output_2.txt
//! Error writing file output_3.txt: Is a directory (os error 21)
//! ```
//!
//! Validation failures stop the batch before any file is touched. A failed
//! write only affects its own record.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use invitations_core::{output_file_name, validate, ShapeError, Validation};
use invitations_renderer::Renderer;

use crate::error::WriteError;
use crate::writer::{write_output, WriteResult};

/// Knobs for a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
}

/// What happened to a single attendee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Written { path: PathBuf },
    WouldWrite { path: PathBuf },
    Failed { path: PathBuf, reason: String },
}

/// What happened to a whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// An input had the wrong shape; nothing was written.
    Invalid(ShapeError),
    /// The template was empty; nothing was written.
    EmptyTemplate,
    /// The attendee list was empty; nothing was written.
    NoAttendees,
    /// Every attendee was processed, in input order.
    Completed(Vec<RecordOutcome>),
}

impl BatchOutcome {
    /// Number of files actually written.
    pub fn written(&self) -> usize {
        match self {
            BatchOutcome::Completed(records) => records
                .iter()
                .filter(|r| matches!(r, RecordOutcome::Written { .. }))
                .count(),
            _ => 0,
        }
    }

    /// Number of records whose write failed.
    pub fn failed(&self) -> usize {
        match self {
            BatchOutcome::Completed(records) => records
                .iter()
                .filter(|r| matches!(r, RecordOutcome::Failed { .. }))
                .count(),
            _ => 0,
        }
    }
}

fn say(console: &mut impl Write, line: impl std::fmt::Display) {
    if let Err(err) = writeln!(console, "{line}") {
        tracing::warn!("console write failed: {err}");
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Run the pipeline writing into `out_dir` and reporting to `console`.
pub fn generate_in(
    out_dir: &Path,
    template: &Value,
    attendees: &Value,
    options: &GenerateOptions,
    console: &mut impl Write,
) -> BatchOutcome {
    let (template, attendees) = match validate(template, attendees) {
        Validation::Ready {
            template,
            attendees,
        } => (template, attendees),
        stop => {
            say(console, &stop);
            tracing::debug!("batch stopped before rendering: {stop:?}");
            return match stop {
                Validation::Invalid(err) => BatchOutcome::Invalid(err),
                Validation::EmptyTemplate => BatchOutcome::EmptyTemplate,
                _ => BatchOutcome::NoAttendees,
            };
        }
    };

    tracing::info!(
        "rendering {} invitation(s) into {}",
        attendees.len(),
        out_dir.display()
    );
    let renderer = Renderer::new(template);
    let mut records = Vec::with_capacity(attendees.len());

    for (position, attendee) in (1..).zip(attendees.iter()) {
        let path = out_dir.join(output_file_name(position));
        let content = renderer.render(attendee);

        let outcome = match write_output(&path, &content, options.dry_run) {
            Ok(WriteResult::Written { path }) => {
                say(console, format_args!("Generated {}", display_name(&path)));
                RecordOutcome::Written { path }
            }
            Ok(WriteResult::WouldWrite { path }) => {
                say(
                    console,
                    format_args!("[dry-run] Would generate {}", display_name(&path)),
                );
                RecordOutcome::WouldWrite { path }
            }
            Err(WriteError::Io { path, source }) => {
                tracing::warn!("write failed for {}: {source}", path.display());
                say(
                    console,
                    format_args!("Error writing file {}: {source}", display_name(&path)),
                );
                RecordOutcome::Failed {
                    path,
                    reason: source.to_string(),
                }
            }
        };
        records.push(outcome);
    }

    BatchOutcome::Completed(records)
}

/// Render every attendee into `output_<N>.txt` in the current directory,
/// printing status lines to stdout.
///
/// Never fails: problems are reported on stdout and the function returns.
pub fn render_invitations(template: &Value, attendees: &Value) {
    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    generate_in(
        Path::new("."),
        template,
        attendees,
        &GenerateOptions::default(),
        &mut console,
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
