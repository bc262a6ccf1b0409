//! # invitations-writer
//!
//! Writes rendered invitations to disk, one `output_<N>.txt` per attendee.
//!
//! Call [`render_invitations`] to process a batch in the current directory
//! with status lines on stdout, or [`generate_in`] to choose the output
//! directory and console sink and inspect the [`BatchOutcome`].

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::WriteError;
pub use pipeline::{generate_in, render_invitations, BatchOutcome, GenerateOptions, RecordOutcome};
pub use writer::{write_output, WriteResult};
