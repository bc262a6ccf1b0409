//! Invitations core library: domain types, input validation, input loading.
//!
//! - [`types`]: placeholders, templates, attendee records, output naming
//! - [`validate`]: ordered shape checks turning raw values into typed inputs
//! - [`load`]: JSON / YAML batch documents
//! - [`error`]: [`ShapeError`], [`LoadError`]

pub mod error;
pub mod load;
pub mod types;
pub mod validate;

pub use error::{LoadError, ShapeError};
pub use load::{load_batch, load_template_text, InvitationBatch};
pub use types::{output_file_name, AttendeeRecord, Placeholder, Template};
pub use validate::{validate, Validation};
