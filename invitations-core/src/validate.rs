//! Shape checks applied to raw inputs before any rendering happens.
//!
//! Checks run in a fixed order and the first one that applies decides the
//! result:
//!
//! 1. template is a string
//! 2. attendees is a list
//! 3. every attendee is a mapping (only when the list is non-empty)
//! 4. template is non-empty
//! 5. attendee list is non-empty

use std::fmt;

use serde_json::Value;

use crate::error::ShapeError;
use crate::types::{AttendeeRecord, Template};

/// Result of validating a template / attendee pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Inputs are well formed and there is work to do.
    Ready {
        template: Template,
        attendees: Vec<AttendeeRecord>,
    },
    /// Template is an empty string; nothing to generate.
    EmptyTemplate,
    /// Attendee list is empty; nothing to generate.
    NoAttendees,
    /// One of the inputs has the wrong type.
    Invalid(ShapeError),
}

impl fmt::Display for Validation {
    /// Status line for every outcome except [`Validation::Ready`], which
    /// prints nothing on its own.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Ready { .. } => Ok(()),
            Validation::EmptyTemplate => {
                f.write_str("Template is empty, no output files generated.")
            }
            Validation::NoAttendees => f.write_str("No data provided, no output files generated."),
            Validation::Invalid(err) => err.fmt(f),
        }
    }
}

/// Validate raw inputs in the fixed check order.
pub fn validate(template: &Value, attendees: &Value) -> Validation {
    let Value::String(template) = template else {
        return Validation::Invalid(ShapeError::TemplateNotString);
    };

    let Value::Array(items) = attendees else {
        return Validation::Invalid(ShapeError::AttendeesNotList);
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::Object(map) => records.push(AttendeeRecord::from(map.clone())),
            _ => return Validation::Invalid(ShapeError::AttendeeNotMapping { index }),
        }
    }

    if template.is_empty() {
        return Validation::EmptyTemplate;
    }
    if records.is_empty() {
        return Validation::NoAttendees;
    }

    Validation::Ready {
        template: Template::from(template.as_str()),
        attendees: records,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
