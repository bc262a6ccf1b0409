//! Domain types for invitation rendering.
//!
//! Inputs arrive as loosely-typed [`serde_json::Value`]s; the types here are
//! what they become once [`crate::validate`] has accepted them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Placeholders
// ---------------------------------------------------------------------------

/// One of the four recognised placeholder tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Name,
    EventTitle,
    EventDate,
    EventLocation,
}

impl Placeholder {
    /// All placeholders in substitution order.
    pub const ALL: [Placeholder; 4] = [
        Placeholder::Name,
        Placeholder::EventTitle,
        Placeholder::EventDate,
        Placeholder::EventLocation,
    ];

    /// Record key the value is read from.
    pub fn key(&self) -> &'static str {
        match self {
            Placeholder::Name => "name",
            Placeholder::EventTitle => "event_title",
            Placeholder::EventDate => "event_date",
            Placeholder::EventLocation => "event_location",
        }
    }

    /// Literal token as it appears in a template, e.g. `{name}`.
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Name => "{name}",
            Placeholder::EventTitle => "{event_title}",
            Placeholder::EventDate => "{event_date}",
            Placeholder::EventLocation => "{event_location}",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Template text.
///
/// Any string converts into a `Template`; [`crate::validate`] only yields
/// non-empty ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template(pub String);

impl Template {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Template {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A single attendee: arbitrary string-keyed values, of which only the
/// placeholder keys are ever read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendeeRecord(pub Map<String, Value>);

impl AttendeeRecord {
    /// Value supplied for `placeholder`, or `None` when the key is absent
    /// or explicitly null.
    pub fn field(&self, placeholder: Placeholder) -> Option<&Value> {
        match self.0.get(placeholder.key()) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }
}

impl From<Map<String, Value>> for AttendeeRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// ---------------------------------------------------------------------------
// Output naming
// ---------------------------------------------------------------------------

/// File name for the attendee at 1-based `position`.
pub fn output_file_name(position: usize) -> String {
    format!("output_{position}.txt")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> AttendeeRecord {
        match value {
            Value::Object(map) => AttendeeRecord::from(map),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn placeholder_order_is_fixed() {
        let keys: Vec<_> = Placeholder::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, ["name", "event_title", "event_date", "event_location"]);
    }

    #[test]
    fn token_wraps_key_in_braces() {
        for p in Placeholder::ALL {
            assert_eq!(p.token(), format!("{{{}}}", p.key()));
            assert_eq!(p.to_string(), p.token());
        }
    }

    #[test]
    fn null_and_missing_fields_are_absent() {
        let r = record(json!({ "name": null, "event_date": "" }));
        assert!(r.field(Placeholder::Name).is_none());
        assert!(r.field(Placeholder::EventTitle).is_none());
        assert_eq!(r.field(Placeholder::EventDate), Some(&json!("")));
    }

    #[test]
    fn empty_text_converts_but_never_validates() {
        assert_eq!(Template::from("").as_str(), "");
        assert_eq!(
            crate::validate(&json!(""), &json!([{ "name": "Ana" }])),
            crate::Validation::EmptyTemplate
        );
    }

    #[test]
    fn output_names_are_one_based() {
        assert_eq!(output_file_name(1), "output_1.txt");
        assert_eq!(output_file_name(12), "output_12.txt");
    }
}
