//! Placeholder substitution engine: [`Renderer`] and [`render`].
//!
//! # Substitution order
//!
//! | Step | Token              | Record key       |
//! |------|--------------------|------------------|
//! | 1    | `{name}`           | `name`           |
//! | 2    | `{event_title}`    | `event_title`    |
//! | 3    | `{event_date}`     | `event_date`     |
//! | 4    | `{event_location}` | `event_location` |
//!
//! Each step replaces every occurrence of its token in the output of the
//! previous step. A value that itself contains a later token is therefore
//! expanded by that later step; an earlier token inside a value is left
//! as-is.

use std::borrow::Cow;

use serde_json::Value;

use invitations_core::types::{AttendeeRecord, Placeholder, Template};

/// Text substituted for absent or null fields.
pub const MISSING_VALUE: &str = "N/A";

// ---------------------------------------------------------------------------
// Value formatting
// ---------------------------------------------------------------------------

/// Text for a single field of `record`.
///
/// Strings are used verbatim, other scalars in their JSON form, and arrays
/// or objects as compact JSON.
pub fn field_text<'a>(record: &'a AttendeeRecord, placeholder: Placeholder) -> Cow<'a, str> {
    match record.field(placeholder) {
        None => Cow::Borrowed(MISSING_VALUE),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Substitute all four placeholders of `template` from `record`.
pub fn render(template: &str, record: &AttendeeRecord) -> String {
    let mut out = template.to_owned();
    for placeholder in Placeholder::ALL {
        let value = field_text(record, placeholder);
        out = out.replace(placeholder.token(), &value);
    }
    out
}

/// Renders one validated template against many records.
///
/// Every call starts from the original template text; no state is carried
/// between records.
#[derive(Debug, Clone)]
pub struct Renderer {
    template: Template,
}

impl Renderer {
    pub fn new(template: Template) -> Self {
        Renderer { template }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Render the template for a single attendee.
    pub fn render(&self, record: &AttendeeRecord) -> String {
        let rendered = render(self.template.as_str(), record);
        tracing::debug!(
            "rendered {} bytes from {} byte template",
            rendered.len(),
            self.template.as_str().len()
        );
        rendered
    }
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
    fn replaces_every_occurrence() {
        let r = record(json!({ "name": "Ana" }));
        assert_eq!(render("{name} {name}{name}", &r), "Ana AnaAna");
    }

    #[test]
    fn missing_and_null_become_na() {
        let r = record(json!({ "event_title": null }));
        assert_eq!(render("{name}/{event_title}", &r), "N/A/N/A");
    }

    #[test]
    fn empty_string_is_kept_empty() {
        let r = record(json!({ "name": "" }));
        assert_eq!(render("[{name}]", &r), "[]");
    }

    #[test]
    fn non_string_values_use_json_text() {
        let r = record(json!({
            "name": 7,
            "event_title": true,
            "event_date": 2.5,
            "event_location": ["a", 1],
        }));
        assert_eq!(
            render("{name}|{event_title}|{event_date}|{event_location}", &r),
            r#"7|true|2.5|["a",1]"#
        );
    }

    #[test]
    fn booleans_and_floats_keep_json_spelling() {
        // JSON text, not title-cased `True`.
        let r = record(json!({ "name": true, "event_title": 1.0, "event_date": false }));
        assert_eq!(render("{name}|{event_title}|{event_date}", &r), "true|1.0|false");
    }

    #[test]
    fn unknown_placeholders_are_untouched() {
        let r = record(json!({ "name": "Ana", "seat": "12" }));
        assert_eq!(render("{name} {seat} {Name}", &r), "Ana {seat} {Name}");
    }

    #[test]
    fn later_token_inside_value_is_expanded() {
        let r = record(json!({ "name": "{event_title}", "event_title": "Launch" }));
        assert_eq!(render("Hi {name}", &r), "Hi Launch");
    }

    #[test]
    fn earlier_token_inside_value_is_left_alone() {
        let r = record(json!({ "name": "Ana", "event_title": "{name}" }));
        assert_eq!(render("{event_title}", &r), "{name}");
    }

    #[test]
    fn renderer_starts_fresh_for_each_record() {
        let renderer = Renderer::new(Template::from("Dear {name}"));
        let first = renderer.render(&record(json!({ "name": "A" })));
        let second = renderer.render(&record(json!({})));
        assert_eq!(first, "Dear A");
        assert_eq!(second, "Dear N/A");
        assert_eq!(renderer.template().as_str(), "Dear {name}");
    }
}
