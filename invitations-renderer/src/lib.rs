//! # invitations-renderer
//!
//! Fixed-token substitution that turns one template and one attendee record
//! into the text of an invitation.
//!
//! ## Usage
//!
//! ```rust
//! use invitations_core::{validate, Validation};
//! use invitations_renderer::Renderer;
//! use serde_json::json;
//!
//! let validation = validate(
//!     &json!("Hello {name}, welcome to {event_title}!"),
//!     &json!([{ "name": "Ana", "event_title": "Launch" }]),
//! );
//! if let Validation::Ready { template, attendees } = validation {
//!     let renderer = Renderer::new(template);
//!     assert_eq!(renderer.render(&attendees[0]), "Hello Ana, welcome to Launch!");
//! }
//! ```

pub mod engine;

pub use engine::{field_text, render, Renderer, MISSING_VALUE};
