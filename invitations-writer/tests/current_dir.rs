//! `render_invitations` writes relative to the process working directory, so
//! this file holds a single test to keep `set_current_dir` away from others.

use std::fs;

use invitations_writer::render_invitations;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn render_invitations_writes_into_current_directory() {
    let tmp = TempDir::new().expect("tmp");
    let previous = std::env::current_dir().expect("cwd");
    std::env::set_current_dir(tmp.path()).expect("chdir");

    render_invitations(
        &json!("Hello {name}, welcome to {event_title}!"),
        &json!([{ "name": "Ana", "event_title": "Launch" }, { "name": "Bob" }]),
    );
    // Shape errors return normally too.
    render_invitations(&json!(1), &json!([]));

    let first = fs::read_to_string(tmp.path().join("output_1.txt"));
    let second = fs::read_to_string(tmp.path().join("output_2.txt"));
    std::env::set_current_dir(previous).expect("restore cwd");

    assert_eq!(first.expect("output_1"), "Hello Ana, welcome to Launch!");
    assert_eq!(second.expect("output_2"), "Hello Bob, welcome to N/A!");
}
