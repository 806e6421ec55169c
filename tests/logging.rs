//! Degradation events emitted by the normalizer.
//!
//! Every value the normalizer has to coerce, cap or drop is reported as a
//! `debug!` event. These tests install a `tracing-subscriber` fmt layer that
//! writes into a buffer and check what it captured.

use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use vto_builder::{normalize, normalize_with, Limits};

// ── Test helpers ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a DEBUG-level subscriber and return everything it logged.
fn capture_debug<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

// ── Events ───────────────────────────────────────────────────────────────────

#[test]
fn clean_input_logs_nothing() {
    let logs = capture_debug(|| {
        normalize(&json!({"companyName": "Acme", "rocks": [{"text": "a", "owner": "b"}]}));
    });
    assert_eq!(logs, "");
}

#[test]
fn non_object_input_is_reported() {
    let logs = capture_debug(|| {
        normalize(&json!([1, 2]));
    });
    assert!(logs.contains("input is not an object"), "{logs}");
    assert!(logs.contains("array"), "{logs}");
}

#[test]
fn truncation_and_caps_are_reported() {
    let limits = Limits {
        max_string_length: 3,
        max_list_items: 1,
    };
    let logs = capture_debug(|| {
        normalize_with(&json!({"niche": "abcdef", "coreValues": ["a", "b"]}), &limits);
    });
    assert!(logs.contains("truncated oversized string"), "{logs}");
    assert!(logs.contains("niche"), "{logs}");
    assert!(logs.contains("capped oversized list"), "{logs}");
    assert!(logs.contains("coreValues"), "{logs}");
}

#[test]
fn wrong_list_shapes_are_reported() {
    let logs = capture_debug(|| {
        normalize(&json!({"threeUniques": "nope", "rocks": ["x"], "issues": [7]}));
    });
    assert!(logs.contains("list field is not an array"), "{logs}");
    assert!(logs.contains("rock entry is not an object"), "{logs}");
    assert!(logs.contains("issue entry is not an object"), "{logs}");
}
