//! Normalizer: arbitrary JSON → canonical, bounded [`Document`].
//!
//! This is the crate's trust boundary. Its input is whatever a user picked
//! from disk or pasted into the import box, so it must survive anything a
//! JSON parser will produce: `null`, a bare array, a number, an object
//! whose fields have the wrong types, a 50 MB string, a `__proto__` key.
//!
//! ## Strategy
//!
//! The input is walked through the canonical field tables on [`Document`],
//! never the other way round. For each canonical name the decoder asks the
//! input object for exactly that key and decodes it with a per-kind
//! function. Keys that are not canonical, including `__proto__` and
//! `constructor`, are never looked at, so nothing about them can reach the
//! output. A `serde_json::Map` has no inherited entries to begin with.
//!
//! Nothing in this module can fail. Every mismatch degrades to the schema
//! default for that field and is reported with a `debug!` event.

use crate::config::Limits;
use crate::schema::{Document, Issue, Rock};
use crate::text::truncate_chars;
use serde_json::{Map, Number, Value};
use tracing::debug;

/// Normalize `input` with the default limits.
pub fn normalize(input: &Value) -> Document {
    normalize_with(input, &Limits::default())
}

/// Normalize `input` with explicit size limits.
///
/// Total over all JSON values. Anything other than an object yields
/// [`Document::new()`].
pub fn normalize_with(input: &Value, limits: &Limits) -> Document {
    let mut doc = Document::new();
    let Some(obj) = input.as_object() else {
        debug!(kind = value_kind(input), "input is not an object; using defaults");
        return doc;
    };

    for name in Document::SCALAR_FIELDS {
        if let (Some(value), Some(slot)) = (obj.get(name), doc.scalar_mut(name)) {
            *slot = decode_scalar(name, value, limits);
        }
    }

    for name in Document::SIMPLE_LIST_FIELDS {
        if let Some(slot) = doc.list_mut(name) {
            *slot = decode_list(obj, name, limits, |v| decode_scalar(name, v, limits));
        }
    }

    doc.rocks = decode_list(obj, "rocks", limits, |v| decode_rock(v, limits));
    doc.issues = decode_list(obj, "issues", limits, |v| decode_issue(v, limits));

    doc
}

// ── Field decoders ───────────────────────────────────────────────────────────

/// Coerce one value to a bounded string.
fn decode_scalar(field: &str, value: &Value, limits: &Limits) -> String {
    let s = coerce_string(value);
    if s.chars().count() > limits.max_string_length {
        debug!(field, max = limits.max_string_length, "truncated oversized string");
        truncate_chars(&s, limits.max_string_length)
    } else {
        s
    }
}

/// Decode a list field: a missing key or a non-array value yields an empty
/// list; an array keeps its first `max_list_items` entries, each decoded by
/// `item`.
fn decode_list<T, F>(obj: &Map<String, Value>, field: &str, limits: &Limits, item: F) -> Vec<T>
where
    F: Fn(&Value) -> T,
{
    match obj.get(field) {
        None => Vec::new(),
        Some(Value::Array(items)) => {
            if items.len() > limits.max_list_items {
                debug!(
                    field,
                    len = items.len(),
                    max = limits.max_list_items,
                    "capped oversized list"
                );
            }
            items.iter().take(limits.max_list_items).map(item).collect()
        }
        Some(other) => {
            debug!(field, kind = value_kind(other), "list field is not an array; using empty list");
            Vec::new()
        }
    }
}

/// A non-object entry keeps its slot as an all-empty rock.
fn decode_rock(value: &Value, limits: &Limits) -> Rock {
    match value.as_object() {
        Some(item) => Rock {
            text: decode_sub_field(item, "text", limits),
            owner: decode_sub_field(item, "owner", limits),
        },
        None => {
            debug!(kind = value_kind(value), "rock entry is not an object; using empty rock");
            Rock::default()
        }
    }
}

/// A non-object entry keeps its slot as an all-empty issue.
fn decode_issue(value: &Value, limits: &Limits) -> Issue {
    match value.as_object() {
        Some(item) => Issue {
            text: decode_sub_field(item, "text", limits),
            status: decode_sub_field(item, "status", limits),
        },
        None => {
            debug!(kind = value_kind(value), "issue entry is not an object; using empty issue");
            Issue::default()
        }
    }
}

fn decode_sub_field(item: &Map<String, Value>, key: &str, limits: &Limits) -> String {
    item.get(key)
        .map(|v| decode_scalar(key, v, limits))
        .unwrap_or_default()
}

// ── Coercion ─────────────────────────────────────────────────────────────────

/// String form of a JSON value, matching JavaScript `String()` for primitives.
///
/// Containers have no meaningful text form and become `""`.
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// `3` and `3.0` both print as `"3"`. Very large and very small magnitudes
/// use exponent form (`1e+21`, `1e-7`); everything else the shortest
/// round-trip decimal.
fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };
    if f == 0.0 {
        return "0".to_string();
    }
    let abs = f.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{f:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    if f.fract() == 0.0 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
