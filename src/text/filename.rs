//! Free text → filesystem-safe download filename.
//!
//! Rules, applied in order:
//!
//! 1. Drop every char that is not ASCII alphanumeric, space, `-` or `_`
//! 2. Collapse each run of spaces into one `-`
//! 3. Strip leading and trailing `-`
//! 4. Keep at most `max_len` chars
//!
//! An empty result falls back to a fixed name so a download never ends up
//! as `.pdf`.

use crate::config::{FALLBACK_FILENAME, MAX_FILENAME_LENGTH};
use crate::text::truncate_chars;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_UNSAFE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9 _-]").unwrap());

static RE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Sanitize with the default cap (50) and fallback (`"export"`).
pub fn sanitize_filename(input: impl AsRef<str>) -> String {
    sanitize_filename_with(input, MAX_FILENAME_LENGTH, FALLBACK_FILENAME)
}

/// Sanitize with an explicit length cap and fallback name.
pub fn sanitize_filename_with(input: impl AsRef<str>, max_len: usize, fallback: &str) -> String {
    let input = input.as_ref();
    if input.is_empty() {
        return fallback.to_string();
    }
    let s = RE_UNSAFE.replace_all(input, "");
    let s = RE_SPACES.replace_all(&s, "-");
    let s = truncate_chars(s.trim_matches('-'), max_len);
    if s.is_empty() {
        fallback.to_string()
    } else {
        s
    }
}
