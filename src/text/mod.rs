//! Primitive text converters feeding the export pipeline.
//!
//! Each submodule is one pure `&str → String` conversion with no shared
//! state, so they compose in any order and are tested in isolation.
//!
//! 1. [`ascii`]   : transliterate typographic Unicode to ASCII for the PDF
//!    font, which cannot draw those code points
//! 2. [`date`]    : `2025-01-15` → `January 15, 2025` on the literal day
//! 3. [`filename`]: free text → safe download filename
//! 4. [`html`]    : entity-escape a string for HTML text or attributes
//!
//! All converters are total: they never panic and never return an error.

pub mod ascii;
pub mod date;
pub mod filename;
pub mod html;

pub use ascii::to_ascii;
pub use date::format_date;
pub use filename::{sanitize_filename, sanitize_filename_with};
pub use html::escape_html;

/// Keep at most `max` chars of `input`.
///
/// Counts Unicode scalar values, so the cut never lands inside a code point.
pub fn truncate_chars(input: &str, max: usize) -> String {
    match input.char_indices().nth(max) {
        Some((byte_idx, _)) => input[..byte_idx].to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_shorter_is_identity() {
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn truncate_exact_boundary() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let s = "é…ü";
        assert_eq!(truncate_chars(s, 2), "é…");
        assert_eq!(truncate_chars(s, 2).chars().count(), 2);
    }
}
