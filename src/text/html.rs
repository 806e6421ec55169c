//! HTML entity escaping for normalized strings.
//!
//! Escapes the five characters that can end a text node or a quoted
//! attribute value. Nothing else is touched, so escaped text still reads
//! naturally in a diff.

/// Escape `& < > " '` as HTML entities.
pub fn escape_html(input: impl AsRef<str>) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
