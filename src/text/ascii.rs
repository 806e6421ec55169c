//! Unicode → ASCII transliteration for PDF export.
//!
//! The PDF writer embeds a standard font with WinAnsi-only coverage. Smart
//! quotes pasted from a word processor, fractions and measurement marks
//! (`6′ × 3″`) would otherwise come out as blank boxes. Every mapping here
//! is one code point in, one or more ASCII chars out; anything not in the
//! table passes through untouched.

/// The ASCII replacement for `c`, if it has one.
fn replacement(c: char) -> Option<&'static str> {
    let r = match c {
        '\u{2018}' | '\u{2019}' => "'", // smart single quotes
        '\u{201C}' | '\u{201D}' => "\"", // smart double quotes
        '\u{2013}' | '\u{2014}' => "-", // en / em dash
        '\u{2026}' => "...",
        '\u{00A0}' => " ",
        '\u{00AE}' => "(R)",
        '\u{2122}' => "(TM)",
        '\u{00A9}' => "(c)",
        '\u{00BD}' => "1/2",
        '\u{00BC}' => "1/4",
        '\u{00BE}' => "3/4",
        '\u{2032}' => "'",  // prime, feet
        '\u{2033}' => "\"", // double prime, inches
        '\u{00B0}' => "deg",
        '\u{00D7}' => "x",
        '\u{2212}' => "-", // minus sign
        _ => return None,
    };
    Some(r)
}

/// Replace typographic Unicode with ASCII equivalents in a single pass.
///
/// Empty input yields an empty string. Characters outside the table,
/// including the whole ASCII range, are copied unchanged.
pub fn to_ascii(input: impl AsRef<str>) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match replacement(c) {
            Some(r) => out.push_str(r),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(to_ascii(""), "");
    }

    #[test]
    fn smart_quotes() {
        assert_eq!(to_ascii("\u{2018}hi\u{2019}"), "'hi'");
        assert_eq!(to_ascii("\u{201C}hello\u{201D}"), "\"hello\"");
    }

    #[test]
    fn dashes() {
        assert_eq!(to_ascii("a\u{2013}b"), "a-b");
        assert_eq!(to_ascii("a\u{2014}b"), "a-b");
        assert_eq!(to_ascii("5\u{2212}"), "5-");
    }

    #[test]
    fn ellipsis_expands() {
        assert_eq!(to_ascii("wait\u{2026}"), "wait...");
    }

    #[test]
    fn non_breaking_space() {
        assert_eq!(to_ascii("hello\u{00A0}world"), "hello world");
    }

    #[test]
    fn legal_marks() {
        assert_eq!(to_ascii("Brand\u{00AE}"), "Brand(R)");
        assert_eq!(to_ascii("Product\u{2122}"), "Product(TM)");
        assert_eq!(to_ascii("\u{00A9} 2024"), "(c) 2024");
    }

    #[test]
    fn fractions() {
        assert_eq!(to_ascii("\u{00BD}"), "1/2");
        assert_eq!(to_ascii("\u{00BC}"), "1/4");
        assert_eq!(to_ascii("\u{00BE}"), "3/4");
    }

    #[test]
    fn measurements() {
        assert_eq!(to_ascii("6\u{2032}"), "6'");
        assert_eq!(to_ascii("3\u{2033}"), "3\"");
        assert_eq!(to_ascii("90\u{00B0}"), "90deg");
        assert_eq!(to_ascii("11\u{00D7}8.5"), "11x8.5");
    }

    #[test]
    fn ascii_passes_through() {
        let all: String = (0u8..=127).map(char::from).collect();
        assert_eq!(to_ascii(&all), all);
        assert_eq!(to_ascii("Hello World 123"), "Hello World 123");
    }

    #[test]
    fn unmapped_unicode_passes_through() {
        assert_eq!(to_ascii("café 日本 €"), "café 日本 €");
    }

    #[test]
    fn single_pass_does_not_rescan_output() {
        // "(c)" produced by © must not be touched again
        assert_eq!(to_ascii("\u{00A9}\u{00A9}"), "(c)(c)");
        assert_eq!(to_ascii("\u{2026}\u{2026}"), "......");
    }
}
