//! `YYYY-MM-DD` → long US date, on the exact calendar day supplied.
//!
//! The builder stores dates as the raw value of an `<input type="date">`.
//! Parsing that through a timestamp-based parser treats it as UTC midnight
//! and then renders it in local time, which puts `2025-01-01` on December 31
//! anywhere west of Greenwich. Building a [`NaiveDate`] from the three
//! literal components has no timezone to shift through.

use chrono::{Datelike, NaiveDate};

/// Format a `YYYY-MM-DD` string as `January 15, 2025`.
///
/// * empty input → `""`
/// * anything that is not exactly three dash-separated integers → the input,
///   unchanged
/// * three integers that are not a real calendar day (`2025-02-30`,
///   `2025-13-01`) → the input, unchanged
/// * years are taken literally and padded to four digits: `0099-01-01` →
///   `January 1, 0099`. A JavaScript `new Date(y, m, d)` would move years
///   0–99 into the 1900s; this function does not.
pub fn format_date(input: impl AsRef<str>) -> String {
    let input = input.as_ref();
    if input.is_empty() {
        return String::new();
    }
    match parse_ymd(input) {
        Some(date) => format!(
            "{} {}, {:04}",
            date.format("%B"),
            date.day(),
            date.year()
        ),
        None => input.to_string(),
    }
}

fn parse_ymd(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let year: i32 = y.trim().parse().ok()?;
    let month: u32 = m.trim().parse().ok()?;
    let day: u32 = d.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
