//! Export text pipeline: normalized [`Document`] → strings for the renderer.
//!
//! ## Stage order
//!
//! ```text
//! Document ──▶ format dates ──▶ to_ascii ──▶ truncate ──▶ ExportText
//!                                   (or truncate ──▶ to_ascii)
//!         └──▶ sanitize_filename(companyName) ──▶ base_filename
//! ```
//!
//! Dates are formatted before transliteration so the month names go through
//! the same ASCII pass as everything else. Truncation defaults to running
//! after transliteration, which keeps every exported string within
//! `max_string_length` even when `…` has grown into `...`; see
//! [`TruncationOrder`].
//!
//! The source document is borrowed and never mutated.

use crate::config::{ExportConfig, TruncationOrder};
use crate::schema::Document;
use crate::text::{format_date, sanitize_filename_with, to_ascii, truncate_chars};
use serde::Serialize;
use tracing::debug;

/// The exact string set handed to the PDF/HTML rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportText {
    /// Every field of the source document, ASCII-only (for mapped chars),
    /// dates in long form, bounded by the configured limits.
    pub document: Document,

    /// Filesystem-safe base name derived from the company name.
    pub base_filename: String,
}

impl ExportText {
    /// Download name with the given extension, e.g. `Acme-Corp.pdf`.
    pub fn file_name(&self, extension: &str) -> String {
        let ext = extension.trim_start_matches('.');
        if ext.is_empty() {
            self.base_filename.clone()
        } else {
            format!("{}.{}", self.base_filename, ext)
        }
    }
}

/// Run the pipeline with the default configuration.
pub fn export_text(document: &Document) -> ExportText {
    export_text_with(document, &ExportConfig::default())
}

/// Run the pipeline with an explicit configuration.
pub fn export_text_with(document: &Document, config: &ExportConfig) -> ExportText {
    let mut staged = document.clone();
    if config.format_dates {
        for name in Document::DATE_FIELDS {
            if let Some(slot) = staged.scalar_mut(name) {
                *slot = format_date(slot.as_str());
            }
        }
    }

    let max = config.limits.max_string_length;
    let mut text = staged.map_text(|s| match config.truncation {
        TruncationOrder::AfterTransliteration => truncate_chars(&to_ascii(s), max),
        TruncationOrder::BeforeTransliteration => to_ascii(truncate_chars(s, max)),
    });
    cap_lists(&mut text, config.limits.max_list_items);

    let base_filename = sanitize_filename_with(
        &document.company_name,
        config.max_filename_length,
        &config.fallback_filename,
    );
    debug!(base_filename = %base_filename, "prepared export text");

    ExportText {
        document: text,
        base_filename,
    }
}

/// Lists from a normalized document are already within the default cap; a
/// tighter export config still has to hold.
fn cap_lists(doc: &mut Document, max: usize) {
    for name in Document::SIMPLE_LIST_FIELDS {
        if let Some(list) = doc.list_mut(name) {
            list.truncate(max);
        }
    }
    doc.rocks.truncate(max);
    doc.issues.truncate(max);
}
