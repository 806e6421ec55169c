//! # vto-builder
//!
//! Normalize, sanitize and export Vision/Traction Organizer (V/TO) planning
//! documents.
//!
//! ## Why this crate?
//!
//! A V/TO is filled out in a browser, saved as JSON and reloaded later, from
//! local storage, from a file someone emailed, or from text pasted into an
//! import box. None of those sources can be trusted to have the right
//! shape. This crate is the single place that turns *any* JSON value into a
//! fully-shaped, size-bounded [`Document`], and then into the exact strings
//! an HTML view or a PDF writer can draw without surprises.
//!
//! ## Pipeline Overview
//!
//! ```text
//! JSON value
//!  │
//!  ├─ 1. Normalize  per-field decode against the canonical schema
//!  │                (wrong types coerced, oversize truncated, unknown keys dropped)
//!  ├─ 2. Export     dates → long form, Unicode → ASCII, truncate
//!  ├─ 3. Filename   company name → safe download name
//!  └─ 4. Render     strings handed to the PDF/HTML collaborator
//!                   (or the built-in text/HTML outlines)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use vto_builder::{export_text, normalize, render_outline};
//! use serde_json::json;
//!
//! let doc = normalize(&json!({
//!     "companyName": "Acme\u{2122} Millwork",
//!     "vtoDate": "2025-01-15",
//!     "coreValues": ["Own it", 42, null],
//!     "rocks": [{"text": "Ship 6\u{2032} panels", "owner": "Dana"}, "junk"],
//!     "__proto__": {"polluted": true}
//! }));
//! assert_eq!(doc.core_values, vec!["Own it", "42", ""]);
//! assert_eq!(doc.rocks[1].text, "");
//!
//! let export = export_text(&doc);
//! assert_eq!(export.document.vto_date, "January 15, 2025");
//! assert_eq!(export.document.rocks[0].text, "Ship 6' panels");
//! assert_eq!(export.file_name("pdf"), "Acme-Millwork.pdf");
//!
//! println!("{}", render_outline(&export));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `vto` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! vto-builder = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod export;
pub mod normalize;
pub mod render;
pub mod schema;
pub mod store;
pub mod text;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{
    ExportConfig, ExportConfigBuilder, Limits, TruncationOrder, FALLBACK_FILENAME,
    MAX_FILENAME_LENGTH, MAX_LIST_ITEMS, MAX_STRING_LENGTH,
};
pub use error::VtoError;
pub use export::{export_text, export_text_with, ExportText};
pub use normalize::{normalize, normalize_with};
pub use render::{render_html, render_outline};
pub use schema::{Document, Issue, Rock};
pub use store::{
    load_document, load_document_sync, load_document_with, parse_document, parse_document_with,
    save_document, save_document_sync, to_json_string,
};
pub use text::{escape_html, format_date, sanitize_filename, sanitize_filename_with, to_ascii};
