//! Error types for the vto-builder library.
//!
//! The normalization core is total: [`crate::normalize::normalize`], the
//! text converters and the export pipeline never fail, they degrade to a
//! safe default instead. [`VtoError`] therefore only covers the surfaces
//! around that core:
//!
//! * **Import/export**: the file could not be read or written, or its
//!   contents are not JSON at all (a well-formed JSON value of the wrong
//!   shape is *not* an error; it normalizes to defaults).
//! * **Configuration**: a builder was asked for limits that cannot hold.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the vto-builder library.
#[derive(Debug, Error)]
pub enum VtoError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Document file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but reading it failed part-way.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text is not syntactically valid JSON.
    #[error("Input from {origin} is not valid JSON: {source}\nExport a document from the builder and try again.")]
    InvalidJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
