//! Configuration types for normalization and export.
//!
//! Every bound the engine enforces lives in one of two structs:
//!
//! * [`Limits`]: the size caps applied by the normalizer (string length,
//!   list length).
//! * [`ExportConfig`]: `Limits` plus the knobs of the export text pipeline
//!   (truncation order, filename rules, date formatting).
//!
//! The defaults reproduce the builder's fixed behaviour exactly, so
//! [`crate::normalize::normalize`] and [`crate::export::export_text`] are
//! just the `_with` variants called with `Default::default()`.

use crate::error::VtoError;
use serde::{Deserialize, Serialize};

/// Maximum length of any scalar field or list item, in `char`s.
pub const MAX_STRING_LENGTH: usize = 10_000;

/// Maximum number of items kept in any list field.
pub const MAX_LIST_ITEMS: usize = 100;

/// Maximum length of a sanitized download filename, in `char`s.
pub const MAX_FILENAME_LENGTH: usize = 50;

/// Filename used when the company name sanitizes to nothing.
pub const FALLBACK_FILENAME: &str = "export";

/// Size caps enforced by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Longest string kept in a scalar field, list item or sub-field. Default: 10 000.
    pub max_string_length: usize,

    /// Longest list kept in a list field. Default: 100.
    ///
    /// Items past the cap are dropped from the tail; the head keeps its order.
    pub max_list_items: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_string_length: MAX_STRING_LENGTH,
            max_list_items: MAX_LIST_ITEMS,
        }
    }
}

/// When the export pipeline truncates a string relative to ASCII transliteration.
///
/// Transliteration can grow a string (`…` becomes `...`, `™` becomes `(TM)`),
/// so the two orders give different final lengths.
///
/// | Order | Final length |
/// |-------|--------------|
/// | `AfterTransliteration` | always ≤ `max_string_length` (default) |
/// | `BeforeTransliteration` | may exceed the cap by the expansion of the kept prefix |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TruncationOrder {
    /// Transliterate first, then cut to the cap. (default)
    #[default]
    AfterTransliteration,
    /// Cut to the cap first, then transliterate.
    BeforeTransliteration,
}

/// Configuration for the export text pipeline.
///
/// Built via [`ExportConfig::builder()`] or using [`ExportConfig::default()`].
///
/// # Example
/// ```rust
/// use vto_builder::{ExportConfig, TruncationOrder};
///
/// let config = ExportConfig::builder()
///     .max_string_length(2_000)
///     .truncation(TruncationOrder::BeforeTransliteration)
///     .fallback_filename("vto")
///     .build()
///     .unwrap();
/// assert_eq!(config.limits.max_string_length, 2_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Size caps applied to every exported string and list.
    pub limits: Limits,

    /// Truncation position relative to transliteration. Default: after.
    pub truncation: TruncationOrder,

    /// Longest download base filename. Default: 50.
    pub max_filename_length: usize,

    /// Base filename used when the company name sanitizes to nothing. Default: `"export"`.
    pub fallback_filename: String,

    /// Render the date fields as `January 15, 2025`. Default: true.
    ///
    /// When off, dates are exported exactly as stored (`2025-01-15`).
    pub format_dates: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            truncation: TruncationOrder::default(),
            max_filename_length: MAX_FILENAME_LENGTH,
            fallback_filename: FALLBACK_FILENAME.to_string(),
            format_dates: true,
        }
    }
}

impl ExportConfig {
    /// Create a new builder for `ExportConfig`.
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExportConfig`].
#[derive(Debug)]
pub struct ExportConfigBuilder {
    config: ExportConfig,
}

impl ExportConfigBuilder {
    pub fn limits(mut self, limits: Limits) -> Self {
        self.config.limits = limits;
        self
    }

    pub fn max_string_length(mut self, n: usize) -> Self {
        self.config.limits.max_string_length = n;
        self
    }

    pub fn max_list_items(mut self, n: usize) -> Self {
        self.config.limits.max_list_items = n;
        self
    }

    pub fn truncation(mut self, order: TruncationOrder) -> Self {
        self.config.truncation = order;
        self
    }

    pub fn max_filename_length(mut self, n: usize) -> Self {
        self.config.max_filename_length = n;
        self
    }

    pub fn fallback_filename(mut self, name: impl Into<String>) -> Self {
        self.config.fallback_filename = name.into();
        self
    }

    pub fn format_dates(mut self, v: bool) -> Self {
        self.config.format_dates = v;
        self
    }

    /// Build the configuration, validating constraints.
    ///
    /// The fallback filename must itself be a fixed point of the filename
    /// rules, otherwise a sanitized name could come back unsafe.
    pub fn build(self) -> Result<ExportConfig, VtoError> {
        let c = &self.config;
        if c.limits.max_string_length == 0 {
            return Err(VtoError::InvalidConfig(
                "max_string_length must be ≥ 1".into(),
            ));
        }
        if c.limits.max_list_items == 0 {
            return Err(VtoError::InvalidConfig("max_list_items must be ≥ 1".into()));
        }
        if c.max_filename_length == 0 {
            return Err(VtoError::InvalidConfig(
                "max_filename_length must be ≥ 1".into(),
            ));
        }
        let fallback = &c.fallback_filename;
        let safe = !fallback.is_empty()
            && fallback.chars().count() <= c.max_filename_length
            && !fallback.starts_with('-')
            && !fallback.ends_with('-')
            && fallback
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !safe {
            return Err(VtoError::InvalidConfig(format!(
                "fallback filename {:?} must be 1–{} chars of [A-Za-z0-9_-] without edge hyphens",
                fallback, c.max_filename_length
            )));
        }
        Ok(self.config)
    }
}
