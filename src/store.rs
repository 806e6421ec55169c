//! JSON import/export of documents.
//!
//! Loading always goes through the normalizer: the file is parsed into a
//! `serde_json::Value` and handed to [`crate::normalize::normalize`], never deserialized
//! straight into a typed struct. The only load failures are therefore I/O
//! and JSON syntax; a file of the wrong shape still loads, as defaults.
//!
//! Parsing keeps the top [`KEPT_LEVELS`] levels of containers, which is all
//! the normalizer reads (document → list → item). A container below that is
//! replaced by an empty container of the same kind and its contents are
//! skipped without recursion, so nesting depth alone never makes valid JSON
//! fail to load.
//!
//! Saving writes to `<path>.tmp` and renames over the target so a crash
//! mid-write never leaves a truncated document behind.

use crate::config::Limits;
use crate::error::VtoError;
use crate::normalize::normalize_with;
use crate::schema::Document;
use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Container levels whose contents survive parsing.
const KEPT_LEVELS: usize = 3;

/// Parse JSON text and normalize it.
///
/// `origin` names the source in error messages (a path, `"stdin"`, …).
pub fn parse_document(json: &str, origin: &str) -> Result<Document, VtoError> {
    parse_document_with(json, origin, &Limits::default())
}

/// [`parse_document`] with explicit size limits.
pub fn parse_document_with(json: &str, origin: &str, limits: &Limits) -> Result<Document, VtoError> {
    let invalid = |source| VtoError::InvalidJson {
        origin: origin.to_string(),
        source,
    };
    let mut de = serde_json::Deserializer::from_str(json);
    let value = Shallow { levels: KEPT_LEVELS }
        .deserialize(&mut de)
        .map_err(invalid)?;
    de.end().map_err(invalid)?;
    Ok(normalize_with(&value, limits))
}

/// Pretty JSON with exactly the canonical keys.
pub fn to_json_string(document: &Document) -> Result<String, VtoError> {
    serde_json::to_string_pretty(document)
        .map_err(|e| VtoError::Internal(format!("Failed to serialise document: {e}")))
}

/// Read and normalize a document file.
pub async fn load_document(path: impl AsRef<Path>) -> Result<Document, VtoError> {
    load_document_with(path, &Limits::default()).await
}

/// [`load_document`] with explicit size limits.
pub async fn load_document_with(
    path: impl AsRef<Path>,
    limits: &Limits,
) -> Result<Document, VtoError> {
    let path = path.as_ref();
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => return Err(read_error(path, e)),
    };
    debug!("Read {} bytes from {}", text.len(), path.display());
    let doc = parse_document_with(&text, &path.display().to_string(), limits)?;
    info!("Loaded document from {}", path.display());
    Ok(doc)
}

/// Write a document as pretty JSON, replacing `path` atomically.
pub async fn save_document(path: impl AsRef<Path>, document: &Document) -> Result<(), VtoError> {
    let path = path.as_ref();
    let json = to_json_string(document)?;
    write_atomic(path, json.as_bytes()).await?;
    info!("Saved document to {}", path.display());
    Ok(())
}

/// Write `bytes` to `<path>.tmp`, then rename over `path`.
///
/// Creates missing parent directories.
pub async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), VtoError> {
    let write_failed = |source: std::io::Error| VtoError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_failed)?;
    }

    let tmp_path = tmp_path_for(path);
    tokio::fs::write(&tmp_path, bytes).await.map_err(write_failed)?;
    tokio::fs::rename(&tmp_path, path).await.map_err(write_failed)?;
    Ok(())
}

/// Synchronous wrapper around [`load_document`].
///
/// Creates a temporary tokio runtime internally.
pub fn load_document_sync(path: impl AsRef<Path>) -> Result<Document, VtoError> {
    runtime()?.block_on(load_document(path))
}

/// Synchronous wrapper around [`save_document`].
///
/// Creates a temporary tokio runtime internally.
pub fn save_document_sync(path: impl AsRef<Path>, document: &Document) -> Result<(), VtoError> {
    runtime()?.block_on(save_document(path, document))
}

// ── Depth-bounded parsing ────────────────────────────────────────────────

/// Builds a `Value` keeping the contents of the first `levels` container
/// levels. Deeper containers become empty and are skipped with
/// [`IgnoredAny`], which the JSON parser walks iteratively.
#[derive(Clone, Copy)]
struct Shallow {
    levels: usize,
}

impl<'de> DeserializeSeed<'de> for Shallow {
    type Value = Value;

    fn deserialize<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for Shallow {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E>(self) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        if self.levels == 0 {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            return Ok(Value::Array(items));
        }
        let inner = Shallow {
            levels: self.levels - 1,
        };
        while let Some(item) = seq.next_element_seed(inner)? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut out = Map::new();
        if self.levels == 0 {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            return Ok(Value::Object(out));
        }
        let inner = Shallow {
            levels: self.levels - 1,
        };
        while let Some(key) = map.next_key::<String>()? {
            let value = map.next_value_seed(inner)?;
            out.insert(key, value);
        }
        Ok(Value::Object(out))
    }
}

// ── Internal helpers ─────────────────────────────────────────────────────

fn runtime() -> Result<tokio::runtime::Runtime, VtoError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| VtoError::Internal(format!("Failed to create tokio runtime: {}", e)))
}

fn read_error(path: &Path, e: std::io::Error) -> VtoError {
    let path = path.to_path_buf();
    match e.kind() {
        std::io::ErrorKind::NotFound => VtoError::FileNotFound { path },
        std::io::ErrorKind::PermissionDenied => VtoError::PermissionDenied { path },
        _ => VtoError::ReadFailed { path, source: e },
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes() {
        let doc = parse_document(r#"{"companyName": 7, "rocks": ["x"]}"#, "test").unwrap();
        assert_eq!(doc.company_name, "7");
        assert_eq!(doc.rocks.len(), 1);
    }

    #[test]
    fn parse_accepts_any_json_value() {
        for text in ["null", "[]", "3", "\"str\"", "true"] {
            assert_eq!(parse_document(text, "test").unwrap(), Document::new());
        }
    }

    #[test]
    fn parse_rejects_non_json() {
        let err = parse_document("{not json", "clipboard").unwrap_err();
        assert!(matches!(err, VtoError::InvalidJson { ref origin, .. } if origin == "clipboard"));
    }

    #[test]
    fn json_string_has_canonical_keys() {
        let json = to_json_string(&Document::new()).unwrap();
        assert!(json.contains("\"companyName\": \"\""));
        assert!(json.contains("\"rocks\": []"));
    }

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path_for(Path::new("/a/b/doc.json")),
            PathBuf::from("/a/b/doc.json.tmp")
        );
        assert_eq!(tmp_path_for(Path::new("doc")), PathBuf::from("doc.tmp"));
    }

    #[test]
    fn read_error_mapping() {
        let p = Path::new("x.json");
        let nf = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(matches!(read_error(p, nf), VtoError::FileNotFound { .. }));
        let pd = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(read_error(p, pd), VtoError::PermissionDenied { .. }));
        let other = std::io::Error::from(std::io::ErrorKind::InvalidData);
        assert!(matches!(read_error(p, other), VtoError::ReadFailed { .. }));
    }

    #[test]
    fn parse_with_limits() {
        let limits = Limits {
            max_string_length: 2,
            max_list_items: 1,
        };
        let doc = parse_document_with(r#"{"niche": "abc", "issues": [{}, {}]}"#, "t", &limits)
            .unwrap();
        assert_eq!(doc.niche, "ab");
        assert_eq!(doc.issues.len(), 1);
    }

    fn nested(depth: usize) -> String {
        format!("{}{}", "[".repeat(depth), "]".repeat(depth))
    }

    #[test]
    fn deep_nesting_under_ignored_key_loads() {
        let json = format!(r#"{{"companyName": "Acme", "junk": {}}}"#, nested(200));
        let doc = parse_document(&json, "test").unwrap();
        assert_eq!(doc.company_name, "Acme");
    }

    #[test]
    fn deep_nesting_in_canonical_fields_collapses() {
        let deep = nested(50_000);
        let json = format!(
            r#"{{"purpose": {deep}, "coreValues": ["a", {deep}], "rocks": [{{"text": {deep}, "owner": "Jo"}}]}}"#
        );
        let doc = parse_document(&json, "test").unwrap();
        assert_eq!(doc.purpose, "");
        assert_eq!(doc.core_values, vec!["a", ""]);
        assert_eq!(doc.rocks[0].text, "");
        assert_eq!(doc.rocks[0].owner, "Jo");
    }

    #[test]
    fn shallow_parse_matches_full_parse() {
        let inputs = [
            r#"{"companyName": 1.5, "coreValues": [[1], {"a": 2}, null, true]}"#,
            r#"{"rocks": [{"text": {"x": [1]}, "owner": [2]}, "r", 3], "issues": [[]]}"#,
            r#"{"__proto__": {"companyName": "x"}, "niche": "n", "niche": "last"}"#,
            r#"[{"companyName": "x"}]"#,
        ];
        for text in inputs {
            let full: Value = serde_json::from_str(text).unwrap();
            assert_eq!(parse_document(text, "t").unwrap(), crate::normalize::normalize(&full), "{text}");
        }
    }

    #[test]
    fn trailing_garbage_is_invalid() {
        let err = parse_document(r#"{"companyName": "a"} x"#, "t").unwrap_err();
        assert!(matches!(err, VtoError::InvalidJson { .. }));
        let err = parse_document(&format!("{{\"junk\": {}", "[".repeat(300)), "t").unwrap_err();
        assert!(matches!(err, VtoError::InvalidJson { .. }));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let err = load_document("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, VtoError::FileNotFound { .. }));
    }
}
