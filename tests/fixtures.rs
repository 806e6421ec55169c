//! Conformance fixtures: complete documents exported from the builder.
//!
//! Both files in `./test_cases/` must normalize without losing any populated
//! field, survive a save/load round trip, and export cleanly.

use std::path::PathBuf;
use vto_builder::{
    export_text, load_document, load_document_sync, render_outline, save_document,
    save_document_sync, Document,
};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_cases")
}

fn fixture(name: &str) -> PathBuf {
    test_cases_dir().join(name)
}

/// Assert that every string field of an export is free of the code points
/// the PDF font cannot draw.
fn assert_pdf_safe(doc: &Document, context: &str) {
    let banned = [
        '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2013}', '\u{2014}', '\u{2026}',
        '\u{00A0}', '\u{00AE}', '\u{2122}', '\u{00A9}', '\u{00BD}', '\u{00BC}', '\u{00BE}',
        '\u{2032}', '\u{2033}', '\u{00B0}', '\u{00D7}', '\u{2212}',
    ];
    let json = serde_json::to_string(doc).unwrap();
    for ch in banned {
        assert!(
            !json.contains(ch),
            "[{context}] export contains U+{:04X}",
            ch as u32
        );
    }
}

// ── EFSJ fixture ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn efsj_prefill_normalizes_without_loss() {
    let doc = load_document(fixture("efsj-prefill.json"))
        .await
        .expect("fixture should load");

    assert_eq!(doc.company_name, "EFSJ Custom Millwork");
    assert_eq!(doc.core_values.len(), 4);
    assert_eq!(doc.rocks.len(), 3);
    assert_eq!(doc.rocks[0].owner, "Maria");
    assert_eq!(doc.issues[1].status, "DONE");
    assert_eq!(doc.three_year_bullets[1], "Dedicated install crews \u{00D7}3");
}

#[tokio::test]
async fn efsj_prefill_exports_pdf_safe_strings() {
    let doc = load_document(fixture("efsj-prefill.json")).await.unwrap();
    let export = export_text(&doc);

    assert_pdf_safe(&export.document, "efsj");
    assert_eq!(export.document.vto_date, "January 6, 2025");
    assert_eq!(export.document.rocks_theme, "\"Done means installed\"");
    assert_eq!(export.document.the_bar, "Every cabinet leaves the shop square to 1/32\"");
    assert_eq!(export.file_name("pdf"), "EFSJ-Custom-Millwork.pdf");
}

// ── Backend Ops fixture ──────────────────────────────────────────────────────

#[test]
fn backend_ops_prefill_normalizes_without_loss() {
    let doc = load_document_sync(fixture("backend-ops-prefill.json")).expect("fixture should load");

    assert_eq!(doc.company_name, "Backend Ops");
    assert!(!doc.core_values.is_empty());
    assert!(!doc.rocks.is_empty());
    assert_eq!(doc.issues[0].status, "");
}

#[test]
fn backend_ops_unknown_key_is_dropped() {
    let doc = load_document_sync(fixture("backend-ops-prefill.json")).unwrap();
    let value = serde_json::to_value(&doc).unwrap();
    assert!(value.get("legacyNotes").is_none());
}

#[test]
fn backend_ops_outline() {
    let doc = load_document_sync(fixture("backend-ops-prefill.json")).unwrap();
    let outline = render_outline(&export_text(&doc));

    assert!(outline.starts_with("Backend Ops - VISION/TRACTION ORGANIZER\n"));
    assert!(outline.contains("Target Market:\n    1. SaaS companies with 5-50 engineers\n"));
    assert!(outline.contains("1. Write runbooks for the top 10 alerts (Priya)"));
    assert!(outline.contains("1. Pager fatigue on weekends\n"));
    assert!(!outline.contains("The Bar"));
}

// ── Round trips ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_then_load_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["efsj-prefill.json", "backend-ops-prefill.json"] {
        let original = load_document(fixture(name)).await.unwrap();
        let out = dir.path().join("nested").join(name);

        save_document(&out, &original).await.expect("save should succeed");
        let reloaded = load_document(&out).await.unwrap();

        assert_eq!(original, reloaded, "{name}");
        assert!(!out.with_file_name(format!("{name}.tmp")).exists());
    }
}

#[test]
fn sync_save_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("doc.json");
    std::fs::write(&out, "stale contents").unwrap();

    let mut doc = Document::new();
    doc.company_name = "Fresh".into();
    save_document_sync(&out, &doc).unwrap();

    assert_eq!(load_document_sync(&out).unwrap().company_name, "Fresh");
}

#[test]
fn invalid_json_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"companyName\": ").unwrap();

    let err = load_document_sync(&path).unwrap_err();
    assert!(err.to_string().contains("broken.json"), "got: {err}");
}
