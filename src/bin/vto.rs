//! CLI binary for vto-builder.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExportConfig`, reads a document from a file or stdin, and prints results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use vto_builder::store::write_atomic;
use vto_builder::{
    export_text_with, load_document_with, parse_document_with, render_html, render_outline,
    to_json_string,
    Document, ExportConfig, TruncationOrder, MAX_LIST_ITEMS, MAX_STRING_LENGTH,
};

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Start a blank document
  vto new -o acme.json

  # Clean up a document exported from the browser
  vto normalize downloaded.json -o acme.json

  # Proof the document as a text outline
  vto export acme.json

  # HTML fragment for the web view
  vto export --format html acme.json > acme.html

  # Strings exactly as the PDF writer receives them
  vto export --format json acme.json > acme-export.json

  # Download name for the PDF
  vto filename acme.json --ext pdf

  # Read from stdin
  cat pasted.json | vto normalize -

LIMITS:
  Strings are cut at 10000 chars and lists at 100 items unless overridden.
  Export truncation runs after ASCII transliteration; pass
  --truncate-before-transliteration to cut first.

ENVIRONMENT VARIABLES:
  VTO_MAX_STRING_LENGTH   Override --max-string-length
  VTO_MAX_LIST_ITEMS      Override --max-list-items
  RUST_LOG                Log filter (overrides -v / -q)
"#;

/// Normalize, sanitize and export Vision/Traction Organizer documents.
#[derive(Parser, Debug)]
#[command(
    name = "vto",
    version,
    about = "Normalize, sanitize and export Vision/Traction Organizer documents",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Longest string kept in any field.
    #[arg(long, global = true, env = "VTO_MAX_STRING_LENGTH", default_value_t = MAX_STRING_LENGTH)]
    max_string_length: usize,

    /// Longest list kept in any list field.
    #[arg(long, global = true, env = "VTO_MAX_LIST_ITEMS", default_value_t = MAX_LIST_ITEMS)]
    max_list_items: usize,

    /// Truncate export strings before ASCII transliteration instead of after.
    #[arg(long, global = true)]
    truncate_before_transliteration: bool,

    /// Keep dates as stored (YYYY-MM-DD) in export output.
    #[arg(long, global = true)]
    no_date_format: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true, env = "VTO_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true, env = "VTO_QUIET")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit a blank document.
    New {
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load a document, normalize it and emit canonical JSON.
    Normalize {
        /// Document JSON file, or `-` for stdin.
        input: String,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the export text pipeline.
    Export {
        /// Document JSON file, or `-` for stdin.
        input: String,
        /// Output form.
        #[arg(long, value_enum, default_value = "outline")]
        format: ExportFormat,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the safe download filename for a document.
    Filename {
        /// Document JSON file, or `-` for stdin.
        input: String,
        /// Extension to append (e.g. pdf, json).
        #[arg(long, default_value = "pdf")]
        ext: String,
    },
}

#[derive(ValueEnum, Clone, Debug)]
enum ExportFormat {
    /// Plain-text outline in page order.
    Outline,
    /// The outline as an escaped HTML fragment.
    Html,
    /// The exported strings as JSON.
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli)?;

    match &cli.command {
        Command::New { output } => {
            let json = to_json_string(&Document::new()).context("Failed to serialise document")?;
            emit(&json, output.as_deref(), cli.quiet).await?;
        }
        Command::Normalize { input, output } => {
            let doc = read_document(input, &config).await?;
            let json = to_json_string(&doc).context("Failed to serialise document")?;
            emit(&json, output.as_deref(), cli.quiet).await?;
        }
        Command::Export {
            input,
            format,
            output,
        } => {
            let doc = read_document(input, &config).await?;
            if doc.is_empty() {
                warn!("Document {input:?} has no content; the export will be blank");
            }
            let export = export_text_with(&doc, &config);
            let text = match format {
                ExportFormat::Outline => render_outline(&export),
                ExportFormat::Html => render_html(&export),
                ExportFormat::Json => serde_json::to_string_pretty(&export)
                    .context("Failed to serialise export")?,
            };
            emit(&text, output.as_deref(), cli.quiet).await?;
        }
        Command::Filename { input, ext } => {
            let doc = read_document(input, &config).await?;
            let export = export_text_with(&doc, &config);
            println!("{}", export.file_name(ext));
        }
    }

    Ok(())
}

/// Map CLI args to `ExportConfig`.
fn build_config(cli: &Cli) -> Result<ExportConfig> {
    let truncation = if cli.truncate_before_transliteration {
        TruncationOrder::BeforeTransliteration
    } else {
        TruncationOrder::AfterTransliteration
    };

    ExportConfig::builder()
        .max_string_length(cli.max_string_length)
        .max_list_items(cli.max_list_items)
        .truncation(truncation)
        .format_dates(!cli.no_date_format)
        .build()
        .context("Invalid configuration")
}

/// Load from a path, or from stdin when `input` is `-`.
async fn read_document(input: &str, config: &ExportConfig) -> Result<Document> {
    if input == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read stdin")?;
        return parse_document_with(&text, "stdin", &config.limits)
            .context("Failed to load document");
    }
    load_document_with(input, &config.limits)
        .await
        .with_context(|| format!("Failed to load document from {input:?}"))
}

/// Write to `output` atomically, or to stdout with a trailing newline.
async fn emit(text: &str, output: Option<&Path>, quiet: bool) -> Result<()> {
    match output {
        Some(path) => {
            write_atomic(path, text.as_bytes())
                .await
                .context("Failed to write output")?;
            if !quiet {
                eprintln!(
                    "{} {}  {}",
                    green("✔"),
                    bold(&path.display().to_string()),
                    dim(&format!("{} bytes", text.len())),
                );
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
            if !text.ends_with('\n') {
                handle
                    .write_all(b"\n")
                    .context("Failed to write to stdout")?;
            }
        }
    }
    Ok(())
}
