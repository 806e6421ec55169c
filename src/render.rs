//! Plain-text and HTML outlines of an exported document.
//!
//! Both follow the section order of the printed V/TO page, so an outline is
//! a quick way to proof a document before generating the PDF. Input is an
//! [`ExportText`], so every string is already transliterated and bounded;
//! the HTML form additionally passes every string through [`escape_html`].
//!
//! Empty scalars are skipped and a section with nothing in it is omitted
//! entirely, which keeps a half-filled document readable.

use crate::export::ExportText;
use crate::text::escape_html;

const RULE: &str = "========================================";

// ── Page model ───────────────────────────────────────────────────────────────

enum Entry {
    Field { label: &'static str, value: String },
    List { label: &'static str, items: Vec<String> },
}

/// One titled block of the page; blank values never make it in.
struct Section {
    title: &'static str,
    entries: Vec<Entry>,
}

impl Section {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            entries: Vec::new(),
        }
    }

    fn field(mut self, label: &'static str, value: &str) -> Self {
        if !value.trim().is_empty() {
            self.entries.push(Entry::Field {
                label,
                value: value.to_string(),
            });
        }
        self
    }

    fn list<I>(mut self, label: &'static str, items: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let items: Vec<String> = items
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();
        if !items.is_empty() {
            self.entries.push(Entry::List { label, items });
        }
        self
    }
}

struct Part {
    heading: &'static str,
    sections: Vec<Section>,
}

impl Part {
    fn new(heading: &'static str, sections: Vec<Section>) -> Self {
        Self {
            heading,
            sections: sections
                .into_iter()
                .filter(|s| !s.entries.is_empty())
                .collect(),
        }
    }
}

struct Page {
    title: String,
    header: Section,
    parts: [Part; 2],
}

impl Page {
    fn from_export(export: &ExportText) -> Self {
        let d = &export.document;

        let title = if d.company_name.trim().is_empty() {
            "VISION/TRACTION ORGANIZER".to_string()
        } else {
            format!("{} - VISION/TRACTION ORGANIZER", d.company_name)
        };
        let header = Section::new("")
            .field("Date", &d.vto_date)
            .field("Quarter", &d.quarter);

        let vision = Part::new(
            "VISION",
            vec![
                Section::new("Core Values")
                    .list("Values", d.core_values.iter().cloned())
                    .field("The Bar", &d.the_bar),
                Section::new("Core Focus")
                    .field("Purpose/Cause/Passion", &d.purpose)
                    .field("Niche", &d.niche),
                Section::new("10-Year Target")
                    .field("Future Date", &d.ten_year_date)
                    .field("Target", &d.ten_year_target),
                Section::new("Marketing Strategy")
                    .list("Target Market", d.target_market.iter().cloned())
                    .list("Three Uniques", d.three_uniques.iter().cloned())
                    .field("Proven Process", &d.proven_process)
                    .field("Guarantee", &d.guarantee),
                Section::new("3-Year Picture")
                    .field("Future Date", &d.three_year_date)
                    .field("Revenue", &d.three_year_revenue)
                    .field("Profit", &d.three_year_profit)
                    .list("What does it look like?", d.three_year_bullets.iter().cloned()),
            ],
        );

        let traction = Part::new(
            "TRACTION",
            vec![
                Section::new("1-Year Plan")
                    .field("Future Date", &d.one_year_date)
                    .field("Revenue", &d.one_year_revenue)
                    .field("Profit", &d.one_year_profit)
                    .field("Theme", &d.one_year_theme)
                    .list("Goals for the Year", d.one_year_goals.iter().cloned()),
                Section::new("Rocks")
                    .field("Future Date", &d.rocks_date)
                    .field("Revenue", &d.rocks_revenue)
                    .field("Profit", &d.rocks_profit)
                    .field("Theme", &d.rocks_theme)
                    .list(
                        "Rocks for the Quarter",
                        d.rocks.iter().map(|r| with_suffix(&r.text, &r.owner, '(', ')')),
                    ),
                Section::new("Issues List").list(
                    "Issues",
                    d.issues
                        .iter()
                        .map(|i| with_suffix(&i.text, &i.status, '[', ']')),
                ),
            ],
        );

        Self {
            title,
            header,
            parts: [vision, traction],
        }
    }
}

// ── Text ─────────────────────────────────────────────────────────────────────

/// Render the plain-text outline.
pub fn render_outline(export: &ExportText) -> String {
    let page = Page::from_export(export);
    let mut out = String::new();

    out.push_str(&page.title);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    for entry in &page.header.entries {
        if let Entry::Field { label, value } = entry {
            out.push_str(&format!("{label}: {value}\n"));
        }
    }

    for part in &page.parts {
        out.push('\n');
        out.push_str(part.heading);
        out.push('\n');
        out.push_str(&"-".repeat(part.heading.len()));
        out.push('\n');
        for section in &part.sections {
            out.push('\n');
            out.push_str(section.title);
            out.push('\n');
            for entry in &section.entries {
                match entry {
                    Entry::Field { label, value } => {
                        out.push_str(&format!("  {label}: {value}\n"));
                    }
                    Entry::List { label, items } => {
                        out.push_str(&format!("  {label}:\n"));
                        for (i, item) in items.iter().enumerate() {
                            out.push_str(&format!("    {}. {}\n", i + 1, item));
                        }
                    }
                }
            }
        }
    }

    ensure_final_newline(&out)
}

// ── HTML ─────────────────────────────────────────────────────────────────────

/// Render the outline as an HTML fragment (one `<article>`, no `<head>`).
pub fn render_html(export: &ExportText) -> String {
    let page = Page::from_export(export);
    let mut out = String::from("<article class=\"vto\">\n");

    out.push_str(&format!("<h1>{}</h1>\n", escape_html(&page.title)));
    for entry in &page.header.entries {
        if let Entry::Field { label, value } = entry {
            out.push_str(&format!("<p>{}: {}</p>\n", label, escape_html(value)));
        }
    }

    for part in &page.parts {
        out.push_str(&format!(
            "<section class=\"{}\">\n<h2>{}</h2>\n",
            part.heading.to_ascii_lowercase(),
            part.heading
        ));
        for section in &part.sections {
            out.push_str(&format!("<h3>{}</h3>\n<dl>\n", escape_html(section.title)));
            for entry in &section.entries {
                match entry {
                    Entry::Field { label, value } => {
                        out.push_str(&format!(
                            "<dt>{}</dt><dd>{}</dd>\n",
                            escape_html(label),
                            escape_html(value)
                        ));
                    }
                    Entry::List { label, items } => {
                        out.push_str(&format!("<dt>{}</dt><dd><ol>\n", escape_html(label)));
                        for item in items {
                            out.push_str(&format!("<li>{}</li>\n", escape_html(item)));
                        }
                        out.push_str("</ol></dd>\n");
                    }
                }
            }
            out.push_str("</dl>\n");
        }
        out.push_str("</section>\n");
    }

    out.push_str("</article>\n");
    out
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// `text (owner)` / `text [status]`; either part may be empty.
fn with_suffix(text: &str, suffix: &str, open: char, close: char) -> String {
    let text = text.trim();
    let suffix = suffix.trim();
    match (text.is_empty(), suffix.is_empty()) {
        (_, true) => text.to_string(),
        (true, false) => format!("{open}{suffix}{close}"),
        (false, false) => format!("{text} {open}{suffix}{close}"),
    }
}

fn ensure_final_newline(input: &str) -> String {
    let trimmed = input.trim_end();
    if trimmed.is_empty() {
        String::from("\n")
    } else {
        format!("{}\n", trimmed)
    }
}
