//! The canonical Vision/Traction Organizer document.
//!
//! [`Document`] is the only shape the rest of the crate ever sees. It is
//! built fresh by [`Document::new`] and replaced wholesale by the
//! normalizer whenever a file is loaded; nothing patches it field by field
//! from untrusted input.
//!
//! The field tables ([`Document::SCALAR_FIELDS`] and friends) are the
//! auditable list of canonical wire names. The normalizer, the renderer and
//! the tests all walk these tables, so a field added to the struct but not
//! to a table is caught by `tables_cover_every_field`.

use serde::Serialize;

/// A quarterly priority with the person accountable for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rock {
    pub text: String,
    pub owner: String,
}

/// An open issue with a free-text status (e.g. `"DONE"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub text: String,
    pub status: String,
}

/// One planning document.
///
/// Serializes to the persisted JSON shape: a flat object whose keys are
/// exactly the canonical camelCase field names.
///
/// There is no `Deserialize` impl on purpose. Untrusted JSON enters through
/// [`crate::normalize::normalize`], which never fails on a wrong type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    // ── Header ───────────────────────────────────────────────────────────
    pub company_name: String,
    pub vto_date: String,
    pub quarter: String,

    // ── Vision ───────────────────────────────────────────────────────────
    pub core_values: Vec<String>,
    pub the_bar: String,
    pub purpose: String,
    pub niche: String,
    pub ten_year_date: String,
    pub ten_year_target: String,
    pub target_market: Vec<String>,
    pub three_uniques: Vec<String>,
    pub proven_process: String,
    pub guarantee: String,
    pub three_year_date: String,
    pub three_year_revenue: String,
    pub three_year_profit: String,
    pub three_year_bullets: Vec<String>,

    // ── Traction ─────────────────────────────────────────────────────────
    pub one_year_date: String,
    pub one_year_revenue: String,
    pub one_year_profit: String,
    pub one_year_theme: String,
    pub one_year_goals: Vec<String>,
    pub rocks_date: String,
    pub rocks_revenue: String,
    pub rocks_profit: String,
    pub rocks_theme: String,
    pub rocks: Vec<Rock>,
    pub issues: Vec<Issue>,
}

impl Document {
    /// Canonical names of the scalar text fields.
    pub const SCALAR_FIELDS: [&'static str; 21] = [
        "companyName",
        "vtoDate",
        "quarter",
        "theBar",
        "purpose",
        "niche",
        "tenYearDate",
        "tenYearTarget",
        "threeYearDate",
        "threeYearRevenue",
        "threeYearProfit",
        "provenProcess",
        "guarantee",
        "oneYearDate",
        "oneYearRevenue",
        "oneYearProfit",
        "oneYearTheme",
        "rocksDate",
        "rocksRevenue",
        "rocksProfit",
        "rocksTheme",
    ];

    /// Canonical names of the lists of plain strings.
    pub const SIMPLE_LIST_FIELDS: [&'static str; 5] = [
        "coreValues",
        "threeYearBullets",
        "targetMarket",
        "threeUniques",
        "oneYearGoals",
    ];

    /// Canonical names of the lists of structured items.
    pub const STRUCTURED_LIST_FIELDS: [&'static str; 2] = ["rocks", "issues"];

    /// Scalar fields holding `YYYY-MM-DD` dates.
    pub const DATE_FIELDS: [&'static str; 5] = [
        "vtoDate",
        "tenYearDate",
        "threeYearDate",
        "oneYearDate",
        "rocksDate",
    ];

    /// A brand-new document with every field at its default.
    ///
    /// Each call allocates its own strings and vectors; two documents never
    /// share a container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a scalar field by canonical name.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        let v = match name {
            "companyName" => &self.company_name,
            "vtoDate" => &self.vto_date,
            "quarter" => &self.quarter,
            "theBar" => &self.the_bar,
            "purpose" => &self.purpose,
            "niche" => &self.niche,
            "tenYearDate" => &self.ten_year_date,
            "tenYearTarget" => &self.ten_year_target,
            "threeYearDate" => &self.three_year_date,
            "threeYearRevenue" => &self.three_year_revenue,
            "threeYearProfit" => &self.three_year_profit,
            "provenProcess" => &self.proven_process,
            "guarantee" => &self.guarantee,
            "oneYearDate" => &self.one_year_date,
            "oneYearRevenue" => &self.one_year_revenue,
            "oneYearProfit" => &self.one_year_profit,
            "oneYearTheme" => &self.one_year_theme,
            "rocksDate" => &self.rocks_date,
            "rocksRevenue" => &self.rocks_revenue,
            "rocksProfit" => &self.rocks_profit,
            "rocksTheme" => &self.rocks_theme,
            _ => return None,
        };
        Some(v)
    }

    /// Mutable access to a scalar field by canonical name.
    pub fn scalar_mut(&mut self, name: &str) -> Option<&mut String> {
        let v = match name {
            "companyName" => &mut self.company_name,
            "vtoDate" => &mut self.vto_date,
            "quarter" => &mut self.quarter,
            "theBar" => &mut self.the_bar,
            "purpose" => &mut self.purpose,
            "niche" => &mut self.niche,
            "tenYearDate" => &mut self.ten_year_date,
            "tenYearTarget" => &mut self.ten_year_target,
            "threeYearDate" => &mut self.three_year_date,
            "threeYearRevenue" => &mut self.three_year_revenue,
            "threeYearProfit" => &mut self.three_year_profit,
            "provenProcess" => &mut self.proven_process,
            "guarantee" => &mut self.guarantee,
            "oneYearDate" => &mut self.one_year_date,
            "oneYearRevenue" => &mut self.one_year_revenue,
            "oneYearProfit" => &mut self.one_year_profit,
            "oneYearTheme" => &mut self.one_year_theme,
            "rocksDate" => &mut self.rocks_date,
            "rocksRevenue" => &mut self.rocks_revenue,
            "rocksProfit" => &mut self.rocks_profit,
            "rocksTheme" => &mut self.rocks_theme,
            _ => return None,
        };
        Some(v)
    }

    /// Read a simple list field by canonical name.
    pub fn list(&self, name: &str) -> Option<&[String]> {
        let v = match name {
            "coreValues" => &self.core_values,
            "threeYearBullets" => &self.three_year_bullets,
            "targetMarket" => &self.target_market,
            "threeUniques" => &self.three_uniques,
            "oneYearGoals" => &self.one_year_goals,
            _ => return None,
        };
        Some(v.as_slice())
    }

    /// Mutable access to a simple list field by canonical name.
    pub fn list_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        let v = match name {
            "coreValues" => &mut self.core_values,
            "threeYearBullets" => &mut self.three_year_bullets,
            "targetMarket" => &mut self.target_market,
            "threeUniques" => &mut self.three_uniques,
            "oneYearGoals" => &mut self.one_year_goals,
            _ => return None,
        };
        Some(v)
    }

    /// All scalar fields as `(canonical name, value)` pairs, in table order.
    pub fn scalars(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Self::SCALAR_FIELDS
            .iter()
            .filter_map(move |&name| self.scalar(name).map(|v| (name, v)))
    }

    /// True when every field still holds its default.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// A new document with `f` applied to every string it contains.
    ///
    /// Scalars, list items and structured sub-fields are all visited; the
    /// list lengths and item order are preserved.
    pub fn map_text<F>(&self, f: F) -> Document
    where
        F: Fn(&str) -> String,
    {
        let mut out = Document::new();
        for name in Self::SCALAR_FIELDS {
            if let (Some(src), Some(dst)) = (self.scalar(name), out.scalar_mut(name)) {
                *dst = f(src);
            }
        }
        for name in Self::SIMPLE_LIST_FIELDS {
            if let (Some(src), Some(dst)) = (self.list(name), out.list_mut(name)) {
                *dst = src.iter().map(|s| f(s)).collect();
            }
        }
        out.rocks = self
            .rocks
            .iter()
            .map(|r| Rock {
                text: f(&r.text),
                owner: f(&r.owner),
            })
            .collect();
        out.issues = self
            .issues
            .iter()
            .map(|i| Issue {
                text: f(&i.text),
                status: f(&i.status),
            })
            .collect();
        out
    }
}
