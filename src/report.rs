//! Lighthouse report data model.
//!
//! Only the parts of the report needed for the summary are modeled. Every
//! field is optional: Lighthouse omits or nulls fields freely, especially
//! when the run hit a runtime error.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Number;

use crate::error::Result;

/// Parsed Lighthouse report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Set when Lighthouse failed to audit the page.
    #[serde(default)]
    pub runtime_error: Option<RuntimeError>,

    /// Categories in the order they are declared in the report.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub categories: Vec<(String, Category)>,

    /// Audits keyed by id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub audits: HashMap<String, Audit>,
}

/// Page-level failure reported by Lighthouse.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeError {
    /// Machine-readable error code, e.g. `NO_FCP`.
    #[serde(default)]
    pub code: Option<String>,

    /// Human-readable description.
    pub message: String,
}

/// A grading dimension such as Performance or Accessibility.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub title: Option<String>,

    /// Score in `[0, 1]`, `None` when unscored.
    #[serde(default)]
    pub score: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub audit_refs: Vec<AuditRef>,
}

/// Reference from a category to one of its audits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditRef {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub weight: Option<f64>,

    #[serde(default)]
    pub group: Option<String>,
}

/// A single Lighthouse check.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(default)]
    pub title: Option<String>,

    /// Raw score as written in the report, `None` when unscored.
    #[serde(default)]
    pub score: Option<Number>,

    #[serde(default)]
    pub score_display_mode: Option<ScoreDisplayMode>,

    /// Human-readable measurement, e.g. `2.4 s`.
    #[serde(default)]
    pub display_value: Option<String>,
}

/// How an audit's score is meant to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreDisplayMode {
    Numeric,
    Binary,
    Manual,
    Informative,
    NotApplicable,
    Error,
    MetricSavings,
    #[serde(other)]
    Other,
}

impl Report {
    /// Look up an audit by id.
    #[must_use]
    pub fn audit(&self, id: &str) -> Option<&Audit> {
        self.audits.get(id)
    }
}

impl Category {
    /// Score as a whole percentage, truncated toward zero.
    #[must_use]
    pub fn percent(&self) -> Option<i64> {
        self.score.map(|score| (score * 100.0) as i64)
    }
}

impl Audit {
    /// Score as a float for threshold checks.
    #[must_use]
    pub fn score_value(&self) -> Option<f64> {
        self.score.as_ref().and_then(Number::as_f64)
    }

    /// Display value, if present and non-empty.
    #[must_use]
    pub fn display_value(&self) -> Option<&str> {
        self.display_value.as_deref().filter(|v| !v.is_empty())
    }
}

/// Parse the extracted report JSON.
pub fn parse_report(json: &str) -> Result<Report> {
    let report: Report = serde_json::from_str(json)?;
    tracing::debug!(
        categories = report.categories.len(),
        audits = report.audits.len(),
        "parsed report"
    );
    Ok(report)
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a JSON object into `(key, value)` pairs, keeping key order.
fn ordered_entries<'de, D, T>(deserializer: D) -> std::result::Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct Entries<T>(Vec<(String, T)>);

    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = Entries<T>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, T>()? {
                entries.push(entry);
            }
            Ok(Entries(entries))
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
        fn deserialize<D2>(deserializer: D2) -> std::result::Result<Self, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_map(EntriesVisitor(PhantomData))
        }
    }

    Ok(Option::<Entries<T>>::deserialize(deserializer)?
        .map(|e| e.0)
        .unwrap_or_default())
}
