//! # lighthouse-summary
//!
//! Summarize a Lighthouse HTML report: category scores and the audits that
//! still need work.
//!
//! Lighthouse HTML reports embed the full JSON result as
//! `window.__LIGHTHOUSE_JSON__ = {...};` inside an inline script. This crate
//! pulls that object out with a pattern match, parses the parts it needs,
//! and renders a plain-text summary.
//!
//! ## Quick Start
//!
//! ```rust
//! use lighthouse_summary::{read_report, render_summary, Options};
//!
//! let html = r#"<html><script>window.__LIGHTHOUSE_JSON__ = {
//!   "categories": {"performance": {"title": "Performance", "score": 0.42,
//!                                  "auditRefs": [{"id": "lcp"}]}},
//!   "audits": {"lcp": {"title": "Largest Contentful Paint", "score": 0.1,
//!                      "scoreDisplayMode": "numeric", "displayValue": "4.8 s"}}
//! };</script></html>"#;
//!
//! let options = Options::default();
//! let report = read_report(html, &options)?;
//! let text = render_summary(&report, &options);
//! assert!(text.contains("Performance: 42"));
//! assert!(text.contains("- Largest Contentful Paint (Score: 0.1)"));
//! # Ok::<(), lighthouse_summary::Error>(())
//! ```

mod error;
mod extract;
mod options;
mod patterns;

/// Report file loading and UTF-8 decoding.
pub mod loader;

/// Lighthouse report data model.
pub mod report;

/// Score and failed-audit rendering.
pub mod summary;

use std::io::Write;
use std::path::Path;

// Public API - re-exports
pub use error::{Error, Result, EXIT_FAILURE, EXIT_MARKER_NOT_FOUND};
pub use extract::{extract_report_json, read_report};
pub use loader::load_report;
pub use options::{Options, DEFAULT_MARKER};
pub use report::{parse_report, Audit, AuditRef, Category, Report, RuntimeError, ScoreDisplayMode};
pub use summary::{failed_audits, render_summary, write_failed_audits, write_scores, write_summary};

/// Load the report at `path` and write its summary to `out`.
///
/// Nothing is written unless the report was loaded, located and parsed.
pub fn summarize_file<W: Write>(path: impl AsRef<Path>, options: &Options, out: &mut W) -> Result<()> {
    let html = load_report(path)?;
    let report = read_report(&html, options)?;
    write_summary(&report, options, out)?;
    Ok(())
}
