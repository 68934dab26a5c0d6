//! Text rendering of category scores and failed audits.
//!
//! Writers take any `io::Write` so the binary can stream to stdout and tests
//! can render into a buffer.

use std::io::{self, Write};

use crate::options::Options;
use crate::report::{Audit, Category, Report};

/// Audits in `category` that count as failures, in `auditRefs` order.
///
/// An audit fails when it has a score below 1 and its display mode is not
/// skipped by `options`. Refs that do not resolve are ignored.
#[must_use]
pub fn failed_audits<'r>(category: &Category, report: &'r Report, options: &Options) -> Vec<&'r Audit> {
    category
        .audit_refs
        .iter()
        .filter_map(|audit_ref| {
            let id = audit_ref.id.as_deref()?;
            let audit = report.audit(id);
            if audit.is_none() {
                tracing::trace!(id, "audit ref does not resolve");
            }
            audit
        })
        .filter(|audit| audit.score_value().is_some_and(|score| score < 1.0))
        .filter(|audit| !options.skips_mode(audit.score_display_mode))
        .collect()
}

/// Write the `--- Scores ---` section.
pub fn write_scores<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Scores ---")?;
    for (_, category) in &report.categories {
        let title = category.title.as_deref().unwrap_or_default();
        match category.percent() {
            Some(percent) => writeln!(out, "{title}: {percent}")?,
            None => writeln!(out, "{title}: N/A")?,
        }
    }
    Ok(())
}

/// Write the `--- Failed Audits (Score < 1) ---` section.
pub fn write_failed_audits<W: Write>(report: &Report, options: &Options, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Failed Audits (Score < 1) ---")?;
    for (_, category) in &report.categories {
        writeln!(out, "\nCategory: {}", category.title.as_deref().unwrap_or_default())?;
        for audit in failed_audits(category, report, options) {
            let title = audit.title.as_deref().unwrap_or_default();
            if let Some(score) = &audit.score {
                writeln!(out, "- {title} (Score: {score})")?;
            }
            if let Some(value) = audit.display_value() {
                writeln!(out, "  Value: {value}")?;
            }
        }
    }
    Ok(())
}

/// Write the full summary: runtime error, scores, then failed audits.
pub fn write_summary<W: Write>(report: &Report, options: &Options, out: &mut W) -> io::Result<()> {
    if let Some(err) = &report.runtime_error {
        tracing::debug!(code = err.code.as_deref(), "report carries a runtime error");
        writeln!(out, "Runtime Error: {}", err.message)?;
    }
    write_scores(report, out)?;
    write_failed_audits(report, options, out)
}

/// Render the full summary into a string.
#[must_use]
pub fn render_summary(report: &Report, options: &Options) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_summary(report, options, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
