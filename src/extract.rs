//! Locating and parsing the report JSON embedded in the HTML.

use std::borrow::Cow;

use regex::Regex;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns;
use crate::report::{parse_report, Report};

/// Find the JSON object assigned to `options.marker`.
///
/// Returns `Ok(None)` when there is no assignment to the marker. The object
/// ends at the first `};` after the marker; nested objects closing with `};`
/// inside a string value are not accounted for.
///
/// # Example
///
/// ```rust
/// use lighthouse_summary::{extract_report_json, Options};
///
/// let html = "<script>window.__LIGHTHOUSE_JSON__ = {\"audits\": {}};</script>";
/// let json = extract_report_json(html, &Options::default())?;
/// assert_eq!(json, Some("{\"audits\": {}}"));
/// # Ok::<(), lighthouse_summary::Error>(())
/// ```
pub fn extract_report_json<'a>(html: &'a str, options: &Options) -> Result<Option<&'a str>> {
    let pattern: Cow<'_, Regex> = if options.uses_default_marker() {
        Cow::Borrowed(&*patterns::REPORT_ASSIGNMENT)
    } else {
        Cow::Owned(patterns::assignment_regex(&options.marker)?)
    };

    let json = pattern
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    match json {
        Some(json) => tracing::debug!(marker = %options.marker, len = json.len(), "found report JSON"),
        None => tracing::debug!(marker = %options.marker, "no report JSON assignment"),
    }

    Ok(json)
}

/// Extract and parse the report embedded in `html`.
///
/// A missing assignment is reported as [`Error::MarkerNotFound`].
pub fn read_report(html: &str, options: &Options) -> Result<Report> {
    let json = extract_report_json(html, options)?.ok_or(Error::MarkerNotFound)?;
    parse_report(json)
}
