//! Configuration options for report summarization.
//!
//! The `Options` struct controls where the report JSON is looked up and
//! which audits count as failures.

use crate::report::ScoreDisplayMode;

/// Global variable Lighthouse assigns its report JSON to.
pub const DEFAULT_MARKER: &str = "window.__LIGHTHOUSE_JSON__";

/// Configuration options for report summarization.
///
/// # Example
///
/// ```rust
/// use lighthouse_summary::Options;
///
/// let options = Options {
///     marker: "window.__REPORT__".to_string(),
///     ..Options::default()
/// };
/// assert!(options.skips_mode(Some(lighthouse_summary::ScoreDisplayMode::Manual)));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Name the report JSON is assigned to inside the HTML.
    ///
    /// Matched literally, followed by `=` and the JSON object.
    ///
    /// Default: `window.__LIGHTHOUSE_JSON__`
    pub marker: String,

    /// Display modes whose audits are never reported as failed.
    ///
    /// A low score in these modes is not an actionable regression.
    ///
    /// Default: `informative`, `manual`, `notApplicable`
    pub skipped_display_modes: Vec<ScoreDisplayMode>,
}

impl Options {
    /// Whether audits with this display mode are left out of failures.
    ///
    /// Audits without a display mode are never skipped.
    #[must_use]
    pub fn skips_mode(&self, mode: Option<ScoreDisplayMode>) -> bool {
        mode.is_some_and(|m| self.skipped_display_modes.contains(&m))
    }

    pub(crate) fn uses_default_marker(&self) -> bool {
        self.marker == DEFAULT_MARKER
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            skipped_display_modes: vec![
                ScoreDisplayMode::Informative,
                ScoreDisplayMode::Manual,
                ScoreDisplayMode::NotApplicable,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.marker, "window.__LIGHTHOUSE_JSON__");
        assert!(opts.uses_default_marker());
        assert_eq!(opts.skipped_display_modes.len(), 3);
    }

    #[test]
    fn test_default_skipped_modes() {
        let opts = Options::default();

        assert!(opts.skips_mode(Some(ScoreDisplayMode::Informative)));
        assert!(opts.skips_mode(Some(ScoreDisplayMode::Manual)));
        assert!(opts.skips_mode(Some(ScoreDisplayMode::NotApplicable)));
        assert!(!opts.skips_mode(Some(ScoreDisplayMode::Numeric)));
        assert!(!opts.skips_mode(Some(ScoreDisplayMode::Binary)));
        assert!(!opts.skips_mode(Some(ScoreDisplayMode::MetricSavings)));
        assert!(!opts.skips_mode(None));
    }

    #[test]
    fn test_custom_marker() {
        let opts = Options {
            marker: "window.__REPORT__".to_string(),
            ..Options::default()
        };

        assert!(!opts.uses_default_marker());
        assert!(opts.skips_mode(Some(ScoreDisplayMode::Manual)));
    }

    #[test]
    fn test_empty_skip_list_reports_everything() {
        let opts = Options {
            skipped_display_modes: Vec::new(),
            ..Options::default()
        };

        assert!(!opts.skips_mode(Some(ScoreDisplayMode::Informative)));
    }
}
