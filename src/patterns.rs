//! Compiled regex patterns for locating the embedded report.
//!
//! The default pattern is compiled once using `LazyLock`. Custom markers are
//! escaped and compiled on demand.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::DEFAULT_MARKER;

/// Matches `window.__LIGHTHOUSE_JSON__ = {...};` across lines.
///
/// Capture 1 is the object literal. The match is non-greedy: it ends at the
/// first `};` after the marker, so a `};` inside a string value would cut the
/// document short.
#[allow(clippy::expect_used)]
pub static REPORT_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&assignment_pattern(DEFAULT_MARKER)).expect("REPORT_ASSIGNMENT regex")
});

/// Build the assignment pattern for `marker`.
pub fn assignment_pattern(marker: &str) -> String {
    format!(r"(?s){}\s*=\s*(\{{.*?\}});", regex::escape(marker))
}

/// Compile the assignment pattern for a custom marker.
pub fn assignment_regex(marker: &str) -> Result<Regex, regex::Error> {
    Regex::new(&assignment_pattern(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_escapes_marker() {
        assert_eq!(
            assignment_pattern(DEFAULT_MARKER),
            r"(?s)window\.__LIGHTHOUSE_JSON__\s*=\s*(\{.*?\});"
        );
    }

    #[test]
    fn default_pattern_matches_across_lines() {
        let text = "window.__LIGHTHOUSE_JSON__ =\n{\n\"a\": 1\n};";
        let caps = REPORT_ASSIGNMENT.captures(text);
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("{\n\"a\": 1\n}"));
    }

    #[test]
    fn dot_in_marker_is_literal() {
        let text = "windowX__LIGHTHOUSE_JSON__ = {};";
        assert!(!REPORT_ASSIGNMENT.is_match(text));
    }

    #[test]
    fn custom_marker_compiles() {
        let re = assignment_regex("window.__REPORT__[0]");
        assert!(re.is_ok_and(|re| re.is_match("window.__REPORT__[0] = {};")));
    }
}
