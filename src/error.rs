//! Error types for lighthouse-summary.
//!
//! Every failure in the pipeline is one variant of [`Error`]. Only
//! [`Error::MarkerNotFound`] gets its own message and exit status; all the
//! others are reported uniformly by the binary.

use std::path::PathBuf;

/// Exit status when the embedded report JSON could not be located.
pub const EXIT_MARKER_NOT_FOUND: u8 = 1;

/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 2;

/// Error type for report loading, extraction, parsing and rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The report file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file is not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    Decode { path: PathBuf },

    /// No assignment to the report marker was found in the HTML.
    #[error("Could not find Lighthouse JSON in the file.")]
    MarkerNotFound,

    /// The marker pattern could not be compiled.
    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The extracted text is not a valid report document.
    #[error("malformed report JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the summary failed.
    #[error("failed to write summary: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MarkerNotFound => EXIT_MARKER_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, Error>;
