//! Report file loading.
//!
//! The HTML report is read in one go and decoded as strict UTF-8. A leading
//! byte order mark is dropped; malformed sequences are an error rather than
//! being replaced.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use encoding_rs::UTF_8;

use crate::error::{Error, Result};

/// Read the report at `path` as UTF-8 text.
pub fn load_report(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read report file");

    decode_utf8(&bytes)
        .map(Cow::into_owned)
        .ok_or_else(|| Error::Decode {
            path: path.to_path_buf(),
        })
}

/// Decode `bytes` as UTF-8 without a BOM, or `None` if they are malformed.
#[must_use]
pub fn decode_utf8(bytes: &[u8]) -> Option<Cow<'_, str>> {
    let body = match encoding_rs::Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) if encoding == UTF_8 => &bytes[bom_len..],
        _ => bytes,
    };
    UTF_8.decode_without_bom_handling_and_without_replacement(body)
}
