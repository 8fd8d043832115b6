//! Reading the source text of a legal code.

use std::fs;
use std::path::Path;

use crate::error::{ExtractorError, Result};

/// Read an input file as UTF-8 text.
///
/// Strips a leading byte order mark and converts CRLF line endings to LF so
/// that blank-line splitting behaves the same for files saved on Windows.
///
/// # Arguments
/// * `path` - File to read
///
/// # Returns
/// The normalized file contents
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ExtractorError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|_| ExtractorError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "Read source");
    Ok(normalize_line_endings(&text))
}

/// Remove a byte order mark and normalize line endings.
fn normalize_line_endings(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.contains('\r') {
        text.replace("\r\n", "\n")
    } else {
        text.to_string()
    }
}
