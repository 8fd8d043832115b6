//! Markup constants, compiled patterns and path validation.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ExtractorError, Result};

/// Section that opens the preamble (前文) of a code.
pub const FRONT_MATTER_MARKER: &str = "前文";

/// Traditional numerals allowed in chapter and article labels.
pub const KANJI_NUMERALS: &str = "一二三四五六七八九十百千零〇";

/// Full-width space separating an article label from its opening text.
pub const ARTICLE_DELIMITER: char = '\u{3000}';

/// Separator between sections of a plain-text code.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Default input for the `segment` command.
pub const DEFAULT_TEXT_INPUT: &str = "kenpo.txt";

/// Default output for the `segment` command.
pub const DEFAULT_TEXT_OUTPUT: &str = "kenpo.json";

/// Default input for the `xml` command.
pub const DEFAULT_XML_INPUT: &str = "keiho.xml";

/// Bracketed caption, e.g. `〔天皇の地位・国民主権〕`. Captures the interior.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static CAPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"〔(.+)〕").expect("valid regex"));

/// Chapter heading at a line start, e.g. `第三章　国民の権利及び義務`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static CHAPTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?m)^第[{KANJI_NUMERALS}]+章")).expect("valid regex")
});

/// Article heading at a line start. Captures the label and the rest of that line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static ARTICLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^(第[{KANJI_NUMERALS}]+条){ARTICLE_DELIMITER}(.+)"
    ))
    .expect("valid regex")
});

/// Validate that an output file can be created at `path`.
///
/// The file itself may or may not exist, but its parent directory must.
///
/// # Examples
/// ```
/// use keiho_extractor::config::validate_output_path;
///
/// assert!(validate_output_path(std::path::Path::new("kenpo.json")).is_ok());
/// assert!(validate_output_path(std::path::Path::new("/no/such/dir/kenpo.json")).is_err());
/// ```
pub fn validate_output_path(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };

    if parent.is_dir() {
        Ok(())
    } else {
        Err(ExtractorError::OutputDirectory {
            path: parent.to_path_buf(),
        })
    }
}
