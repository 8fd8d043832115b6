//! JSON writer for article files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::validate_output_path;
use crate::error::{ExtractorError, Result};
use crate::source::read_source;
use crate::types::Article;

/// Generate a pretty-printed JSON array, terminated by a newline.
///
/// Non-ASCII text is written as-is, not escaped.
///
/// # Examples
/// ```
/// use keiho_extractor::json::generate_json;
/// use keiho_extractor::types::Article;
///
/// let json = generate_json(&[Article::new("第一条", "", "本文")]).unwrap();
/// assert!(json.contains("\"title\": \"第一条\""));
/// assert!(json.ends_with("]\n"));
/// ```
pub fn generate_json(articles: &[Article]) -> Result<String> {
    let mut content = serde_json::to_string_pretty(articles)?;
    content.push('\n');
    Ok(content)
}

/// Write the JSON array to any writer (e.g. stdout).
pub fn write_json<W: Write>(articles: &[Article], mut writer: W) -> Result<()> {
    let content = generate_json(articles)?;
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Save articles as a JSON file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt existing files on crash.
///
/// # Arguments
/// * `articles` - Records to save
/// * `path` - Destination file; its directory must exist
///
/// # Returns
/// Path to the saved file
pub fn save_json(articles: &[Article], path: &Path) -> Result<PathBuf> {
    validate_output_path(path)?;

    let content = generate_json(articles)?;
    let temp_file = temp_path(path);

    let write_err = |source| ExtractorError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    {
        let mut file = File::create(&temp_file).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path).map_err(write_err)?;
    }

    if let Err(source) = fs::rename(&temp_file, path) {
        let _ = fs::remove_file(&temp_file);
        return Err(write_err(source));
    }

    tracing::debug!(path = %path.display(), articles = articles.len(), "Saved JSON");
    Ok(path.to_path_buf())
}

/// Load a previously written JSON file.
pub fn load_json(path: &Path) -> Result<Vec<Article>> {
    let content = read_source(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Hidden sibling used for the atomic write, e.g. `.kenpo.json.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}
