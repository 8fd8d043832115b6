//! Error types for the extractor.
//!
//! `ExtractorError` carries the path or element that caused a failure so the
//! CLI can report it without extra context.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Input file missing or unreadable.
    #[error("Failed to read input {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid UTF-8.
    #[error("Input {} is not valid UTF-8", .path.display())]
    InvalidEncoding { path: PathBuf },

    /// Output file could not be written.
    #[error("Failed to write output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory missing or not a directory.
    #[error("Output directory {} does not exist or is not a directory", .path.display())]
    OutputDirectory { path: PathBuf },

    /// Generated output differs from the file on disk.
    #[error("{} is out of date; re-run without --check to regenerate it", .path.display())]
    OutputMismatch { path: PathBuf },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// `ArticleTitle` present but empty.
    #[error("Empty ArticleTitle in {context}")]
    EmptyArticleTitle { context: String },

    /// Article without any non-empty `Sentence`.
    #[error("Article {title} has no sentences")]
    EmptyArticleBody { title: String },
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
