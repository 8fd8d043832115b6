//! Core data types for the extractor.

use serde::{Deserialize, Serialize};

use crate::text::strip_ascii_whitespace;

/// A single article record, the unit of the emitted JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article label (e.g., "第九条"), or the front-matter marker.
    pub title: String,

    /// Caption attached to the article; empty when none was given.
    pub caption: String,

    /// Body text, paragraphs joined by a single newline.
    pub text: String,

    /// Source document tag, set by downstream merging only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Article {
    /// Create a new article.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        caption: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            caption: caption.into(),
            text: text.into(),
            doc: None,
        }
    }

    /// Append a continuation paragraph and re-trim the body.
    ///
    /// Only ASCII whitespace is trimmed; full-width indentation is kept.
    pub fn append_paragraph(&mut self, paragraph: &str) {
        self.text.push('\n');
        self.text.push_str(strip_ascii_whitespace(paragraph));
        let trimmed = strip_ascii_whitespace(&self.text);
        if trimmed.len() != self.text.len() {
            self.text = trimmed.to_string();
        }
    }
}

/// Segmenter position within the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Before any chapter or article.
    #[default]
    Root,

    /// After a chapter heading, before its first article.
    ChapterSeen,

    /// Inside an article body.
    Article,
}

/// Classification of one blank-line-delimited section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind<'a> {
    /// The preamble marker.
    FrontMatter,

    /// Bracketed caption; holds the interior text.
    Caption(&'a str),

    /// Chapter heading.
    Chapter,

    /// Article heading with its label and opening text.
    ArticleHeader { label: &'a str, body: &'a str },

    /// Additional paragraph of the open article.
    Continuation(&'a str),

    /// Anything else outside an article.
    Unrecognized,
}
