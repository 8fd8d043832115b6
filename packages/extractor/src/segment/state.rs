//! Segmenter state threaded through the section fold.

use crate::config::FRONT_MATTER_MARKER;
use crate::text::strip_ascii_whitespace;
use crate::types::{Article, Mode, SectionKind};

/// State carried from one section to the next.
///
/// Each [`step`](SegmentState::step) consumes the state and returns the next
/// one. Records in `articles` are final; only `current` is still growing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentState {
    /// Structural position.
    pub mode: Mode,

    /// Caption waiting for the next article header.
    pub pending_caption: Option<String>,

    /// Article still accumulating paragraphs.
    pub current: Option<Article>,

    /// Finalized articles in document order.
    pub articles: Vec<Article>,
}

impl SegmentState {
    /// Create the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one classified section.
    #[must_use]
    pub fn step(mut self, kind: SectionKind<'_>) -> Self {
        match kind {
            SectionKind::FrontMatter => {
                // Replaces an open record without emitting it.
                if let Some(dropped) = &self.current {
                    tracing::warn!(
                        title = %dropped.title,
                        "Front matter replaces an unfinished article"
                    );
                }
                self.mode = Mode::Article;
                self.pending_caption = None;
                self.current = Some(Article::new(FRONT_MATTER_MARKER, "", ""));
            }
            SectionKind::Caption(caption) => {
                tracing::debug!(caption, "Caption read");
                self.pending_caption = Some(caption.to_string());
            }
            SectionKind::Chapter => {
                self.mode = Mode::ChapterSeen;
            }
            SectionKind::ArticleHeader { label, body } => {
                self.mode = Mode::Article;
                if let Some(done) = self.current.take() {
                    self.articles.push(done);
                }
                let caption = self.pending_caption.take().unwrap_or_default();
                self.current = Some(Article::new(label, caption, strip_ascii_whitespace(body)));
            }
            SectionKind::Continuation(paragraph) => match self.current.as_mut() {
                Some(article) => article.append_paragraph(paragraph),
                None => tracing::debug!("Continuation without an open article, dropped"),
            },
            SectionKind::Unrecognized => {}
        }
        self
    }

    /// Emit the open article, if any, and return all articles.
    #[must_use]
    pub fn finish(mut self) -> Vec<Article> {
        if let Some(done) = self.current.take() {
            self.articles.push(done);
        }
        self.articles
    }
}
