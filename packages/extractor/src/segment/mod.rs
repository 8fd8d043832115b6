//! Plain-text article segmenter.
//!
//! Splits a legal code on blank lines, classifies every section and folds
//! the classifications into a list of [`Article`] records.

mod classify;
mod state;

use std::path::Path;

pub use classify::classify;
pub use state::SegmentState;

use crate::config::SECTION_SEPARATOR;
use crate::error::Result;
use crate::source::read_source;
use crate::types::{Article, SectionKind};

/// Split a document into blank-line-delimited sections.
pub fn split_sections(text: &str) -> impl Iterator<Item = &str> {
    text.split(SECTION_SEPARATOR)
}

/// Segment a whole document into articles.
///
/// # Examples
/// ```
/// use keiho_extractor::segment::segment;
///
/// let articles = segment("〔総則〕\n\n第一条　この法律は、\n\n前項の規定");
/// assert_eq!(articles.len(), 1);
/// assert_eq!(articles[0].title, "第一条");
/// assert_eq!(articles[0].caption, "総則");
/// assert_eq!(articles[0].text, "この法律は、\n前項の規定");
/// ```
pub fn segment(text: &str) -> Vec<Article> {
    let state = split_sections(text)
        .enumerate()
        .fold(SegmentState::new(), |state, (index, section)| {
            let kind = classify(section, state.mode);
            if kind == SectionKind::Unrecognized {
                tracing::debug!(section = index, mode = ?state.mode, "Ignoring unrecognized section");
            }
            state.step(kind)
        });

    let articles = state.finish();
    tracing::debug!(articles = articles.len(), "Segmented document");
    articles
}

/// Read a text file and segment it.
pub fn segment_file(path: &Path) -> Result<Vec<Article>> {
    let text = read_source(path)?;
    Ok(segment(&text))
}
