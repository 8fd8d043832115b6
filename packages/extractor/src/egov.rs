//! Article extraction from e-Gov law XML.
//!
//! e-Gov publishes statutes as `<Law>` documents. Articles of the main
//! provision live under `<MainProvision>`; each `<Article>` has an
//! `<ArticleTitle>`, an optional `<ArticleCaption>` and one or more
//! `<Sentence>` elements nested in paragraphs and items. Ruby readings
//! (`<Rt>`) are dropped from all extracted text.

use std::path::Path;

use roxmltree::{Document, Node};

use crate::error::{ExtractorError, Result};
use crate::source::read_source;
use crate::text::{normalize_caption, normalize_text};
use crate::types::Article;
use crate::xml::{find_child, find_descendants, has_ancestor, has_tag, text_without};

/// Body text of an article that has been repealed.
const REPEALED_MARKER: &str = "削除";

/// Ruby reading element, excluded from text.
const RUBY_READING_TAG: &str = "Rt";

/// Extract main-provision articles from e-Gov law XML.
///
/// Repealed articles (whose first sentence is `削除`) are skipped.
/// Supplementary provisions are not included.
///
/// # Errors
/// Fails when the XML is malformed, an article has no (or an empty)
/// `ArticleTitle`, or an article has no sentences.
pub fn extract_articles(xml: &str) -> Result<Vec<Article>> {
    let doc = Document::parse(xml)?;
    let mut articles = Vec::new();
    let mut repealed = 0usize;

    let main_articles = doc
        .descendants()
        .filter(|n| has_tag(*n, "Article") && has_ancestor(*n, "MainProvision"));

    for (index, node) in main_articles.enumerate() {
        match extract_article(node, index)? {
            Some(article) => articles.push(article),
            None => repealed += 1,
        }
    }

    tracing::debug!(
        articles = articles.len(),
        repealed,
        "Extracted articles from XML"
    );
    Ok(articles)
}

/// Read an XML file and extract its articles.
pub fn extract_articles_from_file(path: &Path) -> Result<Vec<Article>> {
    let xml = read_source(path)?;
    extract_articles(&xml)
}

/// Extract one `<Article>`; `None` when it has been repealed.
fn extract_article(node: Node<'_, '_>, index: usize) -> Result<Option<Article>> {
    let context = format!("Article #{}", index + 1);

    let title_node = find_child(node, "ArticleTitle").ok_or_else(|| {
        ExtractorError::MissingElement {
            element: "ArticleTitle".to_string(),
            context: context.clone(),
        }
    })?;
    let title = normalize_text(&text_without(title_node, RUBY_READING_TAG));
    if title.is_empty() {
        return Err(ExtractorError::EmptyArticleTitle { context });
    }

    let caption = find_child(node, "ArticleCaption")
        .map(|c| normalize_caption(&text_without(c, RUBY_READING_TAG)))
        .unwrap_or_default();

    let sentences: Vec<String> = find_descendants(node, "Sentence")
        .map(|s| normalize_text(&text_without(s, RUBY_READING_TAG)))
        .filter(|s| !s.is_empty())
        .collect();

    match sentences.first() {
        None => Err(ExtractorError::EmptyArticleBody { title }),
        Some(first) if first == REPEALED_MARKER => {
            tracing::debug!(title = %title, "Skipping repealed article");
            Ok(None)
        }
        Some(_) => Ok(Some(Article::new(title, caption, sentences.join("\n")))),
    }
}
