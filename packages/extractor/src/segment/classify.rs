//! Section classification.
//!
//! Classification only looks at the section text. The current [`Mode`] is
//! consulted last, to tell a continuation paragraph from a section that is
//! dropped.

use crate::config::{ARTICLE_PATTERN, CAPTION_PATTERN, CHAPTER_PATTERN, FRONT_MATTER_MARKER};
use crate::types::{Mode, SectionKind};

/// Classify a section. The first matching rule wins:
/// front matter, caption, chapter, article header, then the mode fallback.
///
/// # Examples
/// ```
/// use keiho_extractor::segment::classify;
/// use keiho_extractor::types::{Mode, SectionKind};
///
/// assert_eq!(classify("〔総則〕", Mode::Root), SectionKind::Caption("総則"));
/// assert_eq!(classify("附則", Mode::Root), SectionKind::Unrecognized);
/// ```
pub fn classify(section: &str, mode: Mode) -> SectionKind<'_> {
    if section == FRONT_MATTER_MARKER {
        return SectionKind::FrontMatter;
    }

    if let Some(interior) = CAPTION_PATTERN.captures(section).and_then(|c| c.get(1)) {
        return SectionKind::Caption(interior.as_str());
    }

    if CHAPTER_PATTERN.is_match(section) {
        return SectionKind::Chapter;
    }

    if let Some(caps) = ARTICLE_PATTERN.captures(section) {
        if let (Some(label), Some(body)) = (caps.get(1), caps.get(2)) {
            return SectionKind::ArticleHeader {
                label: label.as_str(),
                body: body.as_str(),
            };
        }
    }

    match mode {
        Mode::Article => SectionKind::Continuation(section),
        Mode::Root | Mode::ChapterSeen => SectionKind::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_matter_exact() {
        assert_eq!(classify("前文", Mode::Root), SectionKind::FrontMatter);
        assert_eq!(classify("前文", Mode::Article), SectionKind::FrontMatter);
        // Only the bare marker counts
        assert_eq!(classify(" 前文", Mode::Root), SectionKind::Unrecognized);
    }

    #[test]
    fn test_caption() {
        assert_eq!(
            classify("〔戦争の放棄〕", Mode::Article),
            SectionKind::Caption("戦争の放棄")
        );
    }

    #[test]
    fn test_caption_wins_over_article_header() {
        assert_eq!(
            classify("第一条　〔総則〕", Mode::Root),
            SectionKind::Caption("総則")
        );
    }

    #[test]
    fn test_chapter() {
        assert_eq!(classify("第一章　天皇", Mode::Root), SectionKind::Chapter);
        assert_eq!(classify("第十一章　補則", Mode::Article), SectionKind::Chapter);
    }

    #[test]
    fn test_article_header() {
        assert_eq!(
            classify("第一条　任期为五年。", Mode::Root),
            SectionKind::ArticleHeader {
                label: "第一条",
                body: "任期为五年。",
            }
        );
    }

    #[test]
    fn test_article_header_takes_first_line_only() {
        assert_eq!(
            classify("第七条　天皇は、\n一　憲法改正", Mode::ChapterSeen),
            SectionKind::ArticleHeader {
                label: "第七条",
                body: "天皇は、",
            }
        );
    }

    #[test]
    fn test_fallback_depends_on_mode() {
        let section = "前項規定于下列情形准用之。";
        assert_eq!(
            classify(section, Mode::Article),
            SectionKind::Continuation(section)
        );
        assert_eq!(classify(section, Mode::Root), SectionKind::Unrecognized);
        assert_eq!(classify(section, Mode::ChapterSeen), SectionKind::Unrecognized);
    }

    #[test]
    fn test_arabic_numerals_not_recognized() {
        assert_eq!(classify("第1条　本文", Mode::Root), SectionKind::Unrecognized);
    }
}
