//! Text normalization for extracted XML content.

/// Collapse every whitespace run (including full-width spaces) to a single
/// ASCII space and trim both ends.
///
/// # Examples
/// ```
/// use keiho_extractor::text::normalize_text;
///
/// assert_eq!(normalize_text("  人を\n  殺した者は、 "), "人を 殺した者は、");
/// assert_eq!(normalize_text("第一条\u{3000}"), "第一条");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim ASCII whitespace and NUL from both ends.
///
/// Full-width spaces (U+3000) are kept, so paragraph indentation in
/// Japanese statute text survives.
///
/// # Examples
/// ```
/// use keiho_extractor::text::strip_ascii_whitespace;
///
/// assert_eq!(strip_ascii_whitespace(" \u{3000}本文\r\n"), "\u{3000}本文");
/// ```
pub fn strip_ascii_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | '\0'))
}

/// Normalize a caption and strip one surrounding pair of parentheses.
///
/// Accepts both full-width `（）` and ASCII `()` pairs.
///
/// # Examples
/// ```
/// use keiho_extractor::text::normalize_caption;
///
/// assert_eq!(normalize_caption("（殺人）"), "殺人");
/// assert_eq!(normalize_caption("(定義)"), "定義");
/// assert_eq!(normalize_caption("通則"), "通則");
/// ```
pub fn normalize_caption(text: &str) -> String {
    let caption = normalize_text(text);

    for (open, close) in [('（', '）'), ('(', ')')] {
        if let Some(inner) = caption
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            return inner.trim().to_string();
        }
    }

    caption
}
