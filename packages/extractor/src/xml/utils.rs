//! XML utility functions for navigating e-Gov law documents.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use keiho_extractor::xml::get_tag_name;
///
/// let xml = r#"<Law><Article>text</Article></Law>"#;
/// let doc = Document::parse(xml).unwrap();
/// let article = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(article), "Article");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the first child element with the given tag name.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `tag` - Tag name to search for
///
/// # Returns
/// First matching child element, or `None` if not found
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find all descendant elements with the given tag name, in document order.
///
/// The node itself is not included.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use keiho_extractor::xml::find_descendants;
///
/// let xml = r#"<Article><Paragraph><Sentence>a</Sentence></Paragraph><Sentence>b</Sentence></Article>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let sentences: Vec<_> = find_descendants(doc.root_element(), "Sentence").collect();
/// assert_eq!(sentences.len(), 2);
/// ```
pub fn find_descendants<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(move |child| has_tag(*child, tag))
}

/// Check whether any ancestor of `node` has the given tag name.
pub fn has_ancestor(node: Node<'_, '_>, tag: &str) -> bool {
    node.ancestors().skip(1).any(|ancestor| has_tag(ancestor, tag))
}

/// Concatenate all text below `node`, skipping the subtrees of elements
/// named `skip`.
///
/// Tail text after a skipped element is kept.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use keiho_extractor::xml::text_without;
///
/// let xml = r#"<Sentence><Ruby>詐<Rt>さ</Rt></Ruby>欺</Sentence>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(text_without(doc.root_element(), "Rt"), "詐欺");
/// ```
pub fn text_without(node: Node<'_, '_>, skip: &str) -> String {
    let mut text = String::new();
    push_text_without(node, skip, &mut text);
    text
}

fn push_text_without(node: Node<'_, '_>, skip: &str, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            if let Some(t) = child.text() {
                out.push_str(t);
            }
        } else if child.is_element() && get_tag_name(child) != skip {
            push_text_without(child, skip, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<ns:Law xmlns:ns="http://example.com"><ns:Article/></ns:Law>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "Law");
    }

    #[test]
    fn test_find_child_direct_only() {
        let xml = r#"<Article><Paragraph><ArticleTitle/></Paragraph><ArticleCaption/></Article>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert!(find_child(root, "ArticleCaption").is_some());
        assert!(find_child(root, "ArticleTitle").is_none());
    }

    #[test]
    fn test_find_descendants_excludes_self() {
        let xml = r#"<Article><Article/></Article>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(find_descendants(doc.root_element(), "Article").count(), 1);
    }

    #[test]
    fn test_has_ancestor() {
        let xml = r#"<Law><MainProvision><Chapter><Article/></Chapter></MainProvision><SupplProvision><Article/></SupplProvision></Law>"#;
        let doc = Document::parse(xml).unwrap();
        let articles: Vec<_> = doc.descendants().filter(|n| has_tag(*n, "Article")).collect();

        assert!(has_ancestor(articles[0], "MainProvision"));
        assert!(!has_ancestor(articles[1], "MainProvision"));
    }

    #[test]
    fn test_text_without_keeps_tail() {
        let xml = r#"<Sentence>前<Ruby>句<Rt>く</Rt>末</Ruby>後</Sentence>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(text_without(doc.root_element(), "Rt"), "前句末後");
    }

    #[test]
    fn test_text_without_no_skip_match() {
        let xml = r#"<Sentence>a<b>b</b>c</Sentence>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(text_without(doc.root_element(), "Rt"), "abc");
    }
}
