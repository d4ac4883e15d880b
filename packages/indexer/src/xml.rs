//! XML navigation helpers for the legislation dialects.

use roxmltree::{Document, Node};

/// Get the tag name without namespace prefix.
pub fn local_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first descendant element whose local name matches, ignoring
/// namespaces.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use archview_indexer::xml::find_descendant;
///
/// let xml = r#"<Statute><Identification><ShortTitle>Act</ShortTitle></Identification></Statute>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert!(find_descendant(&doc, "ShortTitle").is_some());
/// assert!(find_descendant(&doc, "LongTitle").is_none());
/// ```
pub fn find_descendant<'a, 'input>(
    doc: &'a Document<'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    doc.descendants()
        .find(|node| node.is_element() && local_name(*node) == tag)
}

/// Find the first descendant element matching a (namespace, local name)
/// pair exactly.
pub fn find_descendant_ns<'a, 'input>(
    doc: &'a Document<'input>,
    namespace: &str,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    doc.descendants().find(|node| {
        node.is_element()
            && node.tag_name().name() == tag
            && node.tag_name().namespace() == Some(namespace)
    })
}

/// Get the trimmed text content of a node, or `None` when it is empty or
/// absent.
pub fn nonempty_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
