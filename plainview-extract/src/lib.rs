//! Tag-filtered text extraction over a parsed HTML document.
//!
//! Two halves:
//!
//! - [`text_nodes`] walks a `scraper`-parsed document in document order and
//!   flattens it into [`TextNode`]s, each carrying the literal text and the
//!   tag name of its immediate parent element.
//! - [`extract`] is the filtering pass: drop nodes whose parent tag is in
//!   [`EXCLUDED_TAGS`] or whose text is a lone newline, and join the rest
//!   with single spaces.
//!
//! The pass is deliberately literal: no whitespace normalisation, no
//! trimming, and the trailing separator is kept. Output ordering follows
//! the parser's document order exactly.

use scraper::{Html, Node};

/// Parent tag name reported for text hanging directly off the document root.
pub const DOCUMENT_ROOT_TAG: &str = "[document]";

/// Tag names whose immediate text is considered non-content and dropped.
///
/// Fixed at compile time. The set intentionally omits `style`, `footer`,
/// and `nav`; widening it changes observable output.
pub const EXCLUDED_TAGS: &[&str] = &[
    DOCUMENT_ROOT_TAG,
    "noscript",
    "header",
    "html",
    "meta",
    "head",
    "input",
    "script",
];

/// A text-bearing leaf of the parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    /// Literal text content, possibly whitespace-only.
    pub text: String,
    /// Lower-cased tag name of the enclosing element, or
    /// [`DOCUMENT_ROOT_TAG`] at the tree root.
    pub parent_tag: String,
}

/// Flatten `html` into text nodes in document order.
///
/// ```
/// use plainview_extract::text_nodes;
///
/// let nodes = text_nodes("<p>Hi</p>");
/// assert!(nodes.iter().any(|n| n.text == "Hi" && n.parent_tag == "p"));
/// ```
pub fn text_nodes(html: &str) -> Vec<TextNode> {
    let doc = Html::parse_document(html);
    doc.tree
        .root()
        .descendants()
        .filter_map(|node| {
            let Node::Text(text) = node.value() else {
                return None;
            };
            let parent_tag = match node.parent().map(|p| p.value()) {
                Some(Node::Element(el)) => el.name().to_ascii_lowercase(),
                _ => DOCUMENT_ROOT_TAG.to_string(),
            };
            Some(TextNode {
                text: text.text.to_string(),
                parent_tag,
            })
        })
        .collect()
}

/// The filtering pass: visible text of `nodes`, space-joined.
///
/// Total over its input: never fails, and an empty slice yields an empty
/// string. Each included node contributes its text plus one trailing space.
///
/// ```
/// use plainview_extract::{TextNode, extract};
///
/// let nodes = [TextNode { text: "Hello".into(), parent_tag: "p".into() }];
/// assert_eq!(extract(&nodes), "Hello ");
/// ```
pub fn extract(nodes: &[TextNode]) -> String {
    let mut output = String::new();
    for node in nodes {
        if EXCLUDED_TAGS.contains(&node.parent_tag.as_str()) || node.text == "\n" {
            continue;
        }
        output.push_str(&node.text);
        output.push(' ');
    }
    output
}

/// Convenience: [`text_nodes`] followed by [`extract`].
pub fn visible_text(html: &str) -> String {
    extract(&text_nodes(html))
}
