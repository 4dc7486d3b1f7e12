//! Page title extraction from the leading heading.

use comrak::nodes::{AstNode, NodeValue};

/// Extracts page title from document tree.
///
/// Looks at the top level blocks only: the first heading (ATX or setext)
/// supplies the title, taken from its first plain text child. Formatting
/// runs such as emphasis or inline code are skipped, so a heading made only
/// of formatted text yields no title.
///
/// # Arguments
///
/// * `root`: Document node returned by the parser
///
/// # Returns
///
/// Literal text of the first plain text run, or None
pub fn extract_title<'a>(root: &'a AstNode<'a>) -> Option<String> {
    let heading = root
        .children()
        .find(|node| matches!(node.data.borrow().value, NodeValue::Heading(_)))?;

    heading.children().find_map(|node| match &node.data.borrow().value {
        NodeValue::Text(text) => Some(text.clone()),
        _ => None,
    })
}
