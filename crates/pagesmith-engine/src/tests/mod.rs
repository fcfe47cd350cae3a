//! Shared fixtures for unit tests

use crate::models::{ElementId, ElementNode, ElementType, LayoutKind};

/// ```text
/// layout_row_1
///   p_1
///   div_1
///     span_1
/// h1_1
/// ```
pub fn sample_tree() -> Vec<ElementNode> {
    let mut row = ElementNode::layout(ElementId::new("layout_row_1"), LayoutKind::Row);
    let mut div = ElementNode::element(ElementId::new("div_1"), ElementType::Div);
    div.children.push(ElementNode::element(
        ElementId::new("span_1"),
        ElementType::Span,
    ));
    row.children.push(ElementNode::element(
        ElementId::new("p_1"),
        ElementType::Paragraph,
    ));
    row.children.push(div);

    vec![
        row,
        ElementNode::element(ElementId::new("h1_1"), ElementType::Heading1),
    ]
}
