//! Layout preset table shared by the renderer and the exporter.

use crate::models::{LayoutKind, StyleMap, StyleProperty};

/// Padding every layout container gets on top of its base bundle
pub const LAYOUT_PADDING: &str = "0.5rem";
/// Bottom margin every layout container gets on top of its base bundle
pub const LAYOUT_MARGIN_BOTTOM: &str = "0.5rem";
/// Decoration the live view draws around layout containers; never exported
pub const LAYOUT_BORDER: &str = "2px dashed #888";

/// Flex properties specific to `kind`
pub fn base_preset(kind: LayoutKind) -> StyleMap {
    use StyleProperty::*;

    match kind {
        LayoutKind::Row => [
            (Display, "flex"),
            (FlexDirection, "row"),
            (Gap, "1rem"),
            (FlexWrap, "wrap"),
            (Flex, "1"),
        ]
        .into_iter()
        .collect(),
        LayoutKind::Column => [
            (Display, "flex"),
            (FlexDirection, "column"),
            (Gap, "1rem"),
            (Flex, "1"),
        ]
        .into_iter()
        .collect(),
        LayoutKind::Center => [
            (Display, "flex"),
            (JustifyContent, "center"),
            (AlignItems, "center"),
            (Flex, "1"),
        ]
        .into_iter()
        .collect(),
    }
}

/// Base bundle plus the fixed padding and bottom margin
pub fn full_preset(kind: LayoutKind) -> StyleMap {
    let mut styles = base_preset(kind);
    styles.set(StyleProperty::Padding, LAYOUT_PADDING);
    styles.set(StyleProperty::MarginBottom, LAYOUT_MARGIN_BOTTOM);
    styles
}
