use crate::models::presets::LAYOUT_BORDER;
use crate::models::{ElementNode, StyleProperty};
use crate::view::{ClickAction, Surface};

/// Throw away the whole presentation and rebuild it from `page`.
///
/// Rebuilding is never incremental; the result depends only on the model.
pub fn rebuild<S: Surface + ?Sized>(page: &[ElementNode], surface: &mut S) {
    surface.clear();
    for node in page {
        let element = render_node(node, surface);
        surface.mount(element);
    }
}

fn render_node<S: Surface + ?Sized>(node: &ElementNode, surface: &mut S) -> S::Handle {
    let element = surface.create_element(node.element_type.tag());
    surface.set_id(element, &node.id);
    surface.set_text(element, &node.text_content);
    surface.wire(element, ClickAction::for_type(node.element_type));

    for child in &node.children {
        let rendered = render_node(child, surface);
        surface.append_child(element, rendered);
    }

    for (property, value) in node.styles.iter() {
        surface.set_style(element, property, value);
    }
    // Applied last so no preset can override it
    if node.is_layout() {
        surface.set_style(element, StyleProperty::Border, LAYOUT_BORDER);
    }

    element
}
