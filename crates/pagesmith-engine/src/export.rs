//! Serialization of the page into standalone markup and stylesheet text.
//!
//! Export never touches session state; it only reads the page forest.

use crate::models::presets::full_preset;
use crate::models::{ElementNode, LayoutKind};

/// File name the markup is meant to be saved under
pub const MARKUP_FILE: &str = "index.html";
/// File name the markup links its stylesheet from
pub const STYLESHEET_FILE: &str = "styles.css";

const INDENT: &str = "  ";

/// The two text artifacts produced by an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPage {
    pub markup: String,
    pub stylesheet: String,
}

impl ExportedPage {
    /// HTML document showing both artifacts as escaped preformatted text
    pub fn preview_html(&self) -> String {
        format!(
            "<h2>{MARKUP_FILE}</h2><pre>{}</pre><h2>{STYLESHEET_FILE}</h2><pre>{}</pre>",
            html_escape::encode_text(&self.markup),
            html_escape::encode_text(&self.stylesheet),
        )
    }
}

/// Export the page
pub fn export_page(page: &[ElementNode]) -> ExportedPage {
    ExportedPage {
        markup: render_markup(page),
        stylesheet: render_stylesheet(),
    }
}

/// Complete HTML document wrapping the serialized page
pub fn render_markup(page: &[ElementNode]) -> String {
    let mut body = String::new();
    write_nodes(&mut body, page, INDENT);

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         {INDENT}<meta charset=\"UTF-8\">\n\
         {INDENT}<title>Exported Page</title>\n\
         {INDENT}<link rel=\"stylesheet\" href=\"{STYLESHEET_FILE}\">\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>"
    )
}

fn write_nodes(out: &mut String, nodes: &[ElementNode], indent: &str) {
    for node in nodes {
        let tag = node.element_type.tag();
        out.push_str(indent);
        out.push_str(&format!("<{tag} id=\"{}\"", node.id));
        if let Some(kind) = node.layout {
            out.push_str(&format!(" class=\"{}\"", kind.class_name()));
        }
        out.push('>');

        if node.children.is_empty() {
            out.push_str(&html_escape::encode_text(&node.text_content));
        } else {
            out.push('\n');
            write_nodes(out, &node.children, &format!("{indent}{INDENT}"));
            out.push_str(indent);
        }
        out.push_str(&format!("</{tag}>\n"));
    }
}

/// One class rule per layout kind, built from its full preset
pub fn render_stylesheet() -> String {
    let mut css = String::new();
    for kind in LayoutKind::ALL {
        css.push_str(&format!(".{} {{\n", kind.class_name()));
        for (property, value) in full_preset(kind).iter() {
            css.push_str(&format!("{INDENT}{}: {value};\n", property.css_name()));
        }
        css.push_str("}\n\n");
    }
    css
}
