use std::fmt;
use std::str::FromStr;

use crate::models::StyleMap;

/// Tag kinds a node can be rendered and exported as
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementType {
    Paragraph, // <p>
    Heading1,  // <h1>
    Heading2,  // <h2>
    Div,       // <div>, also used by every layout container
    Span,      // <span>
    Button,    // <button>
}

impl ElementType {
    pub const ALL: [ElementType; 6] = [
        ElementType::Paragraph,
        ElementType::Heading1,
        ElementType::Heading2,
        ElementType::Div,
        ElementType::Span,
        ElementType::Button,
    ];

    /// Tag name, also used as the id prefix and the default text
    pub fn tag(self) -> &'static str {
        match self {
            ElementType::Paragraph => "p",
            ElementType::Heading1 => "h1",
            ElementType::Heading2 => "h2",
            ElementType::Div => "div",
            ElementType::Span => "span",
            ElementType::Button => "button",
        }
    }

    /// Whether clicking a node of this type targets it for insertion
    /// instead of editing its text
    pub fn is_container(self) -> bool {
        matches!(self, ElementType::Div)
    }

    /// Text a freshly added node starts with
    pub fn default_text(self) -> &'static str {
        if self.is_container() { "" } else { self.tag() }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown element type: {0}")]
pub struct ParseElementTypeError(pub String);

impl FromStr for ElementType {
    type Err = ParseElementTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .into_iter()
            .find(|ty| ty.tag() == s)
            .ok_or_else(|| ParseElementTypeError(s.to_string()))
    }
}

/// Flex arrangement of a layout container
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayoutKind {
    Row,
    Column,
    Center,
}

impl LayoutKind {
    /// Stylesheet emission order
    pub const ALL: [LayoutKind; 3] = [LayoutKind::Row, LayoutKind::Column, LayoutKind::Center];

    pub fn name(self) -> &'static str {
        match self {
            LayoutKind::Row => "row",
            LayoutKind::Column => "column",
            LayoutKind::Center => "center",
        }
    }

    /// Class carried by exported layout nodes, e.g. `layout-row`
    pub fn class_name(self) -> String {
        format!("layout-{}", self.name())
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown layout kind: {0}")]
pub struct ParseLayoutKindError(pub String);

impl FromStr for LayoutKind {
    type Err = ParseLayoutKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseLayoutKindError(s.to_string()))
    }
}

/// Identifier of a node, unique across the whole page for the session
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for ElementId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ElementId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single entry of the page tree: either a plain element or a layout container
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub id: ElementId,
    pub element_type: ElementType,
    /// Set only on layout containers
    pub layout: Option<LayoutKind>,
    pub text_content: String,
    pub styles: StyleMap,
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    /// Plain element with the type's default text and no styles
    pub fn element(id: ElementId, element_type: ElementType) -> Self {
        Self {
            id,
            element_type,
            layout: None,
            text_content: element_type.default_text().to_string(),
            styles: StyleMap::new(),
            children: Vec::new(),
        }
    }

    /// Layout container carrying the full preset for `kind`
    pub fn layout(id: ElementId, kind: LayoutKind) -> Self {
        Self {
            id,
            element_type: ElementType::Div,
            layout: Some(kind),
            text_content: String::new(),
            styles: crate::models::presets::full_preset(kind),
            children: Vec::new(),
        }
    }

    pub fn is_container(&self) -> bool {
        self.element_type.is_container()
    }

    pub fn is_layout(&self) -> bool {
        self.layout.is_some()
    }

    /// Whether `id` names this node or any of its descendants
    pub fn contains(&self, id: &ElementId) -> bool {
        self.id == *id || self.children.iter().any(|child| child.contains(id))
    }
}
