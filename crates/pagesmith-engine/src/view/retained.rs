use std::collections::HashMap;

use crate::export::ExportedPage;
use crate::models::{ElementId, StyleMap, StyleProperty};
use crate::view::{ClickAction, IndexEntry, IndexPanel, Surface, Viewer};

/// Index of an element inside a [`RetainedSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewHandle(usize);

/// A displayable element as held by the retained surface
#[derive(Debug, Clone, PartialEq)]
pub struct ViewElement {
    pub tag: &'static str,
    pub id: Option<ElementId>,
    pub text: String,
    pub styles: StyleMap,
    pub children: Vec<ViewHandle>,
    pub action: Option<ClickAction>,
    pub editable: bool,
}

/// In-memory host that keeps the rendered presentation as an arena.
///
/// Terminal front ends draw from it; tests inspect it.
#[derive(Debug, Default)]
pub struct RetainedSurface {
    elements: Vec<ViewElement>,
    roots: Vec<ViewHandle>,
    by_id: HashMap<ElementId, ViewHandle>,
    focused: Option<ViewHandle>,
    workspace: String,
    index: Vec<IndexEntry>,
    export: Option<ExportedPage>,
}

impl RetainedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[ViewHandle] {
        &self.roots
    }

    pub fn element(&self, handle: ViewHandle) -> &ViewElement {
        &self.elements[handle.0]
    }

    pub fn focused(&self) -> Option<ViewHandle> {
        self.focused
    }

    /// Text of the focused element while it is being edited
    pub fn editing_text_mut(&mut self) -> Option<&mut String> {
        let handle = self.focused?;
        let element = &mut self.elements[handle.0];
        element.editable.then_some(&mut element.text)
    }

    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    pub fn index(&self) -> &[IndexEntry] {
        &self.index
    }

    /// Most recently opened export
    pub fn export(&self) -> Option<&ExportedPage> {
        self.export.as_ref()
    }

    /// Close the export viewer
    pub fn close_export(&mut self) -> Option<ExportedPage> {
        self.export.take()
    }

    /// Elements in pre-order with their depth
    pub fn walk(&self) -> Vec<(usize, ViewHandle)> {
        let mut out = Vec::with_capacity(self.elements.len());
        let mut stack: Vec<_> = self.roots.iter().rev().map(|h| (0, *h)).collect();
        while let Some((depth, handle)) = stack.pop() {
            out.push((depth, handle));
            stack.extend(
                self.element(handle)
                    .children
                    .iter()
                    .rev()
                    .map(|child| (depth + 1, *child)),
            );
        }
        out
    }

    /// Indented one-line-per-element dump of the presentation
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for (depth, handle) in self.walk() {
            let element = self.element(handle);
            out.push_str(&"  ".repeat(depth));
            out.push('<');
            out.push_str(element.tag);
            if let Some(id) = &element.id {
                out.push('#');
                out.push_str(id.as_str());
            }
            out.push('>');
            if !element.text.is_empty() {
                out.push_str(&format!(" {:?}", element.text));
            }
            if element.editable {
                out.push_str(" (editing)");
            }
            out.push('\n');
        }
        out
    }
}

impl Surface for RetainedSurface {
    type Handle = ViewHandle;

    fn clear(&mut self) {
        self.elements.clear();
        self.roots.clear();
        self.by_id.clear();
        self.focused = None;
    }

    fn create_element(&mut self, tag: &'static str) -> ViewHandle {
        self.elements.push(ViewElement {
            tag,
            id: None,
            text: String::new(),
            styles: StyleMap::new(),
            children: Vec::new(),
            action: None,
            editable: false,
        });
        ViewHandle(self.elements.len() - 1)
    }

    fn set_id(&mut self, element: ViewHandle, id: &ElementId) {
        if let Some(old) = self.elements[element.0].id.replace(id.clone()) {
            self.by_id.remove(&old);
        }
        self.by_id.insert(id.clone(), element);
    }

    fn set_text(&mut self, element: ViewHandle, text: &str) {
        self.elements[element.0].text = text.to_string();
    }

    fn set_style(&mut self, element: ViewHandle, property: StyleProperty, value: &str) {
        self.elements[element.0].styles.set(property, value);
    }

    fn append_child(&mut self, parent: ViewHandle, child: ViewHandle) {
        self.elements[parent.0].children.push(child);
    }

    fn mount(&mut self, element: ViewHandle) {
        self.roots.push(element);
    }

    fn wire(&mut self, element: ViewHandle, action: ClickAction) {
        self.elements[element.0].action = Some(action);
    }

    fn lookup(&self, id: &ElementId) -> Option<ViewHandle> {
        self.by_id.get(id).copied()
    }

    fn click_action(&self, element: ViewHandle) -> Option<ClickAction> {
        self.elements[element.0].action
    }

    fn set_editable(&mut self, element: ViewHandle, editable: bool) {
        self.elements[element.0].editable = editable;
        if !editable && self.focused == Some(element) {
            self.focused = None;
        }
    }

    fn focus(&mut self, element: ViewHandle) {
        self.focused = Some(element);
    }

    fn text(&self, element: ViewHandle) -> String {
        self.elements[element.0].text.clone()
    }

    fn show_workspace(&mut self, label: &str) {
        self.workspace = label.to_string();
    }
}

impl IndexPanel for RetainedSurface {
    fn clear_index(&mut self) {
        self.index.clear();
    }

    fn push_entry(&mut self, entry: IndexEntry) {
        self.index.push(entry);
    }
}

impl Viewer for RetainedSurface {
    fn open_export(&mut self, page: &ExportedPage) {
        self.export = Some(page.clone());
    }
}
