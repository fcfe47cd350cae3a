//! Contract between the engine and whatever displays the page.

use crate::export::ExportedPage;
use crate::models::{ElementId, ElementType, StyleProperty};
use crate::view::IndexEntry;

/// What clicking a rendered element does, decided when it is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Make the element the insertion target
    EnterContainer,
    /// Start editing the element's text in place
    EditText,
}

impl ClickAction {
    pub fn for_type(element_type: ElementType) -> Self {
        if element_type.is_container() {
            ClickAction::EnterContainer
        } else {
            ClickAction::EditText
        }
    }
}

/// Live presentation of the page.
///
/// Handles are only valid until the next [`Surface::clear`]; callers keep
/// element ids across rebuilds and look handles up again.
pub trait Surface {
    type Handle: Copy + Eq + std::fmt::Debug;

    /// Discard every element
    fn clear(&mut self);
    fn create_element(&mut self, tag: &'static str) -> Self::Handle;
    fn set_id(&mut self, element: Self::Handle, id: &ElementId);
    fn set_text(&mut self, element: Self::Handle, text: &str);
    fn set_style(&mut self, element: Self::Handle, property: StyleProperty, value: &str);
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle);
    /// Attach a top-level element to the surface root
    fn mount(&mut self, element: Self::Handle);
    /// Route clicks on this element to `action`
    fn wire(&mut self, element: Self::Handle, action: ClickAction);

    fn lookup(&self, id: &ElementId) -> Option<Self::Handle>;
    fn click_action(&self, element: Self::Handle) -> Option<ClickAction>;
    fn set_editable(&mut self, element: Self::Handle, editable: bool);
    fn focus(&mut self, element: Self::Handle);
    /// Current displayed text, including in-place edits
    fn text(&self, element: Self::Handle) -> String;

    /// Show which container receives new elements
    fn show_workspace(&mut self, label: &str);
}

/// Flat clickable listing of every id on the page
pub trait IndexPanel {
    fn clear_index(&mut self);
    fn push_entry(&mut self, entry: IndexEntry);
}

/// Secondary surface the export is opened in
pub trait Viewer {
    fn open_export(&mut self, page: &ExportedPage);
}

/// Everything the controller needs from its host
pub trait Host: Surface + IndexPanel + Viewer {}

impl<T: Surface + IndexPanel + Viewer + ?Sized> Host for T {}
