use crate::models::{ElementId, ElementType, LayoutKind};

/// Every way the session state can change
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Add a plain element at the resolved insertion target
    AddElement(ElementType),
    /// Add a layout container at the resolved insertion target
    AddLayout(LayoutKind),
    /// Remove a node and its subtree
    Remove(ElementId),
    /// Remove whatever is selected; no-op without a selection
    RemoveSelected,
    /// Replace a node's text, keeping its identity and position
    SetText { id: ElementId, text: String },
    /// Remember `id` as the node most recently interacted with
    Select(ElementId),
    /// Direct new nodes into this container
    EnterContainer(ElementId),
    /// Direct new nodes back to the page root
    ClearTarget,
}
