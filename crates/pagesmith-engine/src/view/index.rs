use crate::editing::tree;
use crate::models::{ElementId, ElementNode};
use crate::view::IndexPanel;

/// One row of the index panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub id: ElementId,
    /// Nesting depth, 0 for root-level nodes
    pub depth: usize,
}

/// Index rows in document order (each node before its children)
pub fn entries(page: &[ElementNode]) -> Vec<IndexEntry> {
    tree::preorder(page)
        .map(|(depth, node)| IndexEntry {
            id: node.id.clone(),
            depth,
        })
        .collect()
}

/// Replace the panel's listing with the current page
pub fn rebuild<P: IndexPanel + ?Sized>(page: &[ElementNode], panel: &mut P) {
    panel.clear_index();
    for entry in entries(page) {
        panel.push_entry(entry);
    }
}
