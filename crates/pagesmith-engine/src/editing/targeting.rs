use crate::editing::tree;
use crate::models::{ElementId, ElementNode};

/// Where the next added node goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertionTarget {
    /// Append to the root sequence
    Root,
    /// Append as last child of this existing container
    Container(ElementId),
}

impl InsertionTarget {
    /// Resolve the remembered target id against the current tree.
    ///
    /// An unset id, or one that no longer names a container, resolves to
    /// [`InsertionTarget::Root`].
    pub fn resolve(tree: &[ElementNode], current: Option<&ElementId>) -> Self {
        let Some(id) = current else {
            return InsertionTarget::Root;
        };
        match tree::find(tree, id) {
            Some(node) if node.is_container() => InsertionTarget::Container(id.clone()),
            _ => {
                log::debug!("insertion target {id} no longer resolves, using page root");
                InsertionTarget::Root
            }
        }
    }

    /// Label shown to the user for this target
    pub fn label(&self) -> &str {
        match self {
            InsertionTarget::Root => "Page",
            InsertionTarget::Container(id) => id.as_str(),
        }
    }
}
