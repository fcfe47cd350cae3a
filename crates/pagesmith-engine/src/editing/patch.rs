use crate::editing::InsertionTarget;
use crate::models::ElementId;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Patch {
    /// Node created by the command and where it was placed
    pub added: Option<(ElementId, InsertionTarget)>,
    /// Ids detached by the command, subtree root first
    pub removed: Vec<ElementId>,
    /// Node whose text was replaced
    pub edited: Option<ElementId>,
    /// Whether the insertion target or selection changed
    pub targeting_changed: bool,
    pub version: u64,
}

impl Patch {
    /// Whether the page tree changed
    pub fn tree_changed(&self) -> bool {
        self.added.is_some() || !self.removed.is_empty() || self.edited.is_some()
    }

    pub fn is_noop(&self) -> bool {
        !self.tree_changed() && !self.targeting_changed
    }
}
