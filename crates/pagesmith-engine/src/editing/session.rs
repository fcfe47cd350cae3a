use crate::editing::{Cmd, InsertionTarget, Patch, tree};
use crate::models::{ElementId, ElementNode, ElementType, IdCounters, LayoutKind};

/// All mutable builder state for one editing session.
///
/// Holds the page forest, the id counters, the insertion target and the
/// selection. Every change goes through [`Session::apply`] or one of the
/// operations it dispatches to.
#[derive(Debug, Default)]
pub struct Session {
    page: Vec<ElementNode>,
    counters: IdCounters,
    /// Container receiving new nodes; `None` means the page root
    current: Option<ElementId>,
    /// Node most recently interacted with; the argument to removal
    selected: Option<ElementId>,
    version: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root sequence of the page
    pub fn page(&self) -> &[ElementNode] {
        &self.page
    }

    pub fn counters(&self) -> &IdCounters {
        &self.counters
    }

    pub fn find(&self, id: &ElementId) -> Option<&ElementNode> {
        tree::find(&self.page, id)
    }

    pub fn selected(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// Raw insertion target id, which may have gone stale
    pub fn current_target(&self) -> Option<&ElementId> {
        self.current.as_ref()
    }

    /// Where the next added node would go
    pub fn insertion_target(&self) -> InsertionTarget {
        InsertionTarget::resolve(&self.page, self.current.as_ref())
    }

    /// `Page` at the root, otherwise the id of the targeted container
    pub fn workspace_label(&self) -> String {
        self.insertion_target().label().to_string()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a command and report what it changed
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        log::debug!("applying {cmd:?}");

        let mut patch = Patch::default();
        match cmd {
            Cmd::AddElement(element_type) => {
                let (id, target) = self.add_element(element_type);
                patch.added = Some((id, target));
            }
            Cmd::AddLayout(kind) => {
                let (id, target) = self.add_layout(kind);
                patch.added = Some((id, target));
            }
            Cmd::Remove(id) => {
                let before = (self.current.clone(), self.selected.clone());
                patch.removed = self.remove(&id);
                patch.targeting_changed = before != (self.current.clone(), self.selected.clone());
            }
            Cmd::RemoveSelected => {
                if let Some(id) = self.selected.clone() {
                    return self.apply(Cmd::Remove(id));
                }
            }
            Cmd::SetText { id, text } => {
                if self.set_text(&id, text) {
                    patch.edited = Some(id);
                }
            }
            Cmd::Select(id) => {
                patch.targeting_changed = self.selected.as_ref() != Some(&id);
                self.selected = Some(id);
            }
            Cmd::EnterContainer(id) => {
                patch.targeting_changed = self.enter_container(id);
            }
            Cmd::ClearTarget => {
                patch.targeting_changed = self.current.take().is_some();
            }
        }

        self.version += 1;
        patch.version = self.version;
        patch
    }

    /// Create a plain element and insert it at the resolved target
    pub fn add_element(&mut self, element_type: ElementType) -> (ElementId, InsertionTarget) {
        let id = self.counters.next_element_id(element_type);
        let target = self.insert(ElementNode::element(id.clone(), element_type));
        (id, target)
    }

    /// Create a preset-styled layout container and insert it at the resolved target
    pub fn add_layout(&mut self, kind: LayoutKind) -> (ElementId, InsertionTarget) {
        let id = self.counters.next_layout_id(kind);
        let target = self.insert(ElementNode::layout(id.clone(), kind));
        (id, target)
    }

    fn insert(&mut self, node: ElementNode) -> InsertionTarget {
        let target = self.insertion_target();
        if let InsertionTarget::Container(parent_id) = &target
            && let Some(parent) = tree::find_mut(&mut self.page, parent_id)
        {
            parent.children.push(node);
        } else {
            self.page.push(node);
        }
        target
    }

    /// Remove a node with its subtree, returning the detached ids in pre-order.
    ///
    /// A target or selection that pointed into the removed subtree is cleared.
    pub fn remove(&mut self, id: &ElementId) -> Vec<ElementId> {
        let Some(removed) = tree::remove(&mut self.page, id) else {
            return Vec::new();
        };

        if self.current.as_ref().is_some_and(|c| removed.contains(c)) {
            log::debug!("insertion target removed with {id}, back to page root");
            self.current = None;
        }
        if self.selected.as_ref().is_some_and(|s| removed.contains(s)) {
            self.selected = None;
        }

        tree::preorder(std::slice::from_ref(&removed))
            .map(|(_, node)| node.id.clone())
            .collect()
    }

    /// Replace a node's text. Returns `false` when the id does not resolve.
    pub fn set_text(&mut self, id: &ElementId, text: String) -> bool {
        match tree::find_mut(&mut self.page, id) {
            Some(node) => {
                node.text_content = text;
                true
            }
            None => false,
        }
    }

    /// Target a container for new nodes.
    ///
    /// Ids that do not name an existing container are refused and leave the
    /// target untouched. Returns whether the target changed.
    pub fn enter_container(&mut self, id: ElementId) -> bool {
        match self.find(&id) {
            Some(node) if node.is_container() => {
                let changed = self.current.as_ref() != Some(&id);
                self.current = Some(id);
                changed
            }
            _ => false,
        }
    }

    pub fn clear_target(&mut self) {
        self.current = None;
    }

    pub fn select(&mut self, id: ElementId) {
        self.selected = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(nodes: &[ElementNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_add_to_root_without_target() {
        let mut session = Session::new();

        session.add_element(ElementType::Paragraph);
        session.add_element(ElementType::Paragraph);
        session.add_layout(LayoutKind::Row);

        assert_eq!(ids(session.page()), vec!["p_1", "p_2", "layout_row_1"]);
        assert_eq!(session.page()[0].text_content, "p");
    }

    #[test]
    fn test_add_into_entered_container() {
        let mut session = Session::new();
        let (row, _) = session.add_layout(LayoutKind::Row);
        assert!(session.enter_container(row.clone()));

        let (_, target) = session.add_element(ElementType::Button);
        session.add_element(ElementType::Span);

        assert_eq!(target, InsertionTarget::Container(row.clone()));
        assert_eq!(ids(&session.find(&row).unwrap().children), vec!["button_1", "span_1"]);
        assert_eq!(session.workspace_label(), "layout_row_1");
    }

    #[test]
    fn test_enter_container_refuses_leaf_and_missing() {
        let mut session = Session::new();
        let (p, _) = session.add_element(ElementType::Paragraph);

        assert!(!session.enter_container(p));
        assert!(!session.enter_container(ElementId::new("div_3")));
        assert_eq!(session.current_target(), None);
    }

    #[test]
    fn test_plain_div_accepts_children() {
        let mut session = Session::new();
        let (div, _) = session.add_element(ElementType::Div);
        session.enter_container(div.clone());
        session.add_element(ElementType::Heading2);

        assert_eq!(ids(&session.find(&div).unwrap().children), vec!["h2_1"]);
    }

    #[test]
    fn test_remove_clears_target_inside_subtree() {
        let mut session = Session::new();
        let (outer, _) = session.add_layout(LayoutKind::Column);
        session.enter_container(outer.clone());
        let (inner, _) = session.add_layout(LayoutKind::Center);
        session.enter_container(inner.clone());
        session.select(inner.clone());

        let removed = session.remove(&outer);

        assert_eq!(removed, vec![outer, inner]);
        assert_eq!(session.current_target(), None);
        assert_eq!(session.selected(), None);
        assert_eq!(session.insertion_target(), InsertionTarget::Root);
    }

    #[test]
    fn test_remove_keeps_unrelated_target() {
        let mut session = Session::new();
        let (row, _) = session.add_layout(LayoutKind::Row);
        let (p, _) = session.add_element(ElementType::Paragraph);
        session.enter_container(row.clone());

        session.remove(&p);

        assert_eq!(session.current_target(), Some(&row));
    }

    #[test]
    fn test_remove_selected_without_selection_is_noop() {
        let mut session = Session::new();
        session.add_element(ElementType::Paragraph);

        let patch = session.apply(Cmd::RemoveSelected);

        assert!(patch.is_noop());
        assert_eq!(session.page().len(), 1);
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut session = Session::new();

        let patch = session.apply(Cmd::AddElement(ElementType::Heading1));
        assert_eq!(
            patch.added,
            Some((ElementId::new("h1_1"), InsertionTarget::Root))
        );
        assert_eq!(patch.version, 1);

        let patch = session.apply(Cmd::Select(ElementId::new("h1_1")));
        assert!(patch.targeting_changed);
        assert!(!patch.tree_changed());

        let patch = session.apply(Cmd::SetText {
            id: ElementId::new("h1_1"),
            text: "Welcome".to_string(),
        });
        assert_eq!(patch.edited, Some(ElementId::new("h1_1")));

        let patch = session.apply(Cmd::RemoveSelected);
        assert_eq!(patch.removed, vec![ElementId::new("h1_1")]);
        assert!(patch.targeting_changed);
        assert_eq!(session.version(), 4);
    }

    #[test]
    fn test_set_text_on_missing_id() {
        let mut session = Session::new();
        let patch = session.apply(Cmd::SetText {
            id: ElementId::new("p_1"),
            text: "lost".to_string(),
        });
        assert!(patch.is_noop());
    }

    #[test]
    fn test_clear_target_returns_to_root() {
        let mut session = Session::new();
        let (div, _) = session.add_element(ElementType::Div);
        session.apply(Cmd::EnterContainer(div));

        let patch = session.apply(Cmd::ClearTarget);
        assert!(patch.targeting_changed);
        assert_eq!(session.workspace_label(), "Page");

        let patch = session.apply(Cmd::ClearTarget);
        assert!(!patch.targeting_changed);
    }
}
