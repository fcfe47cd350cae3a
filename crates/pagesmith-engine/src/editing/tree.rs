//! Lookup, removal and traversal over the page forest.
//!
//! Every walk is depth-first: a node is visited before its children, and
//! children are visited in order before moving on to the next sibling.

use crate::models::{ElementId, ElementNode};

/// First node whose id matches, or `None`
pub fn find<'a>(tree: &'a [ElementNode], id: &ElementId) -> Option<&'a ElementNode> {
    for node in tree {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable twin of [`find`]
pub fn find_mut<'a>(tree: &'a mut [ElementNode], id: &ElementId) -> Option<&'a mut ElementNode> {
    for node in tree.iter_mut() {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Detach the first node whose id matches from the sequence holding it.
///
/// The node leaves together with its whole subtree. Returns the detached
/// subtree, or `None` when nothing matched.
pub fn remove(tree: &mut Vec<ElementNode>, id: &ElementId) -> Option<ElementNode> {
    for i in 0..tree.len() {
        if tree[i].id == *id {
            return Some(tree.remove(i));
        }
        if let Some(removed) = remove(&mut tree[i].children, id) {
            return Some(removed);
        }
    }
    None
}

/// Pre-order walk yielding `(depth, node)`, roots at depth 0
pub fn preorder(tree: &[ElementNode]) -> Preorder<'_> {
    Preorder {
        stack: tree.iter().rev().map(|node| (0, node)).collect(),
    }
}

pub struct Preorder<'a> {
    stack: Vec<(usize, &'a ElementNode)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (usize, &'a ElementNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
