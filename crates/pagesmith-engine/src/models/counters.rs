use std::collections::BTreeMap;

use crate::models::{ElementId, ElementType, LayoutKind};

/// Monotonic per-type and per-layout-kind counters feeding id generation.
///
/// Counts only ever grow, so an id handed out once is never handed out
/// again, even after the node carrying it has been removed.
#[derive(Debug, Default, Clone)]
pub struct IdCounters {
    elements: BTreeMap<ElementType, u32>,
    layouts: BTreeMap<LayoutKind, u32>,
}

impl IdCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next `{tag}_{n}` id for a plain element
    pub fn next_element_id(&mut self, element_type: ElementType) -> ElementId {
        let count = self.elements.entry(element_type).or_insert(0);
        *count += 1;
        ElementId::new(format!("{}_{}", element_type.tag(), count))
    }

    /// Issue the next `layout_{kind}_{n}` id for a layout container
    pub fn next_layout_id(&mut self, kind: LayoutKind) -> ElementId {
        let count = self.layouts.entry(kind).or_insert(0);
        *count += 1;
        ElementId::new(format!("layout_{}_{}", kind.name(), count))
    }

    /// Number of plain-element ids issued for `element_type`
    pub fn issued_elements(&self, element_type: ElementType) -> u32 {
        self.elements.get(&element_type).copied().unwrap_or(0)
    }

    /// Number of layout ids issued for `kind`
    pub fn issued_layouts(&self, kind: LayoutKind) -> u32 {
        self.layouts.get(&kind).copied().unwrap_or(0)
    }
}
