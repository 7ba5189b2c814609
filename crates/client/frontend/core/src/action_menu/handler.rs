//! Gesture handler registrations owned by the action menu.

use std::collections::HashMap;

use super::ActionDescriptor;
use crate::ui::{Gesture, NodeId};

/// Explicit handler table: at most one handler per node and gesture.
#[derive(Clone, Debug, Default)]
pub struct HandlerTable {
    handlers: HashMap<(NodeId, Gesture), ActionDescriptor>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` for `gesture` on `node`.
    ///
    /// Returns `false` and keeps the existing handler when the node already
    /// handles that gesture.
    pub fn register(&mut self, node: NodeId, gesture: Gesture, action: ActionDescriptor) -> bool {
        match self.handlers.entry((node, gesture)) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(action);
                true
            }
        }
    }

    pub fn find(&self, node: NodeId, gesture: Gesture) -> Option<&ActionDescriptor> {
        self.handlers.get(&(node, gesture))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}
