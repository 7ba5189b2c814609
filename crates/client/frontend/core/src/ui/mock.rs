//! In-memory UI tree for testing widgets without a frontend.

use std::collections::HashMap;

use crate::config::ActionMenuLayout;
use crate::ui::{Gesture, GestureSet, NodeId, UiTree};

#[derive(Clone, Debug, Default)]
pub struct MockNode {
    pub markers: Vec<String>,
    pub text: String,
    pub children: Vec<NodeId>,
    pub visible: bool,
    pub listeners: GestureSet,
    /// Number of `listen` calls, including repeated ones.
    pub listen_calls: usize,
}

/// Mock UI tree keeping every node in a map.
#[derive(Debug, Default)]
pub struct MockUiTree {
    nodes: HashMap<NodeId, MockNode>,
    /// Insertion order, so `query` behaves like a document-order search.
    order: Vec<NodeId>,
    next_id: u32,
}

impl MockUiTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the document an action menu expects.
    pub fn with_layout(layout: &ActionMenuLayout) -> Self {
        let mut tree = Self::new();
        let root = tree.element_with_marker(&layout.root);
        for marker in [&layout.name, &layout.list, &layout.description] {
            let child = tree.element_with_marker(marker);
            tree.append_child(root, child);
        }
        tree
    }

    /// Same as [`MockUiTree::with_layout`] but leaves out one marker.
    pub fn with_layout_without(layout: &ActionMenuLayout, skip: &str) -> Self {
        let mut tree = Self::new();
        for marker in [&layout.root, &layout.name, &layout.list, &layout.description] {
            if marker != skip {
                tree.element_with_marker(marker);
            }
        }
        tree
    }

    fn element_with_marker(&mut self, marker: &str) -> NodeId {
        let node = self.create_element();
        self.add_marker(node, marker);
        node
    }

    pub fn node(&self, id: NodeId) -> Option<&MockNode> {
        self.nodes.get(&id)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn text(&self, id: NodeId) -> &str {
        self.nodes
            .get(&id)
            .map(|node| node.text.as_str())
            .unwrap_or("")
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|node| node.visible)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn live_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn destroy(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            for child in node.children {
                self.destroy(child);
            }
        }
        self.order.retain(|&live| live != id);
    }
}

impl UiTree for MockUiTree {
    fn query(&self, marker: &str) -> Option<NodeId> {
        self.order.iter().copied().find(|id| {
            self.nodes
                .get(id)
                .is_some_and(|node| node.markers.iter().any(|m| m == marker))
        })
    }

    fn create_element(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, MockNode::default());
        self.order.push(id);
        id
    }

    fn add_marker(&mut self, node: NodeId, marker: &str) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.markers.push(marker.to_string());
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.text = text.to_string();
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.nodes.contains_key(&child) {
            return;
        }
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.retain(|&c| c != child);
            parent.children.push(child);
        }
    }

    fn clear_children(&mut self, parent: NodeId) {
        let children = match self.nodes.get_mut(&parent) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            self.destroy(child);
        }
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.visible = visible;
        }
    }

    fn listen(&mut self, node: NodeId, gesture: Gesture) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.listeners |= gesture.as_set();
            node.listen_calls += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_children_destroys_descendants() {
        let mut tree = MockUiTree::new();
        let root = tree.create_element();
        let child = tree.create_element();
        let grandchild = tree.create_element();
        tree.add_marker(grandchild, "deep");
        tree.append_child(root, child);
        tree.append_child(child, grandchild);

        tree.clear_children(root);

        assert!(tree.children(root).is_empty());
        assert!(!tree.contains(child));
        assert!(tree.query("deep").is_none());
    }

    #[test]
    fn query_returns_first_in_document_order() {
        let mut tree = MockUiTree::new();
        let first = tree.create_element();
        let second = tree.create_element();
        tree.add_marker(second, "item");
        tree.add_marker(first, "item");

        assert_eq!(tree.query("item"), Some(first));
    }
}
