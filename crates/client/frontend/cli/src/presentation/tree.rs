//! Terminal implementation of the `UiTree` port.
//!
//! Nodes live in a map keyed by `NodeId`, with a separate document-order
//! list for `query`. Destroying a node removes it from both, so storage
//! tracks the live tree. Ids come from a counter and are never handed out
//! twice, so stale ids held by widgets simply stop resolving.
use std::collections::HashMap;

use client_frontend_core::{ActionMenuLayout, Gesture, GestureSet, NodeId, UiTree};
use ratatui::layout::{Position, Rect};

#[derive(Clone, Debug, Default)]
pub struct TerminalNode {
    pub markers: Vec<String>,
    pub text: String,
    pub children: Vec<NodeId>,
    pub visible: bool,
    pub listeners: GestureSet,
}

impl TerminalNode {
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }
}

/// Clickable area recorded while drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitRegion {
    pub area: Rect,
    pub node: NodeId,
}

#[derive(Debug, Default)]
pub struct TerminalTree {
    nodes: HashMap<NodeId, TerminalNode>,
    /// Live ids in creation order.
    order: Vec<NodeId>,
    next_id: u32,
    hit_regions: Vec<HitRegion>,
}

impl TerminalTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the action menu document: a hidden root holding the name,
    /// list and description elements.
    pub fn with_layout(layout: &ActionMenuLayout) -> Self {
        let mut tree = Self::new();

        let root = tree.create_element();
        tree.add_marker(root, &layout.root);
        tree.set_visible(root, false);

        for marker in [&layout.name, &layout.list, &layout.description] {
            let child = tree.create_element();
            tree.add_marker(child, marker);
            tree.append_child(root, child);
        }

        tree
    }

    pub fn node(&self, id: NodeId) -> Option<&TerminalNode> {
        self.nodes.get(&id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut TerminalNode> {
        let node = self.nodes.get_mut(&id);
        if node.is_none() {
            tracing::warn!("Ignoring operation on unknown node {}", id);
        }
        node
    }

    pub fn text(&self, id: NodeId) -> &str {
        self.node(id).map(|n| n.text.as_str()).unwrap_or("")
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.visible)
    }

    pub fn listeners(&self, id: NodeId) -> GestureSet {
        self.node(id).map(|n| n.listeners).unwrap_or_default()
    }

    pub fn live_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Replaces the regions recorded by the last draw.
    pub fn set_hit_regions(&mut self, regions: Vec<HitRegion>) {
        self.hit_regions = regions;
    }

    /// Area the node occupied in the last draw.
    pub fn region_of(&self, node: NodeId) -> Option<Rect> {
        self.hit_regions
            .iter()
            .find(|region| region.node == node)
            .map(|region| region.area)
    }

    /// Topmost live node under the given cell.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<NodeId> {
        let position = Position::new(column, row);
        self.hit_regions
            .iter()
            .rev()
            .find(|region| region.area.contains(position) && self.node(region.node).is_some())
            .map(|region| region.node)
    }

    fn destroy(&mut self, id: NodeId) {
        let Some(node) = self.nodes.remove(&id) else {
            return;
        };
        for child in node.children {
            self.destroy(child);
        }
    }
}

impl UiTree for TerminalTree {
    fn query(&self, marker: &str) -> Option<NodeId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.nodes.get(id).is_some_and(|node| node.has_marker(marker)))
    }

    fn create_element(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            TerminalNode {
                visible: true,
                ..TerminalNode::default()
            },
        );
        self.order.push(id);
        id
    }

    fn add_marker(&mut self, node: NodeId, marker: &str) {
        if let Some(node) = self.node_mut(node) {
            if !node.has_marker(marker) {
                node.markers.push(marker.to_string());
            }
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(node) = self.node_mut(node) {
            node.text = text.to_string();
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(child).is_none() {
            tracing::warn!("Cannot append unknown node {} to {}", child, parent);
            return;
        }
        if let Some(parent) = self.node_mut(parent) {
            parent.children.retain(|&c| c != child);
            parent.children.push(child);
        }
    }

    fn clear_children(&mut self, parent: NodeId) {
        let Some(node) = self.node_mut(parent) else {
            return;
        };
        let children = std::mem::take(&mut node.children);
        for child in children {
            self.destroy(child);
        }
        let nodes = &self.nodes;
        self.order.retain(|id| nodes.contains_key(id));
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(node) = self.node_mut(node) {
            node.visible = visible;
        }
    }

    fn listen(&mut self, node: NodeId, gesture: Gesture) {
        if let Some(node) = self.node_mut(node) {
            node.listeners |= gesture.as_set();
        }
    }
}
