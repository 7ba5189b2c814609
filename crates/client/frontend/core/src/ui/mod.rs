//! Rendering port between widgets and a concrete node tree.
//!
//! Widgets never hold closures inside the tree. They arm nodes for a gesture
//! with [`UiTree::listen`] and the host routes the resulting
//! [`GestureEvent`] back to the widget that owns the node.

#[cfg(test)]
pub mod mock;

use bitflags::bitflags;

/// Opaque handle to a node owned by a [`UiTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Input activation that can be bound to an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Gesture {
    /// Left click / activate.
    Primary,
    /// Right click / alternate activate.
    Secondary,
}

impl Gesture {
    pub const fn from_secondary(secondary: bool) -> Self {
        if secondary {
            Gesture::Secondary
        } else {
            Gesture::Primary
        }
    }

    pub const fn as_set(self) -> GestureSet {
        match self {
            Gesture::Primary => GestureSet::PRIMARY,
            Gesture::Secondary => GestureSet::SECONDARY,
        }
    }
}

bitflags! {
    /// Gestures a node has been armed for.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct GestureSet: u8 {
        const PRIMARY = 1 << 0;
        const SECONDARY = 1 << 1;
    }
}

/// A gesture performed on a node, routed to the owning widget.
///
/// Hosts inspect [`GestureEvent::is_default_prevented`] after dispatch to
/// decide whether the platform default (e.g. a context menu) still runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureEvent {
    node: NodeId,
    gesture: Gesture,
    default_prevented: bool,
}

impl GestureEvent {
    pub const fn new(node: NodeId, gesture: Gesture) -> Self {
        Self {
            node,
            gesture,
            default_prevented: false,
        }
    }

    pub const fn node(&self) -> NodeId {
        self.node
    }

    pub const fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Node tree capability consumed by widgets.
///
/// Operations on unknown or destroyed nodes are ignored by implementations.
pub trait UiTree {
    /// Finds the first live node carrying `marker`.
    fn query(&self, marker: &str) -> Option<NodeId>;

    /// Creates a detached element.
    fn create_element(&mut self) -> NodeId;

    fn add_marker(&mut self, node: NodeId, marker: &str);

    fn set_text(&mut self, node: NodeId, text: &str);

    /// Appends `child` as the last child of `parent`.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Destroys every descendant of `parent`. Destroyed nodes stop receiving events.
    fn clear_children(&mut self, parent: NodeId);

    fn set_visible(&mut self, node: NodeId, visible: bool);

    /// Arms `node` for `gesture`. Arming twice is a no-op.
    fn listen(&mut self, node: NodeId, gesture: Gesture);
}
