//! Contextual action menu for an inspected item or entity.
//!
//! The menu owns three pieces of state:
//! - the content model (offered actions, in input order, one per kind),
//! - the visual nodes created for those actions plus their gesture handlers,
//! - the selection channel that reports the chosen action to the caller.
//!
//! Every [`ActionMenu::open`] throws the previous content away and renders
//! from scratch, so handlers never accumulate across opens.

mod description;
mod descriptor;
mod handler;
mod selection;

use std::collections::HashMap;

use game_core::MenuAction;

pub use description::compose_description;
pub use descriptor::{ActionDescriptor, SubjectInfo};
pub use handler::HandlerTable;
pub use selection::SelectionChannel;

use crate::config::ActionMenuLayout;
use crate::error::{ElementRole, MenuError};
use crate::ui::{GestureEvent, NodeId, UiTree};
use crate::widget::{Lifecycle, Panel, Visibility};

/// Marker shared by every action node.
pub const ACTION_BUTTON_MARKER: &str = "action-button";

/// Marker identifying the node of a specific action kind.
pub fn action_marker(kind: MenuAction) -> String {
    format!("action-{}", kind.as_ref())
}

/// Outcome of routing a gesture through the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// No handler for this node and gesture; the platform default still applies.
    Unhandled,
    /// Handled, but no subscriber was registered.
    Dropped(ActionDescriptor),
    /// Delivered to the subscriber.
    Delivered(ActionDescriptor),
}

/// Action list plus info panel, reporting selections through a callback.
#[derive(Debug)]
pub struct ActionMenu {
    panel: Panel,
    list: NodeId,
    name: NodeId,
    description: NodeId,
    entries: Vec<ActionDescriptor>,
    nodes: HashMap<MenuAction, NodeId>,
    handlers: HandlerTable,
    selection: SelectionChannel,
}

impl ActionMenu {
    /// Resolves the menu elements in `tree`.
    ///
    /// # Errors
    ///
    /// Fails with [`MenuError::MissingElement`] if the root, list, name or
    /// description element is absent, and with [`MenuError::SharedElement`]
    /// if two of them resolve to the same node.
    pub fn new<T: UiTree + ?Sized>(tree: &T, layout: &ActionMenuLayout) -> Result<Self, MenuError> {
        let panel = Panel::attach(tree, &layout.root)?;
        let find = |role: ElementRole, marker: &str| {
            tree.query(marker)
                .ok_or_else(|| MenuError::missing(role, marker))
        };

        let list = find(ElementRole::List, layout.list.as_str())?;
        let name = find(ElementRole::Name, layout.name.as_str())?;
        let description = find(ElementRole::Description, layout.description.as_str())?;

        // Clearing the list must never take the other elements with it.
        let resolved = [
            (ElementRole::Root, panel.root(), layout.root.as_str()),
            (ElementRole::List, list, layout.list.as_str()),
            (ElementRole::Name, name, layout.name.as_str()),
            (ElementRole::Description, description, layout.description.as_str()),
        ];
        for (index, &(role, node, marker)) in resolved.iter().enumerate() {
            if let Some(&(other, _, _)) = resolved[..index].iter().find(|(_, n, _)| *n == node) {
                return Err(MenuError::SharedElement {
                    role,
                    other,
                    marker: marker.to_string(),
                });
            }
        }

        Ok(Self {
            panel,
            list,
            name,
            description,
            entries: Vec::new(),
            nodes: HashMap::new(),
            handlers: HandlerTable::new(),
            selection: SelectionChannel::new(),
        })
    }

    /// Replaces the offered actions, renders `subject` into the info panel and
    /// shows the menu.
    pub fn open<T: UiTree + ?Sized>(
        &mut self,
        tree: &mut T,
        actions: &[ActionDescriptor],
        subject: &SubjectInfo,
    ) {
        self.clear(tree);

        for &action in actions {
            self.add(tree, action);
        }

        tree.set_text(self.name, &subject.display_name);
        tree.set_text(self.description, &compose_description(subject));

        tracing::debug!(
            subject = %subject.display_name,
            actions = self.entries.len(),
            "Opening action menu"
        );

        self.panel.show(tree);
    }

    /// Adds a single action, reusing the node of an already present kind.
    ///
    /// The node is armed for the action's gesture. A node that already handles
    /// that gesture keeps its first handler.
    pub fn add<T: UiTree + ?Sized>(&mut self, tree: &mut T, action: ActionDescriptor) {
        let node = match self.nodes.get(&action.kind) {
            Some(&node) => node,
            None => {
                let node = tree.create_element();
                tree.add_marker(node, ACTION_BUTTON_MARKER);
                tree.add_marker(node, &action_marker(action.kind));
                tree.set_text(node, action.kind.label());
                tree.append_child(self.list, node);

                self.nodes.insert(action.kind, node);
                self.entries.push(action);
                node
            }
        };

        let gesture = action.gesture();
        if self.handlers.register(node, gesture, action) {
            tree.listen(node, gesture);
        } else {
            tracing::trace!(kind = %action.kind, %gesture, "Handler already registered");
        }
    }

    /// Replaces the selection subscriber.
    pub fn on_select<F>(&mut self, callback: F)
    where
        F: FnMut(ActionDescriptor) + Send + 'static,
    {
        self.selection.subscribe(callback);
    }

    /// Removes the selection subscriber; later gestures are dropped.
    pub fn disconnect(&mut self) {
        self.selection.unsubscribe();
    }

    pub fn has_subscriber(&self) -> bool {
        self.selection.is_connected()
    }

    /// Routes a gesture performed on one of the menu's nodes.
    ///
    /// A handled gesture always has its default behaviour prevented, even when
    /// no subscriber is registered.
    pub fn dispatch(&mut self, event: &mut GestureEvent) -> Dispatch {
        let Some(&action) = self.handlers.find(event.node(), event.gesture()) else {
            return Dispatch::Unhandled;
        };

        event.prevent_default();

        if self.selection.deliver(action) {
            tracing::trace!(kind = %action.kind, gesture = %event.gesture(), "Selection delivered");
            Dispatch::Delivered(action)
        } else {
            tracing::trace!(kind = %action.kind, "Selection dropped, no subscriber");
            Dispatch::Dropped(action)
        }
    }

    /// Hides the menu, keeping its content.
    pub fn hide<T: UiTree + ?Sized>(&mut self, tree: &mut T) {
        self.panel.hide(tree);
    }

    /// Shows the menu with whatever was rendered last.
    pub fn show<T: UiTree + ?Sized>(&mut self, tree: &mut T) {
        self.panel.show(tree);
    }

    pub fn visibility(&self) -> Visibility {
        self.panel.visibility()
    }

    pub fn is_visible(&self) -> bool {
        self.panel.is_visible()
    }

    /// Offered actions in display order.
    pub fn entries(&self) -> &[ActionDescriptor] {
        &self.entries
    }

    pub fn node_for(&self, kind: MenuAction) -> Option<NodeId> {
        self.nodes.get(&kind).copied()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub const fn root(&self) -> NodeId {
        self.panel.root()
    }

    pub const fn list(&self) -> NodeId {
        self.list
    }

    fn clear<T: UiTree + ?Sized>(&mut self, tree: &mut T) {
        tree.clear_children(self.list);
        self.entries.clear();
        self.nodes.clear();
        self.handlers.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use game_core::{Bonuses, Stats};

    use super::*;
    use crate::ui::Gesture;
    use crate::ui::mock::MockUiTree;

    fn setup() -> (MockUiTree, ActionMenu) {
        let layout = ActionMenuLayout::default();
        let tree = MockUiTree::with_layout(&layout);
        let menu = ActionMenu::new(&tree, &layout).unwrap();
        (tree, menu)
    }

    fn recorder(menu: &mut ActionMenu) -> Arc<Mutex<Vec<ActionDescriptor>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        menu.on_select(move |action| sink.lock().unwrap().push(action));
        seen
    }

    fn iron_sword() -> SubjectInfo {
        SubjectInfo::new("Iron Sword")
            .with_attack(Stats::new(1, 5, 3, 0))
            .with_defense(Stats::default())
            .with_bonuses(Bonuses::new(2, 1, 0, 0))
    }

    fn gesture(menu: &mut ActionMenu, kind: MenuAction, gesture: Gesture) -> Dispatch {
        let node = menu.node_for(kind).unwrap();
        menu.dispatch(&mut GestureEvent::new(node, gesture))
    }

    #[test]
    fn construction_fails_for_each_missing_element() {
        let layout = ActionMenuLayout::default();
        let cases = [
            (layout.root.clone(), ElementRole::Root),
            (layout.list.clone(), ElementRole::List),
            (layout.name.clone(), ElementRole::Name),
            (layout.description.clone(), ElementRole::Description),
        ];

        for (marker, expected) in cases {
            let tree = MockUiTree::with_layout_without(&layout, &marker);
            match ActionMenu::new(&tree, &layout) {
                Err(MenuError::MissingElement { role, marker: m }) => {
                    assert_eq!(role, expected);
                    assert_eq!(m, marker);
                }
                Ok(_) => panic!("menu built without `{marker}`"),
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn construction_rejects_markers_sharing_a_node() {
        let layout = ActionMenuLayout::default();
        let tree = MockUiTree::with_layout(&layout);
        let aliased = ActionMenuLayout {
            list: layout.root.clone(),
            ..layout.clone()
        };

        match ActionMenu::new(&tree, &aliased) {
            Err(MenuError::SharedElement { role, other, marker }) => {
                assert_eq!(role, ElementRole::List);
                assert_eq!(other, ElementRole::Root);
                assert_eq!(marker, layout.root);
            }
            other => panic!("expected SharedElement, got {other:?}"),
        }
    }

    #[test]
    fn repeated_opens_keep_tree_bounded() {
        let (mut tree, mut menu) = setup();
        let actions = [
            ActionDescriptor::primary(MenuAction::Equip),
            ActionDescriptor::secondary(MenuAction::Drop),
        ];
        menu.open(&mut tree, &actions, &iron_sword());
        let live = tree.live_nodes();

        for _ in 0..100 {
            menu.open(&mut tree, &actions, &iron_sword());
        }

        assert_eq!(live, 6);
        assert_eq!(tree.live_nodes(), live);
    }

    #[test]
    fn open_renders_nodes_in_input_order() {
        let (mut tree, mut menu) = setup();
        let actions = [
            ActionDescriptor::primary(MenuAction::Examine),
            ActionDescriptor::primary(MenuAction::Equip),
            ActionDescriptor::secondary(MenuAction::Drop),
        ];

        menu.open(&mut tree, &actions, &iron_sword());

        let children = tree.children(menu.list());
        assert_eq!(children.len(), 3);
        assert_eq!(tree.text(children[0]), "Examine");
        assert_eq!(tree.text(children[1]), "Equip");
        assert_eq!(tree.text(children[2]), "Drop");
        assert_eq!(menu.entries(), &actions);

        let drop = tree.node(children[2]).unwrap();
        assert!(drop.markers.iter().any(|m| m == ACTION_BUTTON_MARKER));
        assert!(drop.markers.iter().any(|m| m == "action-drop"));
    }

    #[test]
    fn open_with_no_actions_renders_empty_list() {
        let (mut tree, mut menu) = setup();

        menu.open(&mut tree, &[], &iron_sword());

        assert!(tree.children(menu.list()).is_empty());
        assert!(menu.is_visible());
        assert_eq!(tree.text(tree.query("action-item-name").unwrap()), "Iron Sword");
    }

    #[test]
    fn reopening_replaces_nodes_without_duplicates() {
        let (mut tree, mut menu) = setup();
        menu.open(
            &mut tree,
            &[
                ActionDescriptor::primary(MenuAction::Equip),
                ActionDescriptor::secondary(MenuAction::Drop),
            ],
            &iron_sword(),
        );
        let stale = menu.node_for(MenuAction::Equip).unwrap();

        menu.open(
            &mut tree,
            &[
                ActionDescriptor::primary(MenuAction::Drop),
                ActionDescriptor::primary(MenuAction::Equip),
            ],
            &iron_sword(),
        );

        let children = tree.children(menu.list());
        assert_eq!(children.len(), 2);
        assert_eq!(tree.text(children[0]), "Drop");
        assert_eq!(tree.text(children[1]), "Equip");
        assert!(!tree.contains(stale));
        assert_eq!(menu.handler_count(), 2);

        let drop = tree.node(children[0]).unwrap();
        assert_eq!(drop.listeners, Gesture::Primary.as_set());
    }

    #[test]
    fn duplicate_kinds_share_one_node() {
        let (mut tree, mut menu) = setup();

        menu.open(
            &mut tree,
            &[
                ActionDescriptor::primary(MenuAction::Drop),
                ActionDescriptor::primary(MenuAction::Drop),
            ],
            &iron_sword(),
        );

        assert_eq!(tree.children(menu.list()).len(), 1);
        assert_eq!(menu.entries().len(), 1);
        assert_eq!(menu.handler_count(), 1);
        let node = menu.node_for(MenuAction::Drop).unwrap();
        assert_eq!(tree.node(node).unwrap().listen_calls, 1);
    }

    #[test]
    fn repeated_add_does_not_duplicate_handlers() {
        let (mut tree, mut menu) = setup();
        let seen = recorder(&mut menu);
        menu.open(&mut tree, &[], &iron_sword());

        let equip = ActionDescriptor::primary(MenuAction::Equip);
        menu.add(&mut tree, equip);
        menu.add(&mut tree, equip);

        assert_eq!(tree.children(menu.list()).len(), 1);
        assert_eq!(menu.handler_count(), 1);

        gesture(&mut menu, MenuAction::Equip, Gesture::Primary);
        assert_eq!(seen.lock().unwrap().as_slice(), &[equip]);
    }

    #[test]
    fn same_kind_with_both_gestures_gets_two_handlers() {
        let (mut tree, mut menu) = setup();
        let seen = recorder(&mut menu);

        menu.open(
            &mut tree,
            &[
                ActionDescriptor::primary(MenuAction::Drop),
                ActionDescriptor::secondary(MenuAction::Drop),
            ],
            &iron_sword(),
        );

        assert_eq!(tree.children(menu.list()).len(), 1);
        gesture(&mut menu, MenuAction::Drop, Gesture::Primary);
        gesture(&mut menu, MenuAction::Drop, Gesture::Secondary);

        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[
                ActionDescriptor::primary(MenuAction::Drop),
                ActionDescriptor::secondary(MenuAction::Drop),
            ]
        );
    }

    #[test]
    fn gestures_only_fire_their_bound_action() {
        let (mut tree, mut menu) = setup();
        let seen = recorder(&mut menu);
        let equip = ActionDescriptor::primary(MenuAction::Equip);
        let drop = ActionDescriptor::secondary(MenuAction::Drop);
        menu.open(&mut tree, &[equip, drop], &iron_sword());

        assert_eq!(gesture(&mut menu, MenuAction::Equip, Gesture::Secondary), Dispatch::Unhandled);
        assert_eq!(gesture(&mut menu, MenuAction::Drop, Gesture::Primary), Dispatch::Unhandled);
        assert!(seen.lock().unwrap().is_empty());

        assert_eq!(gesture(&mut menu, MenuAction::Equip, Gesture::Primary), Dispatch::Delivered(equip));
        assert_eq!(gesture(&mut menu, MenuAction::Drop, Gesture::Secondary), Dispatch::Delivered(drop));
        assert_eq!(seen.lock().unwrap().as_slice(), &[equip, drop]);
    }

    #[test]
    fn handled_gestures_prevent_default() {
        let (mut tree, mut menu) = setup();
        menu.open(
            &mut tree,
            &[ActionDescriptor::secondary(MenuAction::Drop)],
            &iron_sword(),
        );
        let node = menu.node_for(MenuAction::Drop).unwrap();

        let mut handled = GestureEvent::new(node, Gesture::Secondary);
        menu.dispatch(&mut handled);
        assert!(handled.is_default_prevented());

        let mut unhandled = GestureEvent::new(node, Gesture::Primary);
        menu.dispatch(&mut unhandled);
        assert!(!unhandled.is_default_prevented());
    }

    #[test]
    fn without_subscriber_selection_is_dropped() {
        let (mut tree, mut menu) = setup();
        let use_action = ActionDescriptor::primary(MenuAction::Use);
        menu.open(&mut tree, &[use_action], &iron_sword());

        assert!(!menu.has_subscriber());
        let node = menu.node_for(MenuAction::Use).unwrap();
        let mut event = GestureEvent::new(node, Gesture::Primary);

        assert_eq!(menu.dispatch(&mut event), Dispatch::Dropped(use_action));
        assert!(event.is_default_prevented());
    }

    #[test]
    fn only_newest_subscriber_is_invoked() {
        let (mut tree, mut menu) = setup();
        let first = recorder(&mut menu);
        let second = recorder(&mut menu);
        menu.open(
            &mut tree,
            &[ActionDescriptor::primary(MenuAction::Eat)],
            &iron_sword(),
        );

        gesture(&mut menu, MenuAction::Eat, Gesture::Primary);

        assert!(first.lock().unwrap().is_empty());
        assert_eq!(second.lock().unwrap().len(), 1);
    }

    #[test]
    fn subscriber_survives_reopen_until_disconnected() {
        let (mut tree, mut menu) = setup();
        let seen = recorder(&mut menu);
        let eat = [ActionDescriptor::primary(MenuAction::Eat)];

        menu.open(&mut tree, &eat, &iron_sword());
        menu.open(&mut tree, &eat, &iron_sword());
        gesture(&mut menu, MenuAction::Eat, Gesture::Primary);
        assert_eq!(seen.lock().unwrap().len(), 1);

        menu.disconnect();
        gesture(&mut menu, MenuAction::Eat, Gesture::Primary);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn removed_nodes_no_longer_dispatch() {
        let (mut tree, mut menu) = setup();
        let seen = recorder(&mut menu);
        menu.open(
            &mut tree,
            &[ActionDescriptor::primary(MenuAction::Equip)],
            &iron_sword(),
        );
        let stale = menu.node_for(MenuAction::Equip).unwrap();

        menu.open(
            &mut tree,
            &[ActionDescriptor::primary(MenuAction::Examine)],
            &iron_sword(),
        );

        let mut event = GestureEvent::new(stale, Gesture::Primary);
        assert_eq!(menu.dispatch(&mut event), Dispatch::Unhandled);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn info_panel_shows_name_and_description() {
        let (mut tree, mut menu) = setup();
        let name = tree.query("action-item-name").unwrap();
        let description = tree.query("action-item-description").unwrap();

        menu.open(&mut tree, &[], &iron_sword());
        assert_eq!(tree.text(name), "Iron Sword");
        assert!(tree.text(description).contains("Slash: 5"));
        assert!(tree.text(description).contains("Strength: 1"));

        let apple = SubjectInfo::new("Apple").with_description("Restores a little health.");
        menu.open(&mut tree, &[], &apple);
        assert_eq!(tree.text(name), "Apple");
        assert_eq!(tree.text(description), "Restores a little health.");
    }

    #[test]
    fn hide_keeps_content_and_show_restores_it() {
        let (mut tree, mut menu) = setup();
        menu.open(
            &mut tree,
            &[ActionDescriptor::primary(MenuAction::Equip)],
            &iron_sword(),
        );
        assert!(tree.is_visible(menu.root()));

        menu.hide(&mut tree);
        assert_eq!(menu.visibility(), Visibility::Hidden);
        assert!(!tree.is_visible(menu.root()));
        assert_eq!(tree.children(menu.list()).len(), 1);

        menu.show(&mut tree);
        assert!(menu.is_visible());
        assert_eq!(menu.entries().len(), 1);
    }

    #[test]
    fn iron_sword_example() {
        let (mut tree, mut menu) = setup();
        let seen = recorder(&mut menu);
        let equip = ActionDescriptor::primary(MenuAction::Equip);
        let drop = ActionDescriptor::secondary(MenuAction::Drop);

        menu.open(&mut tree, &[equip, drop], &iron_sword());

        let children = tree.children(menu.list()).to_vec();
        assert_eq!(children.len(), 2);
        assert_eq!(Some(children[0]), tree.query("action-equip"));
        assert_eq!(Some(children[1]), tree.query("action-drop"));

        menu.dispatch(&mut GestureEvent::new(children[0], Gesture::Primary));
        menu.dispatch(&mut GestureEvent::new(children[1], Gesture::Secondary));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[equip, drop]);
        assert!(!seen[0].secondary);
        assert!(seen[1].secondary);
    }
}
