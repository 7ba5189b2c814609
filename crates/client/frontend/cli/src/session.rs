//! Interactive session: the terminal tree, the action menu, and the commands
//! that drive them.
use anyhow::Result;
use client_frontend_core::{
    ActionDescriptor, ActionMenu, ActionMenuLayout, Dispatch, Gesture, GestureEvent, MenuError,
    NodeId,
};
use ratatui::{Terminal, backend::Backend};
use tokio::sync::mpsc;

use crate::{
    catalog::Catalog,
    config::UiConfig,
    input::InputCommand,
    presentation::{
        tree::TerminalTree,
        ui::{self, RenderContext},
    },
    state::AppState,
};

const UNHANDLED_SECONDARY_HINT: &str = "Nothing to do here.";

pub struct MenuSession {
    pub tree: TerminalTree,
    pub menu: ActionMenu,
    pub catalog: Catalog,
    pub state: AppState,
    layout: ActionMenuLayout,
    /// Catalog index the open menu was built for.
    inspected: Option<usize>,
}

impl MenuSession {
    /// Builds the tree and menu, forwarding every selection into `selections`.
    pub fn new(
        layout: &ActionMenuLayout,
        catalog: Catalog,
        selections: mpsc::Sender<ActionDescriptor>,
    ) -> Result<Self, MenuError> {
        let tree = TerminalTree::with_layout(layout);
        let mut menu = ActionMenu::new(&tree, layout)?;

        menu.on_select(move |action| {
            if let Err(e) = selections.try_send(action) {
                tracing::warn!("Dropped selection {}: {}", action.kind, e);
            }
        });

        Ok(Self {
            tree,
            menu,
            catalog,
            state: AppState::new(),
            layout: layout.clone(),
            inspected: None,
        })
    }

    /// Applies one input command. Returns `true` when the user quits.
    pub fn handle_command(&mut self, command: InputCommand) -> bool {
        match command {
            InputCommand::Quit => return true,
            InputCommand::Close => self.menu.hide(&mut self.tree),
            InputCommand::MoveCursor(delta) => {
                if self.menu.is_visible() {
                    let count = self.menu.entries().len();
                    self.state.move_action_cursor(delta, count);
                } else {
                    self.state.move_item_cursor(delta, self.catalog.len());
                }
            }
            InputCommand::Inspect => self.inspect_selected(),
            InputCommand::Activate(gesture) => {
                if let Some(node) = self.focused_node() {
                    self.perform(node, gesture);
                }
            }
            InputCommand::Pointer {
                column,
                row,
                gesture,
            } => match self.tree.hit_test(column, row) {
                Some(node) => self.perform(node, gesture),
                None => self.fall_through(gesture),
            },
            InputCommand::None => {}
        }
        false
    }

    /// Opens the action menu for the item under the inventory cursor.
    pub fn inspect_selected(&mut self) {
        let index = self.state.selected_item;
        let Some(entry) = self.catalog.get(index) else {
            return;
        };

        self.menu.open(&mut self.tree, &entry.actions, &entry.subject);
        self.inspected = Some(index);
        self.state.focused_action = 0;
        self.state.hint = None;
    }

    /// Consumes a selection delivered through the channel.
    pub fn on_selection(&mut self, action: ActionDescriptor) {
        let subject = self
            .inspected
            .and_then(|index| self.catalog.get(index))
            .map(|entry| entry.subject.display_name.as_str())
            .unwrap_or("?");
        let via = if action.secondary { " (alternate)" } else { "" };

        tracing::info!("Selected {} on {}", action.kind, subject);
        self.state
            .activity
            .push(format!("{}: {}{}", subject, action.kind.label(), via));

        self.menu.hide(&mut self.tree);
    }

    /// Draws a frame and keeps its hit regions for the next pointer event.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>, ui_config: &UiConfig) -> Result<()> {
        let ctx = RenderContext {
            tree: &self.tree,
            layout: &self.layout,
            catalog: &self.catalog,
            state: &self.state,
            ui: ui_config,
        };
        let hits = ui::draw(terminal, &ctx)?;
        self.tree.set_hit_regions(hits);
        Ok(())
    }

    fn focused_node(&self) -> Option<NodeId> {
        let action = self.menu.entries().get(self.state.focused_action)?;
        self.menu.node_for(action.kind)
    }

    fn perform(&mut self, node: NodeId, gesture: Gesture) {
        let mut event = GestureEvent::new(node, gesture);
        let outcome = self.menu.dispatch(&mut event);
        tracing::debug!(?outcome, node = %node, %gesture, "Gesture dispatched");

        if !event.is_default_prevented() {
            self.fall_through(gesture);
        } else {
            self.state.hint = None;
        }

        if let Dispatch::Dropped(action) = outcome {
            tracing::warn!("No subscriber for {}", action.kind);
        }
    }

    /// Default behaviour for gestures no widget handled.
    fn fall_through(&mut self, gesture: Gesture) {
        if gesture == Gesture::Secondary {
            self.state.hint = Some(UNHANDLED_SECONDARY_HINT.to_string());
        }
    }
}
