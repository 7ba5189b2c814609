//! Cross-frontend primitives for presenting the game.
//!
//! Houses the UI-tree port, the widget lifecycle helper, and the contextual
//! action menu so the terminal client and future graphical clients render
//! the same behaviour through their own node trees.
pub mod action_menu;
pub mod config;
pub mod error;
pub mod frontend;
pub mod ui;
pub mod widget;

pub use action_menu::{
    ActionDescriptor, ActionMenu, Dispatch, HandlerTable, SelectionChannel, SubjectInfo,
    compose_description,
};
pub use config::{ActionMenuLayout, ChannelConfig, FrontendConfig};
pub use error::{ElementRole, MenuError};
pub use frontend::Frontend;
pub use ui::{Gesture, GestureEvent, GestureSet, NodeId, UiTree};
pub use widget::{Lifecycle, Panel, Visibility};

#[cfg(test)]
pub use ui::mock::MockUiTree;
