//! Terminal rendering: node tree, widgets, and terminal lifecycle.
pub mod terminal;
pub mod tree;
pub mod ui;
pub mod widgets;
