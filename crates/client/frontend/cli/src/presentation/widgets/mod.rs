//! Widgets composed by the main render function.
pub mod action_menu;
pub mod activity;
pub mod header;
pub mod inventory;
