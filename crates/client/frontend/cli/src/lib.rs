//! Terminal UI frontend for the game client.
//!
//! This crate renders the shared frontend widgets into a terminal.
//! It implements the `client_frontend_core::frontend::Frontend` trait.
//!
//! # Architecture
//!
//! - [`presentation::tree::TerminalTree`] implements the `UiTree` port, so the
//!   action menu from `client-frontend-core` runs unchanged.
//! - Mouse clicks are hit-tested against regions recorded at draw time and
//!   routed back to the menu as gesture events.
//! - Selections reach the event loop through a `tokio` channel fed by the
//!   menu's selection callback.

mod app;
mod catalog;
mod config;
mod input;
pub mod logging;
pub mod presentation;
mod session;
mod state;

pub use app::CliFrontend;
pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in the binary crate)
pub use client_frontend_core::FrontendConfig;
