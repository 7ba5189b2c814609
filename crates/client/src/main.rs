//! Game client binary.
//!
//! Composition root: loads configuration, installs logging, and hands
//! control to the selected frontend.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Inspect the built-in items
//! cargo run -p game-client
//!
//! # Inspect a custom catalog with a wider action menu
//! CLI_ITEM_CATALOG=items.json CLI_MENU_WIDTH=60 cargo run -p game-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{Catalog, CliConfig, CliFrontend, FrontendConfig, logging};
    use client_frontend_core::Frontend;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging()?;

    tracing::info!("Starting game client");
    tracing::info!("Selection buffer: {}", frontend_config.channels.selection_buffer);

    // 3. Load the item catalog
    let catalog = Catalog::load(&cli_config)?;
    tracing::info!("Catalog loaded: {} items", catalog.len());

    // 4. Build and run the frontend
    let mut frontend = CliFrontend::new(frontend_config, cli_config, catalog);
    frontend.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
