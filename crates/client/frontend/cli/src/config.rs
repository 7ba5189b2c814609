//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// JSON item catalog to inspect. The built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MENU_WIDTH` - Action menu width in percent (default: 45, clamped to 20..=90)
    /// - `CLI_LOG_PANEL_HEIGHT` - Activity panel height in lines (default: 8)
    /// - `CLI_ITEM_CATALOG` - Path to a JSON item catalog
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u16>("CLI_MENU_WIDTH") {
            config.ui.menu_width = width.clamp(20, 90);
        }

        if let Some(height) = read_env::<u16>("CLI_LOG_PANEL_HEIGHT") {
            config.ui.log_panel_height = height.max(3);
        }

        if let Some(path) = env::var_os("CLI_ITEM_CATALOG").filter(|p| !p.is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Width of the action menu pane in percent of the body.
    pub menu_width: u16,
    /// Height of the activity panel in lines (including borders).
    pub log_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            menu_width: 45,
            log_panel_height: 8,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
