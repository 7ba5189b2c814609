//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub channels: ChannelConfig,
    pub action_menu: ActionMenuLayout,
}

impl FrontendConfig {
    pub const fn new(channels: ChannelConfig, action_menu: ActionMenuLayout) -> Self {
        Self {
            channels,
            action_menu,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SELECTION_BUFFER` - Pending selections queued for the frontend (default: 16)
    /// - `ACTION_MENU_ROOT` - Marker of the menu root container (default: `action-container`)
    /// - `ACTION_MENU_LIST` - Marker of the action list (default: `action-list`)
    /// - `ACTION_MENU_NAME` - Marker of the subject name panel (default: `action-item-name`)
    /// - `ACTION_MENU_DESCRIPTION` - Marker of the description panel (default: `action-item-description`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("SELECTION_BUFFER") {
            config.channels.selection_buffer = capacity.max(1);
        }

        let layout = &mut config.action_menu;
        for (key, slot) in [
            ("ACTION_MENU_ROOT", &mut layout.root),
            ("ACTION_MENU_LIST", &mut layout.list),
            ("ACTION_MENU_NAME", &mut layout.name),
            ("ACTION_MENU_DESCRIPTION", &mut layout.description),
        ] {
            if let Some(marker) = read_env_marker(key) {
                *slot = marker;
            }
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub selection_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            selection_buffer: 16,
        }
    }
}

/// Markers locating the action menu elements inside the UI tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionMenuLayout {
    pub root: String,
    pub list: String,
    pub name: String,
    pub description: String,
}

impl Default for ActionMenuLayout {
    fn default() -> Self {
        Self {
            root: "action-container".to_string(),
            list: "action-list".to_string(),
            name: "action-item-name".to_string(),
            description: "action-item-description".to_string(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_marker(key: &str) -> Option<String> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
