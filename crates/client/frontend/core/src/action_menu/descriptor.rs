//! Inputs accepted by the action menu.

use game_core::{Bonuses, MenuAction, Stats};

use crate::ui::Gesture;

/// One selectable menu entry: an action kind and the gesture that triggers it.
///
/// `kind` alone identifies the entry; the gesture binding does not take part
/// in de-duplication.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDescriptor {
    pub kind: MenuAction,
    /// Bind to the secondary gesture instead of the primary one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub secondary: bool,
}

impl ActionDescriptor {
    pub const fn primary(kind: MenuAction) -> Self {
        Self {
            kind,
            secondary: false,
        }
    }

    pub const fn secondary(kind: MenuAction) -> Self {
        Self {
            kind,
            secondary: true,
        }
    }

    pub const fn gesture(&self) -> Gesture {
        Gesture::from_secondary(self.secondary)
    }
}

/// Item or entity being inspected. Only read while the menu renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SubjectInfo {
    pub display_name: String,
    pub attack_stats: Stats,
    pub defense_stats: Stats,
    pub bonuses: Bonuses,
    /// Replaces the generated stat summary when non-empty.
    pub custom_description: Option<String>,
}

impl SubjectInfo {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    pub fn with_attack(mut self, stats: Stats) -> Self {
        self.attack_stats = stats;
        self
    }

    pub fn with_defense(mut self, stats: Stats) -> Self {
        self.defense_stats = stats;
        self
    }

    pub fn with_bonuses(mut self, bonuses: Bonuses) -> Self {
        self.bonuses = bonuses;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.custom_description = Some(description.into());
        self
    }
}
