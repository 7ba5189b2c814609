//! Menu action kinds - every contextual action a subject can offer.

/// Kinds of actions offered by the contextual action menu.
///
/// The snake_case form (`"drop_one"`) is the stable identifier used by
/// frontends to tag visual nodes, so renaming a variant is a breaking change.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MenuAction {
    /// Activate the item (read a scroll, open a chest).
    Use,
    /// Move the item into an equipment slot.
    Equip,
    /// Consume food.
    Eat,
    /// Show the full item description.
    Examine,
    /// Drop the whole stack.
    Drop,
    /// Drop a single unit from a stack.
    DropOne,
    /// Drop a chosen amount from a stack.
    DropMany,
}

impl MenuAction {
    /// Human readable label shown on the action button.
    pub const fn label(self) -> &'static str {
        match self {
            MenuAction::Use => "Use",
            MenuAction::Equip => "Equip",
            MenuAction::Eat => "Eat",
            MenuAction::Examine => "Examine",
            MenuAction::Drop => "Drop",
            MenuAction::DropOne => "Drop one",
            MenuAction::DropMany => "Drop many",
        }
    }
}
