//! Item stat blocks displayed when inspecting equipment.

/// Combat stats split by damage style.
///
/// Used twice per item: once for attack and once for defense.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Stats {
    pub crush: i32,
    pub slash: i32,
    pub stab: i32,
    pub magic: i32,
}

impl Stats {
    pub const fn new(crush: i32, slash: i32, stab: i32, magic: i32) -> Self {
        Self {
            crush,
            slash,
            stab,
            magic,
        }
    }
}

/// Flat bonuses granted while the item is equipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Bonuses {
    pub accuracy: i32,
    pub strength: i32,
    pub archery: i32,
    pub magic: i32,
}

impl Bonuses {
    pub const fn new(accuracy: i32, strength: i32, archery: i32, magic: i32) -> Self {
        Self {
            accuracy,
            strength,
            archery,
            magic,
        }
    }
}
