//! Entity capabilities visible to the UI layer.
//!
//! The animation engine (frame timing, sprite selection) lives elsewhere;
//! entities only record which animation they want and how fast it plays.

/// Animation request recorded on an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    pub name: String,
    /// Duration of a single frame in milliseconds.
    pub speed_ms: u32,
}

impl Animation {
    pub fn new(name: impl Into<String>, speed_ms: u32) -> Self {
        Self {
            name: name.into(),
            speed_ms,
        }
    }
}

/// Capability for entities that can request an animation.
pub trait Animated {
    fn set_animation(&mut self, name: &str, duration_ms: u32);

    /// Currently requested animation, if any.
    fn animation(&self) -> Option<&Animation>;
}

/// Entity categories rendered by the client.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntityType {
    Player,
    Npc,
    Item,
    Chest,
}

/// Lootable container placed in the world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chest {
    pub id: String,
    pub kind: String,
    animation: Option<Animation>,
}

impl Chest {
    pub const IDLE_ANIMATION: &'static str = "idle_down";
    pub const IDLE_SPEED_MS: u32 = 150;

    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            animation: None,
        }
    }

    pub const fn entity_type(&self) -> EntityType {
        EntityType::Chest
    }

    /// Requests the resting animation.
    pub fn idle(&mut self) {
        self.set_animation(Self::IDLE_ANIMATION, Self::IDLE_SPEED_MS);
    }
}

impl Animated for Chest {
    fn set_animation(&mut self, name: &str, duration_ms: u32) {
        self.animation = Some(Animation::new(name, duration_ms));
    }

    fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }
}
