//! Game vocabulary shared by every client layer.
//!
//! `game-core` owns the closed set of contextual menu actions, the stat blocks
//! attached to items, and the entity capabilities (such as animation requests)
//! that UI code may reference without depending on the simulation itself.
pub mod entity;
pub mod item;
pub mod menu;

pub use entity::{Animated, Animation, Chest, EntityType};
pub use item::{Bonuses, Stats};
pub use menu::MenuAction;
