//! Application state for cursor movement and the activity panel.

use std::collections::VecDeque;

use game_core::{Animated, Chest};

const ACTIVITY_CAPACITY: usize = 32;

/// Bounded log of what the player did, newest last.
#[derive(Clone, Debug)]
pub struct ActivityLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.into());
    }

    /// The last `limit` entries in chronological order.
    pub fn tail(&self, limit: usize) -> impl Iterator<Item = &str> {
        let skip = self.entries.len().saturating_sub(limit);
        self.entries.iter().skip(skip).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Mutable UI state that is not owned by a widget.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Cursor in the inventory pane.
    pub selected_item: usize,
    /// Cursor in the open action menu.
    pub focused_action: usize,
    pub activity: ActivityLog,
    /// Feedback for input nobody handled.
    pub hint: Option<String>,
    /// Decoration shown in the header; idles from startup.
    pub chest: Chest,
}

impl AppState {
    pub fn new() -> Self {
        let mut chest = Chest::new("chest-1", "wooden_chest");
        chest.idle();
        if let Some(animation) = chest.animation() {
            tracing::debug!(
                animation = %animation.name,
                speed_ms = animation.speed_ms,
                "Chest idling"
            );
        }

        Self {
            selected_item: 0,
            focused_action: 0,
            activity: ActivityLog::new(ACTIVITY_CAPACITY),
            hint: None,
            chest,
        }
    }

    pub fn move_item_cursor(&mut self, delta: isize, len: usize) {
        self.selected_item = wrap(self.selected_item, delta, len);
    }

    pub fn move_action_cursor(&mut self, delta: isize, len: usize) {
        self.focused_action = wrap(self.focused_action, delta, len);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}
