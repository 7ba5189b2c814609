//! Input processing for the CLI client.
//!
//! This module owns the keyboard/mouse-to-command mapping so the rest of the
//! application stays agnostic about concrete bindings or the specifics of
//! `crossterm` events.

use client_frontend_core::Gesture;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};

/// High-level outcome of processing a terminal event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    /// Exit the application.
    Quit,
    /// Hide the action menu.
    Close,
    /// Move the active cursor by the given offset.
    MoveCursor(isize),
    /// Open the action menu for the selected item.
    Inspect,
    /// Perform a gesture on the focused action.
    Activate(Gesture),
    /// Perform a gesture at a screen cell.
    Pointer { column: u16, row: u16, gesture: Gesture },
    /// No meaningful command was produced.
    None,
}

/// Maps raw events to commands. `Enter` inspects while the menu is closed and
/// activates the focused action while it is open.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_event(&self, event: &Event, menu_open: bool) -> InputCommand {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, menu_open),
            Event::Mouse(mouse) => {
                let gesture = match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => Gesture::Primary,
                    MouseEventKind::Down(MouseButton::Right) => Gesture::Secondary,
                    _ => return InputCommand::None,
                };
                InputCommand::Pointer {
                    column: mouse.column,
                    row: mouse.row,
                    gesture,
                }
            }
            _ => InputCommand::None,
        }
    }

    fn handle_key(&self, key: &KeyEvent, menu_open: bool) -> InputCommand {
        match key.code {
            KeyCode::Esc => InputCommand::Close,
            KeyCode::Up => InputCommand::MoveCursor(-1),
            KeyCode::Down => InputCommand::MoveCursor(1),
            KeyCode::Enter if menu_open => InputCommand::Activate(Gesture::Primary),
            KeyCode::Enter => InputCommand::Inspect,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => InputCommand::Quit,
                'k' => InputCommand::MoveCursor(-1),
                'j' => InputCommand::MoveCursor(1),
                'a' if menu_open => InputCommand::Activate(Gesture::Secondary),
                _ => InputCommand::None,
            },
            _ => InputCommand::None,
        }
    }
}
