//! Header bar with the title and ambient world state.

use game_core::Animated;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chest = match state.chest.animation() {
        Some(animation) => format!("Chest: {} @ {} ms", animation.name, animation.speed_ms),
        None => "Chest: still".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            "Inventory",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(chest, Style::default().fg(Color::DarkGray)),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}
