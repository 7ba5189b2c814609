//! Activity panel showing delivered selections and input hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    // Borders plus one line reserved for the hint.
    let capacity = area.height.saturating_sub(3) as usize;

    let mut lines: Vec<Line> = state
        .activity
        .tail(capacity)
        .map(|entry| Line::from(Span::styled(entry.to_string(), Style::default().fg(Color::White))))
        .collect();

    if let Some(hint) = &state.hint {
        lines.push(Line::from(Span::styled(
            hint.clone(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Activity "),
    );

    frame.render_widget(paragraph, area);
}
