//! Inventory pane listing inspectable items.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::catalog::Catalog;

pub fn render(frame: &mut Frame, area: Rect, catalog: &Catalog, selected: usize) {
    let items: Vec<ListItem> = catalog
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_selected = idx == selected;
            let prefix = if is_selected { "► " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::Yellow)),
                Span::styled(entry.subject.display_name.clone(), style),
                Span::styled(
                    format!("  ({} actions)", entry.actions.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Inventory (↑/↓ to navigate) ")
            .title_alignment(Alignment::Left),
    );

    frame.render_widget(list, area);
}
