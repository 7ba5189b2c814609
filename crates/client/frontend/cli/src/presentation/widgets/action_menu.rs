//! Action menu pane, drawn from the nodes the shared `ActionMenu` maintains.
//!
//! This widget never decides what the menu contains. It reads the name,
//! action list and description straight from the [`TerminalTree`] and records
//! one hit region per action row.

use client_frontend_core::{ActionMenuLayout, GestureSet, NodeId, UiTree};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::tree::{HitRegion, TerminalTree};

/// Render the action menu, or a placeholder while it is hidden.
///
/// Returns the clickable regions of the action rows.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tree: &TerminalTree,
    layout: &ActionMenuLayout,
    focused: usize,
) -> Vec<HitRegion> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Actions ")
        .title_alignment(Alignment::Center);

    let visible_root = tree.query(&layout.root).filter(|&root| tree.is_visible(root));
    if visible_root.is_none() {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Select an item and press Enter to inspect it.",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )]),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return Vec::new();
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let actions = tree
        .query(&layout.list)
        .map(|list| tree.children(list))
        .unwrap_or(&[]);

    let chunks = Layout::vertical([
        Constraint::Length(1),                    // Name
        Constraint::Length(1),                    // Spacer
        Constraint::Length(actions.len() as u16), // Action rows
        Constraint::Length(1),                    // Spacer
        Constraint::Min(0),                       // Description
    ])
    .split(inner);

    let name = tree.query(&layout.name).map(|node| tree.text(node)).unwrap_or("");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            name.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    let hits = render_action_rows(frame, chunks[2], tree, actions, focused);

    let description = tree
        .query(&layout.description)
        .map(|node| tree.text(node))
        .unwrap_or("");
    frame.render_widget(
        Paragraph::new(description_lines(description)).wrap(Wrap { trim: false }),
        chunks[4],
    );

    hits
}

fn render_action_rows(
    frame: &mut Frame,
    area: Rect,
    tree: &TerminalTree,
    actions: &[NodeId],
    focused: usize,
) -> Vec<HitRegion> {
    let mut hits = Vec::with_capacity(actions.len());

    for (index, &node) in actions.iter().enumerate() {
        let row = Rect {
            y: area.y + index as u16,
            height: 1,
            ..area
        };
        if row.y >= area.bottom() {
            break;
        }

        let is_focused = index == focused;
        let prefix = if is_focused { "► " } else { "  " };
        let label_style = if is_focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let line = Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:<12}", tree.text(node)), label_style),
            Span::styled(
                gesture_hint(tree.listeners(node)),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), row);

        hits.push(HitRegion { area: row, node });
    }

    hits
}

fn gesture_hint(listeners: GestureSet) -> &'static str {
    match (
        listeners.contains(GestureSet::PRIMARY),
        listeners.contains(GestureSet::SECONDARY),
    ) {
        (true, true) => "[click / right-click]",
        (true, false) => "[click]",
        (false, true) => "[right-click]",
        (false, false) => "",
    }
}

/// Underlines the section headers of the stat summary.
fn description_lines(text: &str) -> Vec<Line<'_>> {
    text.lines()
        .map(|line| {
            if line.starts_with("Attack Stats:") || line == "Bonuses:" {
                Line::from(Span::styled(
                    line,
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ))
            } else {
                Line::from(line)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_hint_names_bound_buttons() {
        assert_eq!(gesture_hint(GestureSet::PRIMARY), "[click]");
        assert_eq!(gesture_hint(GestureSet::SECONDARY), "[right-click]");
        assert_eq!(gesture_hint(GestureSet::all()), "[click / right-click]");
        assert_eq!(gesture_hint(GestureSet::empty()), "");
    }

    #[test]
    fn only_headers_are_underlined() {
        let lines = description_lines("Attack Stats:     Defense Stats:\nCrush: 1\nBonuses:");
        let underlined: Vec<bool> = lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .any(|span| span.style.add_modifier.contains(Modifier::UNDERLINED))
            })
            .collect();
        assert_eq!(underlined, vec![true, false, true]);
    }
}
