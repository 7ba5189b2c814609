//! Main render entry point composing every widget.
use anyhow::Result;
use client_frontend_core::ActionMenuLayout;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    catalog::Catalog,
    config::UiConfig,
    presentation::{
        tree::{HitRegion, TerminalTree},
        widgets,
    },
    state::AppState,
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub tree: &'a TerminalTree,
    pub layout: &'a ActionMenuLayout,
    pub catalog: &'a Catalog,
    pub state: &'a AppState,
    pub ui: &'a UiConfig,
}

/// Draw one frame and return the clickable regions it produced.
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, ctx: &RenderContext) -> Result<Vec<HitRegion>> {
    let mut hits = Vec::new();
    terminal.draw(|frame| {
        hits = render(frame, ctx);
    })?;
    Ok(hits)
}

/// Layout: header, inventory | action menu, activity panel, footer.
pub fn render(frame: &mut Frame, ctx: &RenderContext) -> Vec<HitRegion> {
    let chunks = Layout::vertical([
        Constraint::Length(3),                   // Header
        Constraint::Min(0),                      // Body
        Constraint::Length(ctx.ui.log_panel_height), // Activity
        Constraint::Length(1),                   // Footer
    ])
    .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.state);

    let menu_width = ctx.ui.menu_width.min(100);
    let body = Layout::horizontal([
        Constraint::Percentage(100 - menu_width), // Inventory
        Constraint::Percentage(menu_width),       // Action menu
    ])
    .split(chunks[1]);

    widgets::inventory::render(frame, body[0], ctx.catalog, ctx.state.selected_item);
    let hits = widgets::action_menu::render(
        frame,
        body[1],
        ctx.tree,
        ctx.layout,
        ctx.state.focused_action,
    );

    widgets::activity::render(frame, chunks[2], ctx.state);
    render_footer(frame, chunks[3]);

    hits
}

fn render_footer(frame: &mut Frame, area: ratatui::layout::Rect) {
    let footer = Paragraph::new(Line::from(vec![Span::styled(
        "Enter inspect/activate | a alternate | click / right-click | Esc close | q quit",
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    )]));
    frame.render_widget(footer, area);
}
