// Views module - frame composition
//
// Layout, top to bottom:
//   title bar │ translation list │ logs panel (optional) │ status bar

use super::app::App;
use super::components::{self, logs_panel};
use super::layout::logs_panel_height;
use super::traits::{Component, RenderContext};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Draw the whole UI
///
/// Takes `&mut App` because the list lays out its rows and the logs panel
/// syncs its entries right before rendering.
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(
        Style::default()
            .bg(app.theme.background)
            .fg(app.theme.foreground),
    );
    f.render_widget(bg_block, f.area());

    let logs_height = if app.show_logs {
        logs_panel_height(f.area().height)
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(logs_height),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);

    app.list.layout(chunks[1]);
    let ctx = RenderContext::new(&app.theme, app.focused);
    app.list.render(f, chunks[1], &ctx);

    if app.show_logs {
        let viewport = chunks[2].height.saturating_sub(2) as usize;
        app.logs_panel
            .sync_entries(app.log_buffer.recent(logs_panel::HISTORY), viewport);
        let ctx = RenderContext::new(&app.theme, app.focused);
        app.logs_panel.render(f, chunks[2], &ctx);
    }

    components::render_status(f, chunks[3], app);
}
