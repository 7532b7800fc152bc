// Title bar component
//
// Renders the app name, where the records came from and how many there are.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title text for `count` records loaded from `source`
pub fn title_text(source: &str, count: usize) -> String {
    let noun = if count == 1 { "translation" } else { "translations" };
    format!(" ⧉ translate-mate ──── {} {} from {}", count, noun, source)
}

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(title_text(&app.source_label, app.list.len()))
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(format!(" {} ", app.theme.name)).right_aligned()),
        );

    f.render_widget(title, area);
}
