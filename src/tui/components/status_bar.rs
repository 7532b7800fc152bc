// Status bar component
//
// Renders key hints at the bottom: the focused panel's hints plus the
// global ones.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Hint line for a terminal `width` columns wide
///
/// Narrow terminals get only the essentials.
pub fn status_text(width: u16, focus_hint: Option<&str>, show_logs: bool) -> String {
    if !Breakpoint::from_width(width).at_least(Breakpoint::Normal) {
        return " y:copy │ l:logs │ q:quit".to_string();
    }

    let logs_hint = if show_logs {
        "l:hide logs │ Tab:focus"
    } else {
        "l:logs"
    };

    match focus_hint {
        Some(hint) => format!(" {} │ {} │ q:quit", hint, logs_hint),
        None => format!(" {} │ q:quit", logs_hint),
    }
}

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let text = status_text(area.width, app.focus_hint(), app.show_logs);

    let status = Paragraph::new(text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
