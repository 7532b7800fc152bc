// Components module - reusable UI building blocks
//
// Content:
// - Translation list: scrolling cards backed by a pool of rows
// - Translation row: one record as a card with a copy icon
//
// Shell components rendered around the content:
// - Title bar: app name, record source and count
// - Status bar: key hints
// - Logs panel: captured tracing entries (toggleable)

pub mod copy_affordance;
pub mod logs_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod translation_list;
pub mod translation_row;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
