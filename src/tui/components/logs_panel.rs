//! Logs panel component
//!
//! Shows entries captured by the tracing layer, color coded by level.
//! Follows new entries until the user scrolls or selects, and resumes
//! following once they return to the bottom (or press Esc).

use super::scrollbar::render_scrollbar;
use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// How many recent entries the panel works with
pub const HISTORY: usize = 500;

/// Logs panel component
pub struct LogsPanel {
    scroll: ScrollState,

    /// Selected entry (None while following)
    selected: Option<usize>,

    /// Entries seen by the last sync
    entries: Vec<LogEntry>,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::following(),
            selected: None,
            entries: Vec::new(),
        }
    }

    /// Take the latest entries and viewport height (call each frame)
    pub fn sync_entries(&mut self, entries: Vec<LogEntry>, viewport_height: usize) {
        self.scroll.update_dimensions(entries.len(), viewport_height);

        if let Some(idx) = self.selected {
            if idx >= entries.len() {
                self.selected = entries.len().checked_sub(1);
            }
        }
        self.entries = entries;
    }

    /// Formatted text of the selected entry
    pub fn selected_entry_text(&self) -> Option<String> {
        self.selected
            .and_then(|idx| self.entries.get(idx))
            .map(format_log_entry)
    }

    /// Scroll by one line, following again at the bottom
    fn step(&mut self, down: bool) {
        if down {
            if self.selected.is_none() {
                // Following already shows the newest entry
                return;
            }
            self.select_next();
            if self.scroll.auto_follow {
                self.selected = None;
            }
        } else {
            self.select_previous();
        }
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = self.entries[start..end]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut style = log_level_style(&entry.level, ctx.theme);
                if focused && self.selected == Some(start + i) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                ListItem::new(format_log_entry(entry)).style(style)
            })
            .collect();

        let border_color = if focused {
            ctx.theme.highlight
        } else {
            ctx.theme.border
        };

        let title = if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ctx.theme.border_type)
                .border_style(Style::default().fg(border_color))
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll);
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for LogsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        if self.entries.is_empty() {
            return;
        }
        let index = index.min(self.entries.len() - 1);
        self.selected = Some(index);

        let (start, end) = self.scroll.visible_range();
        if index < start {
            self.scroll.scroll_to(index);
            self.scroll.auto_follow = false;
        } else if index >= end {
            self.scroll.scroll_down();
        }
    }

    fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// First selection starts from the newest entry
    fn select_previous(&mut self) {
        match self.selected {
            Some(idx) if idx > 0 => self.select(idx - 1),
            Some(_) => {}
            None => {
                self.scroll.auto_follow = false;
                self.select_last();
            }
        }
    }
}

impl Copyable for LogsPanel {
    fn copy_text(&self) -> Option<String> {
        self.selected_entry_text()
    }

    fn copy_description(&self) -> String {
        "log entry".to_string()
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.step(false),
            KeyCode::Down | KeyCode::Char('j') => self.step(true),
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll_to_top();
                self.select_first();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = None;
                self.scroll_to_bottom();
            }
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Esc if self.selected.is_some() => {
                self.selected = None;
                self.scroll_to_bottom();
            }
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  y:copy entry  Esc:follow")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ═══════════════════════════════════════════════════════════════════════════

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.log_debug),
    }
}
