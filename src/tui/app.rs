// TUI application state
//
// App is the orchestrator: it owns the components, the theme and the
// clipboard, and routes input to whichever component has focus.

use super::clipboard::ClipboardWriter;
use super::components::logs_panel::LogsPanel;
use super::components::translation_list::{ClickOutcome, TranslationList};
use super::traits::{ComponentId, Copyable, Handled, Interactive};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::records::{load_records, TranslationRecord};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::Duration;

/// Main application state for the TUI
pub struct App {
    /// Translation cards (main content)
    pub list: TranslationList,

    /// System logs panel
    pub logs_panel: LogsPanel,

    /// Entries captured by the tracing layer
    pub log_buffer: LogBuffer,

    /// Current color theme
    pub theme: Theme,

    /// Where copied text goes
    clipboard: Box<dyn ClipboardWriter>,

    /// Where the records came from, for the title bar
    pub source_label: String,

    /// Records file to reload from (None for the demo set)
    records_path: Option<PathBuf>,

    /// Component receiving navigation keys
    pub focused: ComponentId,

    /// Whether the logs panel is visible
    pub show_logs: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(
        records: Vec<TranslationRecord>,
        source_label: impl Into<String>,
        config: &Config,
        theme: Theme,
        log_buffer: LogBuffer,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        Self {
            list: TranslationList::new(records, Duration::from_millis(config.copy_pulse_ms)),
            logs_panel: LogsPanel::new(),
            log_buffer,
            theme,
            clipboard,
            source_label: source_label.into(),
            records_path: None,
            focused: ComponentId::TranslationList,
            show_logs: config.show_logs,
            should_quit: false,
        }
    }

    /// Remember the file the records came from so they can be reloaded
    pub fn with_records_path(mut self, path: PathBuf) -> Self {
        self.records_path = Some(path);
        self
    }

    /// Re-read the records file, keeping the current records on failure
    pub fn reload_records(&mut self) {
        let Some(path) = &self.records_path else {
            tracing::debug!("Nothing to reload: showing demo records");
            return;
        };

        match load_records(path) {
            Ok(records) => self.list.set_records(records),
            Err(e) => tracing::warn!("Reload failed: {:#}", e),
        }
    }

    /// Show or hide the logs panel; hiding it returns focus to the list
    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if !self.show_logs && self.focused == ComponentId::Logs {
            self.focused = ComponentId::TranslationList;
        }
        tracing::debug!("Logs panel {}", if self.show_logs { "shown" } else { "hidden" });
    }

    /// Move focus to the next panel (only the list when logs are hidden)
    pub fn focus_next(&mut self) {
        if self.show_logs {
            self.focused = self.focused.next_focus();
        }
    }

    /// Route a key to the focused component
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused {
            ComponentId::Logs => self.logs_panel.handle_key(key),
            _ => self.list.handle_key(key),
        }
    }

    /// Keybind hints of the focused component
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focused {
            ComponentId::Logs => self.logs_panel.focus_hint(),
            _ => self.list.focus_hint(),
        }
    }

    /// Copy from the focused component
    ///
    /// The list copies through its row so the copy icon pulses; the logs
    /// panel copies the selected entry's text.
    pub fn copy_focused(&mut self) {
        match self.focused {
            ComponentId::Logs => {
                let Some(text) = self.logs_panel.copy_text() else {
                    return;
                };
                match self.clipboard.write(&text) {
                    Ok(()) => tracing::debug!("Copied {}", self.logs_panel.copy_description()),
                    Err(e) => tracing::warn!("Copy failed: {:#}", e),
                }
            }
            _ => {
                self.list.copy_selected(self.clipboard.as_ref());
            }
        }
    }

    /// Route a left click; clicks on a row focus the list
    pub fn click(&mut self, column: u16, row: u16) -> ClickOutcome {
        let outcome = self.list.click(column, row, self.clipboard.as_ref());
        if outcome != ClickOutcome::Outside {
            self.focused = ComponentId::TranslationList;
        }
        outcome
    }

    /// Mouse wheel: acts like Up/Down on the focused component
    pub fn scroll(&mut self, down: bool) {
        let code = if down { KeyCode::Down } else { KeyCode::Up };
        self.dispatch_to_focused(KeyEvent::new(code, KeyModifiers::NONE));
    }
}
