// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Dispatching input to the app

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod scroll;
pub mod traits;
pub mod views;
pub mod wrap;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use traits::Handled;

/// How long to wait for input before redrawing (keeps the copy pulse moving)
const TICK: Duration = Duration::from_millis(100);

/// Run the TUI until the user quits
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    tracing::info!("TUI started with {} records", app.list.len());
    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop: draw, wait up to one tick for input, dispatch
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        if event::poll(TICK).context("Failed to poll terminal events")? {
            match event::read().context("Failed to read terminal event")? {
                Event::Key(key_event) => handle_key_event(app, key_event),
                Event::Mouse(mouse_event) => handle_mouse_event(app, mouse_event),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
///
/// Global keys first, then the focused component. Esc goes to the focused
/// component first so it can clear a selection, and quits otherwise.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        KeyCode::Esc => {
            if app.dispatch_to_focused(key_event) == Handled::No {
                app.should_quit = true;
            }
        }
        KeyCode::Char('y') | KeyCode::Enter => app.copy_focused(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reload_records(),
        KeyCode::Tab | KeyCode::BackTab => app.focus_next(),
        _ => {
            app.dispatch_to_focused(key_event);
        }
    }
}

/// Handle mouse input: left click goes to the list, the wheel moves selection
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let outcome = app.click(mouse_event.column, mouse_event.row);
            tracing::trace!(
                "Click at {},{}: {:?}",
                mouse_event.column,
                mouse_event.row,
                outcome
            );
        }
        MouseEventKind::ScrollUp => app.scroll(false),
        MouseEventKind::ScrollDown => app.scroll(true),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::demo::demo_records;
    use crate::logging::LogBuffer;
    use crate::theme::{Theme, ThemeConfig};
    use crate::tui::clipboard::MemoryClipboard;
    use crate::tui::traits::{ComponentId, Selectable};
    use ratatui::backend::TestBackend;
    use std::rc::Rc;

    fn app_with(clipboard: Rc<MemoryClipboard>) -> App {
        App::new(
            demo_records(),
            "demo",
            &Config::default(),
            Theme::hardcoded_default(&ThemeConfig::default()),
            LogBuffer::new(),
            Box::new(clipboard),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| views::draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..40)
            .map(|y| (0..80).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn y_copies_selected_translation() {
        let clipboard = Rc::new(MemoryClipboard::new());
        let mut app = app_with(clipboard.clone());

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(clipboard.contents().as_deref(), Some("Bonjour"));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            clipboard.contents(),
            Some(demo_records()[1].translation.clone())
        );
    }

    #[test]
    fn click_on_copy_icon_copies() {
        let clipboard = Rc::new(MemoryClipboard::new());
        let mut app = app_with(clipboard.clone());
        draw(&mut app);

        // First card sits right below the 3-row title bar
        let area = ratatui::layout::Rect::new(0, 3, 79, 0);
        let icon = app.list.row_for(0).unwrap().layout(area).icon;
        handle_mouse_event(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: icon.x,
                row: icon.y,
                modifiers: KeyModifiers::NONE,
            },
        );

        assert_eq!(clipboard.contents().as_deref(), Some("Bonjour"));
        assert!(draw(&mut app).contains('✓'));
    }

    #[test]
    fn wheel_moves_selection() {
        let mut app = app_with(Rc::new(MemoryClipboard::new()));
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };

        handle_mouse_event(&mut app, wheel(MouseEventKind::ScrollDown));
        handle_mouse_event(&mut app, wheel(MouseEventKind::ScrollDown));
        handle_mouse_event(&mut app, wheel(MouseEventKind::ScrollUp));
        assert_eq!(app.list.selected_index(), Some(1));
    }

    #[test]
    fn logs_toggle_and_focus() {
        let mut app = app_with(Rc::new(MemoryClipboard::new()));
        assert!(!app.show_logs);

        // Tab does nothing while the logs panel is hidden
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, ComponentId::TranslationList);

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, ComponentId::Logs);
        assert!(draw(&mut app).contains("System Logs"));

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.focused, ComponentId::TranslationList);
        assert!(!draw(&mut app).contains("System Logs"));
    }

    #[test]
    fn reload_picks_up_file_changes() {
        let path = std::env::temp_dir().join(format!(
            "translate-mate-reload-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"[{"target": "German", "translation": "Hallo", "sourceText": "Hello"}]"#)
            .unwrap();
        let clipboard = Rc::new(MemoryClipboard::new());
        let mut app = app_with(clipboard.clone()).with_records_path(path.clone());

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.list.len(), 1);
        assert_eq!(clipboard.contents().as_deref(), Some("Hallo"));

        // A broken file keeps what is on screen
        std::fs::write(&path, "not json").unwrap();
        press(&mut app, KeyCode::Char('r'));
        let _ = std::fs::remove_file(&path);
        assert_eq!(app.list.len(), 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with(Rc::new(MemoryClipboard::new()));
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = app_with(Rc::new(MemoryClipboard::new()));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn draws_title_rows_and_hints() {
        let mut app = app_with(Rc::new(MemoryClipboard::new()));
        let screen = draw(&mut app);

        assert!(screen.contains("translate-mate"));
        assert!(screen.contains(&format!("{} translations from demo", demo_records().len())));
        assert!(screen.contains("French"));
        assert!(screen.contains("Bonjour"));
        assert!(screen.contains("q:quit"));
    }
}
