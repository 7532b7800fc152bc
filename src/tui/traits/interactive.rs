//! Interactive trait for components that handle keyboard input
//!
//! The App routes key events to the focused component.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the App whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global handlers: q, l, Tab)
///    │
///    │ if not handled
///    ▼
/// Focused component (via Interactive)
///    │
///    ▼
/// Handled::Yes / Handled::No
/// ```
pub trait Interactive: Component {
    /// Handle a key event
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up to the App.
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints for the status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
