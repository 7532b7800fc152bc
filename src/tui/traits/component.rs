//! Core component trait
//!
//! Every UI element that can be rendered implements `Component`.

use crate::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Identifier for a component, used for focus tracking and input routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Scrolling list of translation cards (default focus)
    TranslationList,
    /// System logs panel
    Logs,
}

impl ComponentId {
    /// Next focusable component (Tab behavior)
    pub fn next_focus(self) -> Self {
        match self {
            Self::TranslationList => Self::Logs,
            Self::Logs => Self::TranslationList,
        }
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need, never the mutable app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId) -> Self {
        Self { theme, focus }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }
}

/// Base trait for all UI components
///
/// This is the minimum contract; most components also implement
/// `Scrollable`, `Copyable` or `Interactive`.
pub trait Component {
    /// Identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_between_list_and_logs() {
        let focus = ComponentId::TranslationList;
        assert_eq!(focus.next_focus(), ComponentId::Logs);
        assert_eq!(focus.next_focus().next_focus(), focus);
    }
}
