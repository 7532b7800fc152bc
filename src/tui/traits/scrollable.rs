//! Scrollable and selectable component traits

use super::Component;
use crate::tui::scroll::ScrollState;

/// Trait for components with scrollable content
///
/// Components own their `ScrollState` and expose it here; the navigation
/// methods delegate to it by default.
pub trait Scrollable: Component {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    /// Current scroll offset
    fn scroll_offset(&self) -> usize {
        self.scroll_state().offset()
    }
}

/// Components whose scrollable content has selectable items
pub trait Selectable: Scrollable {
    fn selected_index(&self) -> Option<usize>;

    /// Select `index` (implementations clamp to the item count)
    fn select(&mut self, index: usize);

    fn item_count(&self) -> usize;

    fn select_next(&mut self) {
        match self.selected_index() {
            Some(current) if current + 1 < self.item_count() => self.select(current + 1),
            Some(_) => {}
            None => self.select_first(),
        }
    }

    fn select_previous(&mut self) {
        match self.selected_index() {
            Some(current) if current > 0 => self.select(current - 1),
            Some(_) => {}
            None => self.select_last(),
        }
    }

    fn select_first(&mut self) {
        if self.item_count() > 0 {
            self.select(0);
        }
    }

    fn select_last(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.select(count - 1);
        }
    }
}
