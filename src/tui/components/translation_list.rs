//! Translation list component
//!
//! Owns the records, the selection and an item-based scroll position, and
//! draws the visible records through a small pool of [`TranslationRow`]
//! views. Rows are rebound as the viewport moves instead of being created
//! per record; a row that stays visible keeps its binding (and any running
//! copy pulse).
//!
//! `layout()` must run before `render()` and `click()` each frame: it fixes
//! which records are visible, where each one sits, and which pooled row
//! shows it.

use super::scrollbar::render_scrollbar;
use super::translation_row::{RowHit, TranslationRow};
use crate::records::TranslationRecord;
use crate::tui::clipboard::ClipboardWriter;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Column reserved on the right for the scrollbar
const SCROLLBAR_WIDTH: u16 = 1;

/// What a mouse click on the list did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Landed in a row's copy region: selected the record and copied it
    Copied(usize),
    /// Landed elsewhere on a row: selected the record
    Selected(usize),
    /// Landed outside every visible row
    Outside,
}

/// A reusable row view and the record it currently shows
#[derive(Debug)]
struct PooledRow {
    row: TranslationRow,
    bound: Option<usize>,
}

/// Where a visible record is drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    record: usize,
    slot: usize,
    /// Full card area; may extend past the viewport bottom
    area: Rect,
}

/// Scrolling list of translation cards
#[derive(Debug)]
pub struct TranslationList {
    records: Vec<TranslationRecord>,
    selected: Option<usize>,
    scroll: ScrollState,
    pool: Vec<PooledRow>,
    placements: Vec<Placement>,
    /// Area rows were laid out in by the last `layout()`
    viewport: Rect,
    pulse_duration: Duration,
}

impl TranslationList {
    pub fn new(records: Vec<TranslationRecord>, pulse_duration: Duration) -> Self {
        let selected = if records.is_empty() { None } else { Some(0) };
        Self {
            records,
            selected,
            scroll: ScrollState::manual(),
            pool: Vec::new(),
            placements: Vec::new(),
            viewport: Rect::default(),
            pulse_duration,
        }
    }

    /// Replace the records, keeping the selection in range
    pub fn set_records(&mut self, records: Vec<TranslationRecord>) {
        self.records = records;
        self.selected = match (self.selected, self.records.len()) {
            (_, 0) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
            (None, _) => Some(0),
        };

        // Indices now refer to different data
        for pooled in &mut self.pool {
            pooled.bound = None;
        }
        self.placements.clear();
        self.scroll
            .update_dimensions(self.records.len(), self.scroll.viewport());

        tracing::debug!("Showing {} translation records", self.records.len());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lay out the visible rows inside `area`
    ///
    /// Scrolls as needed to keep the selection fully visible, then walks
    /// records from the scroll offset until the area is full. The last row
    /// is clipped at the bottom edge when it does not fit.
    pub fn layout(&mut self, area: Rect) {
        self.viewport = Rect {
            width: area.width.saturating_sub(SCROLLBAR_WIDTH),
            ..area
        };
        self.placements.clear();

        if self.records.is_empty() || self.viewport.is_empty() {
            self.scroll.update_dimensions(self.records.len(), 0);
            return;
        }

        let width = self.viewport.width;
        self.keep_selection_visible(width);

        let mut visible = Vec::new();
        let mut fully_visible = 0;
        let mut y = self.viewport.y;
        for index in self.scroll.offset()..self.records.len() {
            if y >= self.viewport.bottom() {
                break;
            }
            let height = self.measure(index, width);
            let rect = Rect {
                x: self.viewport.x,
                y,
                width,
                height,
            };
            if rect.bottom() <= self.viewport.bottom() {
                fully_visible += 1;
            }
            visible.push((index, rect));
            y = y.saturating_add(height);
        }

        self.scroll
            .update_dimensions(self.records.len(), fully_visible.max(1));
        self.assign_slots(visible);
    }

    /// Pull the scroll offset so the selected row fits the viewport
    fn keep_selection_visible(&mut self, width: u16) {
        let Some(selected) = self.selected else {
            return;
        };

        let mut offset = self.scroll.offset().min(selected);
        while offset < selected
            && self.span_height(offset, selected, width) > u32::from(self.viewport.height)
        {
            offset += 1;
        }
        self.scroll.scroll_to(offset);
    }

    /// Combined height of records `first..=last`
    fn span_height(&self, first: usize, last: usize, width: u16) -> u32 {
        (first..=last)
            .map(|index| u32::from(self.measure(index, width)))
            .sum()
    }

    /// Height of a record's card at `width`
    fn measure(&self, index: usize, width: u16) -> u16 {
        if let Some(pooled) = self.pool.iter().find(|p| p.bound == Some(index)) {
            return pooled.row.height_for_width(width);
        }
        let mut row = TranslationRow::new(self.pulse_duration);
        row.bind(&self.records[index]);
        row.height_for_width(width)
    }

    /// Hand each visible record a pooled row, rebinding only when needed
    fn assign_slots(&mut self, visible: Vec<(usize, Rect)>) {
        let mut claimed = vec![false; self.pool.len()];
        let mut unbound = Vec::new();

        // Rows already showing a visible record keep it
        for (record, area) in visible {
            let reused = (0..self.pool.len())
                .find(|&slot| !claimed[slot] && self.pool[slot].bound == Some(record));
            match reused {
                Some(slot) => {
                    claimed[slot] = true;
                    self.placements.push(Placement { record, slot, area });
                }
                None => unbound.push((record, area)),
            }
        }

        for (record, area) in unbound {
            let slot = match (0..self.pool.len()).find(|&slot| !claimed[slot]) {
                Some(slot) => slot,
                None => {
                    self.pool.push(PooledRow {
                        row: TranslationRow::new(self.pulse_duration),
                        bound: None,
                    });
                    claimed.push(false);
                    self.pool.len() - 1
                }
            };
            claimed[slot] = true;

            let pooled = &mut self.pool[slot];
            pooled.row.bind(&self.records[record]);
            pooled.bound = Some(record);
            tracing::trace!("Row slot {} bound to record {}", slot, record);

            self.placements.push(Placement { record, slot, area });
        }

        self.placements.sort_by_key(|p| p.record);
    }

    /// Record indices visible after the last layout, top to bottom
    #[cfg(test)]
    pub fn visible_records(&self) -> Vec<usize> {
        self.placements.iter().map(|p| p.record).collect()
    }

    /// Number of row views allocated so far
    #[cfg(test)]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// The row view currently showing `record`, if it is visible
    #[cfg(test)]
    pub fn row_for(&self, record: usize) -> Option<&TranslationRow> {
        self.placement_for(record).map(|p| &self.pool[p.slot].row)
    }

    fn placement_for(&self, record: usize) -> Option<Placement> {
        self.placements.iter().copied().find(|p| p.record == record)
    }

    /// Copy the selected record's translation; false when nothing is selected
    pub fn copy_selected(&mut self, clipboard: &dyn ClipboardWriter) -> bool {
        let Some(selected) = self.selected else {
            return false;
        };

        match self.placement_for(selected) {
            Some(placement) => self.pool[placement.slot].row.activate_copy(clipboard),
            None => {
                // Not laid out yet (no frame drawn); copy without the pulse
                let mut row = TranslationRow::new(self.pulse_duration);
                row.bind(&self.records[selected]);
                row.activate_copy(clipboard);
            }
        }
        true
    }

    /// Route a left click at (column, row)
    pub fn click(
        &mut self,
        column: u16,
        row: u16,
        clipboard: &dyn ClipboardWriter,
    ) -> ClickOutcome {
        let viewport = self.viewport;
        let hit = self.placements.iter().copied().find_map(|placement| {
            let visible = placement.area.intersection(viewport);
            if !visible.contains((column, row).into()) {
                return None;
            }
            let layout = self.pool[placement.slot].row.layout(placement.area);
            layout.hit(column, row).map(|hit| (placement, hit))
        });

        match hit {
            Some((placement, RowHit::CopyRegion)) => {
                self.select(placement.record);
                self.pool[placement.slot].row.activate_copy(clipboard);
                ClickOutcome::Copied(placement.record)
            }
            Some((placement, RowHit::Body)) => {
                self.select(placement.record);
                ClickOutcome::Selected(placement.record)
            }
            None => ClickOutcome::Outside,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for TranslationList {
    fn id(&self) -> ComponentId {
        ComponentId::TranslationList
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        if self.is_empty() {
            let empty = Paragraph::new("No translations to show")
                .alignment(Alignment::Center)
                .style(Style::default().fg(ctx.theme.muted));
            let middle = Rect {
                y: area.y + area.height / 2,
                height: area.height.min(1),
                ..area
            };
            f.render_widget(empty, middle);
            return;
        }

        let focused = ctx.is_focused(self.id());
        let buf = f.buffer_mut();
        for placement in &self.placements {
            let selected = focused && self.selected == Some(placement.record);
            self.pool[placement.slot].row.render_into(
                buf,
                placement.area,
                self.viewport,
                ctx.theme,
                selected,
            );
        }

        render_scrollbar(f, area, &self.scroll);
    }
}

impl Scrollable for TranslationList {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for TranslationList {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        if self.records.is_empty() {
            return;
        }
        let index = index.min(self.records.len() - 1);
        self.selected = Some(index);

        // Scrolling down is settled by the next layout, which knows row heights
        if index < self.scroll.offset() {
            self.scroll.scroll_to(index);
        }
    }

    fn item_count(&self) -> usize {
        self.records.len()
    }
}

impl Copyable for TranslationList {
    fn copy_text(&self) -> Option<String> {
        self.selected
            .and_then(|idx| self.records.get(idx))
            .map(|record| record.translation.clone())
    }

    fn copy_description(&self) -> String {
        self.selected
            .and_then(|idx| self.records.get(idx))
            .map(|record| format!("{} translation", record.target))
            .unwrap_or_else(|| "nothing".to_string())
    }
}

impl Interactive for TranslationList {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let page = self.scroll.page();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::PageUp => {
                let target = self.selected.unwrap_or(0).saturating_sub(page);
                self.select(target);
            }
            KeyCode::PageDown => {
                let target = self.selected.map_or(0, |idx| idx + page);
                self.select(target);
            }
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  y:copy  click ⧉:copy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemeConfig};
    use crate::tui::clipboard::MemoryClipboard;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    /// Records that each fit on one line per field at the test width
    fn records(count: usize) -> Vec<TranslationRecord> {
        (0..count)
            .map(|i| {
                TranslationRecord::new(
                    format!("Lang {i}"),
                    format!("Translation {i}"),
                    format!("Source {i}"),
                )
            })
            .collect()
    }

    /// 41 columns leaves a 40 column row; every card is 6 rows tall
    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 41,
        height: 14,
    };

    fn list(count: usize) -> TranslationList {
        let mut list = TranslationList::new(records(count), Duration::from_secs(60));
        list.layout(AREA);
        list
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn last_row_is_clipped_at_viewport_bottom() {
        let list = list(10);

        assert_eq!(list.visible_records(), vec![0, 1, 2]);
        let last = list.placement_for(2).unwrap();
        assert_eq!(last.area.y, 12);
        assert!(last.area.bottom() > AREA.bottom());
        // Only fully visible rows count toward paging
        assert_eq!(list.scroll.page(), 2);
    }

    #[test]
    fn selecting_below_viewport_scrolls_until_fully_visible() {
        let mut list = list(10);

        list.select(2);
        list.layout(AREA);

        assert_eq!(list.scroll_offset(), 1);
        assert_eq!(list.visible_records(), vec![1, 2, 3]);
    }

    #[test]
    fn pool_rebinds_rows_when_scrolling() {
        let mut list = list(10);
        assert_eq!(list.pool_size(), 3);

        list.select_last();
        list.layout(AREA);

        assert_eq!(list.visible_records(), vec![8, 9]);
        assert_eq!(list.pool_size(), 3);
        assert_eq!(list.row_for(9).unwrap().title(), "Lang 9");
        assert_eq!(list.row_for(8).unwrap().translation(), "Translation 8");
        assert!(list.row_for(0).is_none());
    }

    #[test]
    fn rows_that_stay_visible_keep_their_binding() {
        let mut list = list(10);
        let clipboard = MemoryClipboard::new();

        // Pulse record 1, then scroll one row; record 1 stays on screen
        list.select(1);
        list.copy_selected(&clipboard);
        list.select(2);
        list.layout(AREA);

        assert!(list.row_for(1).unwrap().is_pulsing());
    }

    #[test]
    fn scrolling_up_follows_selection() {
        let mut list = list(10);
        list.select_last();
        list.layout(AREA);

        list.select_first();
        list.layout(AREA);

        assert_eq!(list.scroll_offset(), 0);
        assert_eq!(list.visible_records(), vec![0, 1, 2]);
    }

    #[test]
    fn copy_selected_writes_translation() {
        let mut list = list(3);
        let clipboard = MemoryClipboard::new();

        list.select_next();
        assert!(list.copy_selected(&clipboard));

        assert_eq!(clipboard.contents().as_deref(), Some("Translation 1"));
        assert!(list.row_for(1).unwrap().is_pulsing());
    }

    #[test]
    fn copy_before_first_layout_still_copies() {
        let mut list = TranslationList::new(records(2), Duration::from_secs(60));
        let clipboard = MemoryClipboard::new();

        assert!(list.copy_selected(&clipboard));
        assert_eq!(clipboard.contents().as_deref(), Some("Translation 0"));
    }

    #[test]
    fn click_in_tap_region_copies() {
        let mut list = list(3);
        let clipboard = MemoryClipboard::new();
        let placement = list.placement_for(1).unwrap();
        let icon = list.row_for(1).unwrap().layout(placement.area).icon;

        let outcome = list.click(icon.x, icon.y, &clipboard);

        assert_eq!(outcome, ClickOutcome::Copied(1));
        assert_eq!(list.selected_index(), Some(1));
        assert_eq!(clipboard.contents().as_deref(), Some("Translation 1"));
    }

    #[test]
    fn click_elsewhere_only_selects() {
        let mut list = list(3);
        let clipboard = MemoryClipboard::new();
        let placement = list.placement_for(1).unwrap();
        let translation = list.row_for(1).unwrap().layout(placement.area).translation;

        let outcome = list.click(translation.x, translation.y, &clipboard);

        assert_eq!(outcome, ClickOutcome::Selected(1));
        assert_eq!(list.selected_index(), Some(1));
        assert_eq!(clipboard.writes(), 0);
    }

    #[test]
    fn click_below_clipped_row_misses() {
        let mut list = list(10);
        let clipboard = MemoryClipboard::new();

        assert_eq!(list.click(5, AREA.bottom() + 2, &clipboard), ClickOutcome::Outside);
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn empty_list_is_inert() {
        let mut list = list(0);
        let clipboard = MemoryClipboard::new();

        list.select_next();
        assert_eq!(list.selected_index(), None);
        assert!(!list.copy_selected(&clipboard));
        assert_eq!(list.click(3, 3, &clipboard), ClickOutcome::Outside);
        assert_eq!(list.copy_text(), None);
    }

    #[test]
    fn set_records_clamps_selection_and_unbinds_rows() {
        let mut list = list(10);
        list.select(9);

        list.set_records(records(4));
        assert_eq!(list.selected_index(), Some(3));
        assert!(list.visible_records().is_empty());

        list.set_records(vec![TranslationRecord::new("German", "Hallo", "Hello")]);
        list.layout(AREA);
        assert_eq!(list.row_for(0).unwrap().title(), "German");

        list.set_records(Vec::new());
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn keys_navigate_selection() {
        let mut list = list(10);

        assert_eq!(list.handle_key(key(KeyCode::Char('j'))), Handled::Yes);
        assert_eq!(list.selected_index(), Some(1));
        list.handle_key(key(KeyCode::End));
        assert_eq!(list.selected_index(), Some(9));
        list.handle_key(key(KeyCode::PageUp));
        assert_eq!(list.selected_index(), Some(7));
        list.handle_key(key(KeyCode::Char('g')));
        assert_eq!(list.selected_index(), Some(0));
        list.handle_key(key(KeyCode::Up));
        assert_eq!(list.selected_index(), Some(0));
        assert_eq!(list.handle_key(key(KeyCode::Char('x'))), Handled::No);
    }

    #[test]
    fn renders_visible_rows() {
        let theme = Theme::hardcoded_default(&ThemeConfig::default());
        let mut list = TranslationList::new(
            vec![TranslationRecord::new("French", "Bonjour", "Hello")],
            Duration::from_secs(1),
        );
        let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();

        terminal
            .draw(|f| {
                list.layout(f.area());
                let ctx = RenderContext::new(&theme, ComponentId::TranslationList);
                list.render(f, f.area(), &ctx);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = (0..AREA.height)
            .flat_map(|y| (0..AREA.width).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("French"));
        assert!(text.contains("Bonjour"));
        assert!(text.contains("Hello"));
    }

    #[test]
    fn record_taller_than_u16_range_still_lays_out() {
        let theme = Theme::hardcoded_default(&ThemeConfig::default());
        let mut list = TranslationList::new(
            vec![
                TranslationRecord::new("French", "a\n".repeat(70_000), "Hello"),
                TranslationRecord::new("German", "Hallo", "Hello"),
            ],
            Duration::from_secs(1),
        );
        let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
        let mut draw = |list: &mut TranslationList| {
            terminal
                .draw(|f| {
                    list.layout(f.area());
                    let ctx = RenderContext::new(&theme, ComponentId::TranslationList);
                    list.render(f, f.area(), &ctx);
                })
                .unwrap();
        };

        draw(&mut list);
        assert_eq!(list.visible_records(), vec![0]);

        list.handle_key(key(KeyCode::Down));
        draw(&mut list);
        assert_eq!(list.visible_records(), vec![1]);
    }

    #[test]
    fn narrow_viewport_clips_cards_instead_of_spilling() {
        let mut list = TranslationList::new(records(2), Duration::from_secs(60));
        list.layout(Rect::new(0, 0, 4, 20));

        let placement = list.placement_for(0).unwrap();
        assert_eq!(placement.area.width, 3);
        // Clicks right of the viewport never reach the wider card
        let clipboard = MemoryClipboard::new();
        assert_eq!(list.click(5, 1, &clipboard), ClickOutcome::Outside);
        assert_eq!(clipboard.contents(), None);
    }
}
