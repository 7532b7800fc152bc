//! Translation row component
//!
//! Renders one [`TranslationRecord`] as a card:
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ French                    ⧉  │  <- title + copy icon (tap region spans
//! │ Bonjour, comment allez-vous  │     from the card top to this line)
//! │ ?                            │  <- translation, wraps full width
//! │                              │
//! │ │  Hello, how are you?       │  <- divider + indented source text
//! ╰──────────────────────────────╯
//! ```
//!
//! The row is a reusable view: the list container rebinds it to whichever
//! record currently occupies its slot. It keeps no link to the record beyond
//! the text copied in by the last [`TranslationRow::bind`].

use super::copy_affordance::CopyAffordance;
use crate::records::TranslationRecord;
use crate::theme::Theme;
use crate::tui::clipboard::ClipboardWriter;
use crate::tui::wrap::wrap_text;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use std::time::Duration;

/// Columns between the card border and the content
const PADDING_X: u16 = 1;
/// Columns between the copy icon and the right edge of the content
const ICON_INSET: u16 = 1;
/// Copy icon width
const ICON_WIDTH: u16 = 1;
/// Columns the tap region extends to the left of the icon
const TAP_LEAD: u16 = 2;
/// Blank lines between the translation and the source block
const SOURCE_GAP: u16 = 1;
/// Columns between the divider and the source text
const SOURCE_INDENT: u16 = 2;
/// Divider glyph (repeated once per source line)
const DIVIDER: &str = "│";
/// Narrowest card: borders, padding, divider, indent and one source column.
/// Narrower areas still get a card this wide, clipped on render.
const MIN_CARD_WIDTH: u16 = 2 + 2 * PADDING_X + 1 + SOURCE_INDENT + 1;

/// What a click inside a row landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    /// The enlarged copy target around the icon
    CopyRegion,
    /// Anywhere else on the card
    Body,
}

/// Computed geometry for a row at a given position and width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    pub card: Rect,
    pub title: Rect,
    pub icon: Rect,
    pub tap_region: Rect,
    pub translation: Rect,
    pub divider: Rect,
    pub source: Rect,
    pub title_lines: Vec<String>,
    pub translation_lines: Vec<String>,
    pub source_lines: Vec<String>,
}

impl RowLayout {
    /// Total rows the card needs, borders included
    pub fn height(&self) -> u16 {
        self.source
            .bottom()
            .saturating_sub(self.card.y)
            .saturating_add(1)
    }

    /// Classify a click at (column, row); `None` when outside the card
    pub fn hit(&self, column: u16, row: u16) -> Option<RowHit> {
        if contains(self.tap_region, column, row) {
            Some(RowHit::CopyRegion)
        } else if contains(self.card, column, row) {
            Some(RowHit::Body)
        } else {
            None
        }
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn line_count(lines: &[String]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX)
}

/// Build a rect without `Rect::new`'s area clamp, which would shrink tall rows
fn region(x: u16, y: u16, width: u16, height: u16) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// A single translation row view
#[derive(Debug, Clone, Default)]
pub struct TranslationRow {
    title: String,
    translation: String,
    source: String,
    copy: CopyAffordance,
}

impl TranslationRow {
    pub fn new(pulse_duration: Duration) -> Self {
        Self {
            title: String::new(),
            translation: String::new(),
            source: String::new(),
            copy: CopyAffordance::new(pulse_duration),
        }
    }

    /// Show `record`, replacing everything previously displayed
    pub fn bind(&mut self, record: &TranslationRecord) {
        self.title.clone_from(&record.target);
        self.translation.clone_from(&record.translation);
        self.source.clone_from(&record.source_text);
        // A pulse belongs to the record it acknowledged
        self.copy = CopyAffordance::new(self.copy.pulse_duration());
    }

    /// Displayed target language
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Displayed translated text
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Displayed source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the copy icon is acknowledging a recent copy
    pub fn is_pulsing(&self) -> bool {
        self.copy.is_pulsing()
    }

    /// Copy the bound translation to `clipboard` and pulse the icon
    ///
    /// Clipboard failures are logged and otherwise ignored; the caller
    /// cannot observe them.
    pub fn activate_copy(&mut self, clipboard: &dyn ClipboardWriter) {
        self.copy.pulse();

        match clipboard.write(&self.translation) {
            Ok(()) => tracing::debug!(
                "Copied {} translation ({} chars)",
                self.title,
                self.translation.chars().count()
            ),
            Err(e) => tracing::warn!("Copy failed: {:#}", e),
        }
    }

    /// Compute region geometry for a card occupying `area` (height is ignored)
    ///
    /// The card is at least `MIN_CARD_WIDTH` wide even when `area` is not.
    /// Rows taller than the u16 range saturate instead of wrapping around.
    pub fn layout(&self, area: Rect) -> RowLayout {
        let width = area.width.max(MIN_CARD_WIDTH);
        let right = area.x.saturating_add(width);
        let inner_x = area.x.saturating_add(1 + PADDING_X);
        let inner_w = width - 2 - 2 * PADDING_X;
        let inner_y = area.y.saturating_add(1);

        let title_w = inner_w - (ICON_INSET + ICON_WIDTH + 1);
        let source_w = inner_w - (1 + SOURCE_INDENT);

        let title_lines = wrap_text(self.title(), title_w as usize);
        let translation_lines = wrap_text(self.translation(), inner_w as usize);
        let source_lines = wrap_text(self.source(), source_w as usize);

        let title = region(inner_x, inner_y, title_w, line_count(&title_lines));

        let icon_x = inner_x
            .saturating_add(inner_w)
            .saturating_sub(ICON_INSET + ICON_WIDTH);
        let icon_y = title.y.saturating_add(title.height.saturating_sub(1) / 2);
        let icon = region(icon_x, icon_y, ICON_WIDTH, 1);

        let translation = region(
            inner_x,
            title.bottom(),
            inner_w,
            line_count(&translation_lines),
        );

        let source_y = translation.bottom().saturating_add(SOURCE_GAP);
        let source_h = line_count(&source_lines);
        let divider = region(inner_x, source_y, 1, source_h);
        let source = region(
            inner_x.saturating_add(1 + SOURCE_INDENT),
            source_y,
            source_w,
            source_h,
        );

        let tap_x = icon_x.saturating_sub(TAP_LEAD).max(area.x);
        let tap_region = region(
            tap_x,
            area.y,
            right.saturating_sub(tap_x),
            translation.y.saturating_sub(area.y),
        );

        let card_height = source
            .bottom()
            .saturating_sub(area.y)
            .saturating_add(1);
        let card = region(area.x, area.y, width, card_height);

        RowLayout {
            card,
            title,
            icon,
            tap_region,
            translation,
            divider,
            source,
            title_lines,
            translation_lines,
            source_lines,
        }
    }

    /// Rows needed to show the bound record at `width` without clipping
    pub fn height_for_width(&self, width: u16) -> u16 {
        self.layout(Rect::new(0, 0, width, 0)).height()
    }

    /// Draw the row into `buf`, touching only cells inside `clip`
    ///
    /// `area` may extend past `clip` (a partially visible last row); the
    /// overflow is simply not drawn.
    pub fn render_into(
        &self,
        buf: &mut Buffer,
        area: Rect,
        clip: Rect,
        theme: &Theme,
        selected: bool,
    ) {
        let clip = clip.intersection(buf.area);
        let layout = self.layout(area);
        let visible_card = layout.card.intersection(clip);
        if visible_card.is_empty() {
            return;
        }

        let border_color = if self.is_pulsing() {
            theme.icon_active
        } else if selected {
            theme.highlight
        } else {
            theme.card_border
        };
        let mut borders = Borders::ALL;
        if visible_card.bottom() < layout.card.bottom() {
            borders.remove(Borders::BOTTOM);
        }
        if visible_card.right() < layout.card.right() {
            borders.remove(Borders::RIGHT);
        }

        Block::default()
            .borders(borders)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.card))
            .render(visible_card, buf);

        let base = Style::default().bg(theme.card);

        draw_lines(
            buf,
            clip,
            layout.title,
            &layout.title_lines,
            base.fg(theme.link).add_modifier(Modifier::BOLD),
        );
        draw_lines(
            buf,
            clip,
            layout.translation,
            &layout.translation_lines,
            base.fg(theme.label),
        );

        let divider_lines = vec![DIVIDER.to_string(); layout.source_lines.len()];
        draw_lines(buf, clip, layout.divider, &divider_lines, base.fg(theme.link));
        draw_lines(
            buf,
            clip,
            layout.source,
            &layout.source_lines,
            base.fg(theme.source),
        );

        draw_lines(
            buf,
            clip,
            layout.icon,
            &[self.copy.glyph().to_string()],
            base.patch(self.copy.style(theme)),
        );
    }
}

/// Write pre-wrapped lines top to bottom inside `region`, clipped to `clip`
fn draw_lines(buf: &mut Buffer, clip: Rect, region: Rect, lines: &[String], style: Style) {
    for (line, y) in lines.iter().zip(region.y..region.bottom()) {
        if y < clip.y || y >= clip.bottom() || region.x >= clip.right() {
            continue;
        }
        let x = region.x.max(clip.x);
        let max_width = region.right().min(clip.right()).saturating_sub(x);
        buf.set_stringn(x, y, line, max_width as usize, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeConfig;
    use crate::tui::clipboard::{MemoryClipboard, UnavailableClipboard};

    fn theme() -> Theme {
        Theme::hardcoded_default(&ThemeConfig::default())
    }

    fn bound(target: &str, translation: &str, source: &str) -> TranslationRow {
        let mut row = TranslationRow::default();
        row.bind(&TranslationRecord::new(target, translation, source));
        row
    }

    /// Render a row at its measured height and return the buffer as text lines
    fn render_lines(row: &TranslationRow, width: u16) -> Vec<String> {
        let height = row.height_for_width(width);
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        row.render_into(&mut buf, area, area, &theme(), false);

        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn bind_shows_record_fields_verbatim() {
        let row = bound("French", "Bonjour", "Hello");

        assert_eq!(row.title(), "French");
        assert_eq!(row.translation(), "Bonjour");
        assert_eq!(row.source(), "Hello");
    }

    #[test]
    fn rebinding_leaves_no_trace_of_previous_record() {
        let mut row = bound("French", "Bonjour", "Hello");
        row.bind(&TranslationRecord::new("German", "Tschüss", "Bye"));

        assert_eq!(row.title(), "German");
        assert_eq!(row.translation(), "Tschüss");
        assert_eq!(row.source(), "Bye");

        let rendered = render_lines(&row, 30).join("\n");
        assert!(!rendered.contains("French"));
        assert!(!rendered.contains("Bonjour"));
        assert!(!rendered.contains("Hello"));
    }

    #[test]
    fn empty_fields_render_empty() {
        let row = bound("", "", "");

        assert_eq!(row.title(), "");
        assert_eq!(row.translation(), "");
        assert_eq!(row.source(), "");

        // Border + title + translation + gap + source + border
        assert_eq!(row.height_for_width(30), 6);
        let lines = render_lines(&row, 30);
        // Only chrome: borders, the icon and the divider
        let text: String = lines[1..5]
            .iter()
            .flat_map(|l| l.chars())
            .filter(|c| !matches!(c, ' ' | '│' | '⧉'))
            .collect();
        assert_eq!(text, "");
    }

    #[test]
    fn copy_writes_translation_not_source_or_target() {
        let mut row = bound("French", "Bonjour", "Hello");
        let clipboard = MemoryClipboard::new();

        row.activate_copy(&clipboard);

        assert_eq!(clipboard.contents().as_deref(), Some("Bonjour"));
        assert!(row.is_pulsing());
    }

    #[test]
    fn copy_uses_latest_binding() {
        let mut row = bound("French", "Bonjour", "Hello");
        row.bind(&TranslationRecord::new("Spanish", "Hola", "Hi"));
        let clipboard = MemoryClipboard::new();

        row.activate_copy(&clipboard);

        assert_eq!(clipboard.contents().as_deref(), Some("Hola"));
    }

    #[test]
    fn copy_of_empty_translation_writes_empty_string() {
        let mut row = bound("Italian", "", "Still empty");
        let clipboard = MemoryClipboard::new();

        row.activate_copy(&clipboard);

        assert_eq!(clipboard.contents().as_deref(), Some(""));
    }

    #[test]
    fn clipboard_failure_is_silent() {
        let mut row = bound("French", "Bonjour", "Hello");

        row.activate_copy(&UnavailableClipboard);

        assert_eq!(row.translation(), "Bonjour");
        assert!(row.is_pulsing());
    }

    #[test]
    fn rebinding_clears_pulse() {
        let mut row = TranslationRow::new(Duration::from_secs(60));
        row.bind(&TranslationRecord::new("French", "Bonjour", "Hello"));
        row.activate_copy(&MemoryClipboard::new());
        assert!(row.is_pulsing());

        row.bind(&TranslationRecord::new("German", "Hallo", "Hello"));
        assert!(!row.is_pulsing());
    }

    #[test]
    fn scenario_french_row_renders_all_regions() {
        let row = bound("French", "Bonjour", "Hello");
        let lines = render_lines(&row, 30);

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('╭'));
        assert!(lines[1].contains("French"));
        assert!(lines[1].contains('⧉'));
        assert!(lines[2].contains("Bonjour"));
        assert_eq!(lines[3].trim_matches(|c| c == '│' || c == ' '), "");
        assert!(lines[4].contains("│  Hello"));
        assert!(lines[5].starts_with('╰'));
    }

    #[test]
    fn long_text_wraps_instead_of_truncating() {
        let translation = "¿Podrías decirme dónde está la estación de tren más cercana?";
        let source = "Could you tell me where the nearest train station is?";
        let row = bound("Spanish", translation, source);

        let width = 24;
        let layout = row.layout(Rect::new(0, 0, width, 0));
        assert!(layout.translation_lines.len() > 1);
        assert!(layout.source_lines.len() > 1);

        let rendered = render_lines(&row, width).join(" ");
        for word in translation.split_whitespace().chain(source.split_whitespace()) {
            assert!(rendered.contains(word), "{word:?} was clipped");
        }
    }

    #[test]
    fn layout_matches_the_card_contract() {
        let row = bound("French", "Bonjour", "Hello");
        let layout = row.layout(Rect::new(2, 5, 30, 0));

        // Title top-left inside border + padding
        assert_eq!((layout.title.x, layout.title.y), (4, 6));
        // Icon at the trailing edge of the title row
        assert_eq!(layout.icon.y, layout.title.y);
        assert_eq!(layout.icon.x, 2 + 30 - 1 - PADDING_X - ICON_INSET - ICON_WIDTH);
        // Translation directly below the title, full content width
        assert_eq!(layout.translation.y, layout.title.bottom());
        assert_eq!(layout.translation.width, 30 - 2 - 2 * PADDING_X);
        // Divider spans exactly the source text
        assert_eq!(layout.divider.y, layout.source.y);
        assert_eq!(layout.divider.height, layout.source.height);
        assert!(layout.source.x > layout.divider.x);
        // Tap region: card top down to the translation, icon to the right edge
        assert_eq!(layout.tap_region.y, 5);
        assert_eq!(layout.tap_region.bottom(), layout.translation.y);
        assert!(layout.tap_region.x < layout.icon.x);
        assert_eq!(layout.tap_region.right(), 32);
    }

    #[test]
    fn title_wraps_clear_of_icon() {
        let row = bound("Chinese (Traditional, Hong Kong)", "你好", "Hello");
        let layout = row.layout(Rect::new(0, 0, 20, 0));

        assert!(layout.title_lines.len() > 1);
        assert!(layout.title.right() <= layout.icon.x);
        // Icon stays vertically centered on the title block
        assert!(layout.icon.y >= layout.title.y && layout.icon.y < layout.title.bottom());
    }

    #[test]
    fn hit_testing_prefers_tap_region() {
        let row = bound("French", "Bonjour", "Hello");
        let layout = row.layout(Rect::new(0, 0, 30, 0));

        assert_eq!(
            layout.hit(layout.icon.x, layout.icon.y),
            Some(RowHit::CopyRegion)
        );
        // Top border above the icon is part of the enlarged target
        assert_eq!(layout.hit(layout.icon.x, 0), Some(RowHit::CopyRegion));
        assert_eq!(
            layout.hit(layout.translation.x, layout.translation.y),
            Some(RowHit::Body)
        );
        assert_eq!(layout.hit(layout.title.x, layout.title.y), Some(RowHit::Body));
        assert_eq!(layout.hit(0, layout.height()), None);
    }

    #[test]
    fn clipped_render_stays_inside_clip() {
        let row = bound("French", "Bonjour", "Hello");
        let area = Rect::new(0, 0, 30, row.height_for_width(30));
        let clip = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 6));

        row.render_into(&mut buf, area, clip, &theme(), false);

        // Nothing below the clip was touched
        for y in 3..6 {
            for x in 0..30 {
                assert_eq!(buf[(x, y)].symbol(), " ");
            }
        }
        // Clipped card has no bottom border
        assert!(!(0..30).any(|x| buf[(x, 2)].symbol() == "╰"));
    }

    #[test]
    fn very_long_text_saturates_instead_of_overflowing() {
        let row = bound("French", &"a\n".repeat(70_000), "Hello");

        assert_eq!(row.height_for_width(30), u16::MAX);
        let layout = row.layout(Rect::new(0, 0, 30, 0));
        assert!(layout.source.y >= layout.translation.y);
        assert_eq!(layout.translation.width, 30 - 2 - 2 * PADDING_X);

        // Only the visible top of the card is drawn
        let clip = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(clip);
        row.render_into(&mut buf, layout.card, clip, &theme(), false);
        assert_eq!(buf[(2, 1)].symbol(), "F");
        assert_eq!(buf[(2, 2)].symbol(), "a");
        assert_eq!(buf[(2, 3)].symbol(), "a");
    }

    #[test]
    fn narrow_cards_keep_content_inside_the_border() {
        let row = bound("French", "Bonjour", "Hello");

        for width in 0..=MIN_CARD_WIDTH + 2 {
            let layout = row.layout(Rect::new(3, 0, width, 0));
            let inner_right = layout.card.right() - 1 - PADDING_X;

            assert!(layout.card.width >= MIN_CARD_WIDTH);
            assert!(layout.title.x > layout.card.x);
            assert!(layout.title.right() <= layout.icon.x);
            assert!(layout.icon.right() <= inner_right);
            assert!(layout.translation.right() <= inner_right);
            assert!(layout.source.right() <= inner_right);
            assert!(layout.source.x > layout.divider.x);
            assert!(layout.tap_region.x >= layout.card.x);
        }
    }

    #[test]
    fn narrow_area_clips_the_card_on_the_right() {
        let row = bound("French", "Bonjour", "Hello");
        let area = Rect::new(0, 0, 5, row.height_for_width(5));
        let mut buf = Buffer::empty(area);

        row.render_into(&mut buf, area, area, &theme(), false);

        assert_eq!(buf[(0, 0)].symbol(), "╭");
        // Title wraps one column at a time in the narrowest card
        assert_eq!(buf[(2, 1)].symbol(), "F");
        assert_eq!(buf[(2, 2)].symbol(), "r");
        assert!((0..area.height).all(|y| buf[(4, y)].symbol() != "╮"));
    }
}
