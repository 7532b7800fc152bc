//! Copy icon with a short acknowledgement pulse
//!
//! Purely cosmetic: after a copy the glyph flips to a check mark and takes the
//! theme's active color until the pulse expires.

use crate::theme::Theme;
use ratatui::style::{Modifier, Style};
use std::time::{Duration, Instant};

/// Glyph shown at rest
pub const COPY_GLYPH: &str = "⧉";
/// Glyph shown while acknowledging a copy
pub const COPIED_GLYPH: &str = "✓";

/// The copy icon of a translation row
#[derive(Debug, Clone)]
pub struct CopyAffordance {
    /// How long the icon stays highlighted
    pulse_duration: Duration,
    /// When the last copy happened
    pulsed_at: Option<Instant>,
}

impl CopyAffordance {
    pub fn new(pulse_duration: Duration) -> Self {
        Self {
            pulse_duration,
            pulsed_at: None,
        }
    }

    pub fn pulse_duration(&self) -> Duration {
        self.pulse_duration
    }

    /// Start (or restart) the acknowledgement pulse
    pub fn pulse(&mut self) {
        self.pulsed_at = Some(Instant::now());
    }

    /// Whether the pulse is still running
    pub fn is_pulsing(&self) -> bool {
        self.pulsed_at
            .is_some_and(|at| at.elapsed() < self.pulse_duration)
    }

    /// Glyph for the current state
    pub fn glyph(&self) -> &'static str {
        if self.is_pulsing() {
            COPIED_GLYPH
        } else {
            COPY_GLYPH
        }
    }

    /// Style for the current state
    pub fn style(&self, theme: &Theme) -> Style {
        if self.is_pulsing() {
            Style::default()
                .fg(theme.icon_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.icon)
        }
    }
}

impl Default for CopyAffordance {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_COPY_PULSE_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        let icon = CopyAffordance::default();
        assert!(!icon.is_pulsing());
        assert_eq!(icon.glyph(), COPY_GLYPH);
    }

    #[test]
    fn pulse_switches_glyph() {
        let mut icon = CopyAffordance::new(Duration::from_secs(60));
        icon.pulse();
        assert!(icon.is_pulsing());
        assert_eq!(icon.glyph(), COPIED_GLYPH);
    }

    #[test]
    fn pulse_expires() {
        let mut icon = CopyAffordance::new(Duration::ZERO);
        icon.pulse();
        assert!(!icon.is_pulsing());
        assert_eq!(icon.glyph(), COPY_GLYPH);
    }
}
