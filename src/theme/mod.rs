// Theme system for the TUI
//
// - TomlTheme: Native format with explicit semantic color definitions
// - Theme: Final resolved theme with all colors ready for use
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/translate-mate/themes/*.toml
// 2. Bundled themes (compiled in, extracted on first run)
// 3. Fallback to hardcoded default

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use crate::config::Config;
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Name of the theme used when nothing is configured
pub const DEFAULT_THEME: &str = "Mate Dark";

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── UI Chrome ───────────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub highlight: Color, // Maps to border_focused
    pub title: Color,
    pub status_bar: Color,
    pub muted: Color,
    pub border_type: BorderType,

    // ─── Translation Row ─────────────────────────────────────
    pub card: Color,
    pub card_border: Color,
    pub link: Color,
    pub label: Color,
    pub source: Color,
    pub icon: Color,
    pub icon_active: Color,

    // ─── Log Levels ──────────────────────────────────────────
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Theme {
    /// Load theme by name with custom configuration
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::load_toml(name, config) {
            return theme;
        }

        tracing::warn!("Theme {:?} not found, using built-in fallback", name);
        Self::hardcoded_default(config)
    }

    /// Load from TOML theme file or bundled theme
    fn load_toml(name: &str, config: &ThemeConfig) -> Option<Self> {
        let normalized = name.replace(' ', "_");

        // External files win so users can override bundled themes
        if let Some(themes_dir) = Self::themes_dir() {
            for candidate in [name, normalized.as_str()] {
                let path = themes_dir.join(format!("{}.toml", candidate));
                if !path.exists() {
                    continue;
                }
                match std::fs::read_to_string(&path).map(|c| TomlTheme::from_str(&c)) {
                    Ok(Ok(toml_theme)) => return Some(Self::from_toml(toml_theme, config)),
                    Ok(Err(e)) => {
                        tracing::warn!("Ignoring invalid theme {}: {}", path.display(), e)
                    }
                    Err(e) => tracing::warn!("Cannot read theme {}: {}", path.display(), e),
                }
            }
        }

        let filename = format!("{}.toml", normalized);
        bundled::BUNDLED_THEMES
            .iter()
            .find(|t| t.filename.eq_ignore_ascii_case(&filename))
            .and_then(|t| TomlTheme::from_str(t.content).ok())
            .map(|toml_theme| Self::from_toml(toml_theme, config))
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        Config::config_dir().map(|dir| dir.join("themes"))
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&String>) -> BorderType {
        match value.map(|s| s.as_str()) {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let parse = TomlTheme::parse_color;

        let background = if config.use_theme_background {
            parse(&toml.ui.background)
        } else {
            Color::Reset
        };
        let foreground = parse(&toml.ui.foreground);
        let muted = toml
            .ui
            .muted
            .as_ref()
            .map(|m| parse(m))
            .unwrap_or_else(|| parse(&toml.ui.border));

        let (log_error, log_warn, log_info, log_debug) = match &toml.logs {
            Some(logs) => (
                parse(&logs.error),
                parse(&logs.warn),
                parse(&logs.info),
                parse(&logs.debug),
            ),
            None => (Color::Red, Color::Yellow, foreground, muted),
        };

        Self {
            name: toml.meta.name.clone(),

            background,
            foreground,
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),
            title: parse(&toml.ui.title),
            status_bar: parse(&toml.ui.status_bar),
            muted,
            border_type: Self::parse_border_type(toml.ui.border_type.as_ref()),

            card: if config.use_theme_background {
                parse(&toml.row.card)
            } else {
                Color::Reset
            },
            card_border: parse(&toml.row.card_border),
            link: parse(&toml.row.link),
            label: parse(&toml.row.label),
            source: parse(&toml.row.source),
            icon: parse(&toml.row.icon),
            icon_active: parse(&toml.row.icon_active),

            log_error,
            log_warn,
            log_info,
            log_debug,
        }
    }

    /// Last-resort theme when nothing can be loaded
    pub(crate) fn hardcoded_default(config: &ThemeConfig) -> Self {
        let (background, card) = if config.use_theme_background {
            (Color::Rgb(16, 17, 20), Color::Rgb(28, 28, 30))
        } else {
            (Color::Reset, Color::Reset)
        };

        Self {
            name: "Mate Dark (Fallback)".to_string(),

            background,
            foreground: Color::Rgb(230, 230, 235),
            border: Color::Rgb(58, 59, 64),
            highlight: Color::Rgb(10, 132, 255),
            title: Color::Rgb(10, 132, 255),
            status_bar: Color::Rgb(142, 142, 147),
            muted: Color::Rgb(142, 142, 147),
            border_type: BorderType::Rounded,

            card,
            card_border: Color::Rgb(58, 58, 60),
            link: Color::Rgb(10, 132, 255),
            label: Color::Rgb(242, 242, 247),
            source: Color::Rgb(142, 142, 147),
            icon: Color::Rgb(230, 230, 235),
            icon_active: Color::Rgb(48, 209, 88),

            log_error: Color::Rgb(255, 69, 58),
            log_warn: Color::Rgb(255, 214, 10),
            log_info: Color::Rgb(230, 230, 235),
            log_debug: Color::Rgb(142, 142, 147),
        }
    }

    /// List all available theme names (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes = bundled::list_bundled_themes();

        if let Some(themes_dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(themes_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            // Convert filename format (underscore) to display format (space)
                            let display_name = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                                themes.push(display_name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

/// Extract bundled themes to the config directory on first run
///
/// Existing files are never overwritten so user edits survive upgrades.
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundled_theme_parses() {
        for theme in bundled::BUNDLED_THEMES {
            let parsed = TomlTheme::from_str(theme.content);
            assert!(
                parsed.is_ok(),
                "{} failed to parse: {:?}",
                theme.filename,
                parsed.err()
            );
        }
    }

    #[test]
    fn bundled_names_are_listed_with_spaces() {
        let names = bundled::list_bundled_themes();
        assert!(names.contains(&DEFAULT_THEME.to_string()));
        assert!(names.contains(&"Terminal ANSI".to_string()));
    }

    #[test]
    fn transparent_background_resets_card_and_background() {
        let toml = TomlTheme::from_str(bundled::MATE_DARK).unwrap();
        let theme = Theme::from_toml(
            toml,
            &ThemeConfig {
                use_theme_background: false,
            },
        );
        assert_eq!(theme.background, Color::Reset);
        assert_eq!(theme.card, Color::Reset);
        assert_eq!(theme.link, Color::Rgb(10, 132, 255));
    }

    #[test]
    fn missing_log_colors_fall_back() {
        let toml = TomlTheme::from_str(bundled::TERMINAL_ANSI).unwrap();
        let theme = Theme::from_toml(toml, &ThemeConfig::default());
        assert_eq!(theme.log_error, Color::Red);
        assert_eq!(theme.log_debug, theme.muted);
    }

    #[test]
    fn border_type_parsing() {
        assert_eq!(
            Theme::parse_border_type(Some(&"rounded".to_string())),
            BorderType::Rounded
        );
        assert_eq!(Theme::parse_border_type(None), BorderType::Plain);
    }
}
