//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/translate-mate/themes/ on first run.
//! Users can then modify them freely.

mod mate_dark;
mod mate_light;
mod nord;
mod terminal_ansi;

pub use mate_dark::THEME as MATE_DARK;
pub use mate_light::THEME as MATE_LIGHT;
pub use nord::THEME as NORD;
pub use terminal_ansi::THEME as TERMINAL_ANSI;

/// Bundled theme: name and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Mate_Dark.toml",
        content: MATE_DARK,
    },
    BundledTheme {
        filename: "Mate_Light.toml",
        content: MATE_LIGHT,
    },
    BundledTheme {
        filename: "Nord.toml",
        content: NORD,
    },
    BundledTheme {
        filename: "Terminal_ANSI.toml",
        content: TERMINAL_ANSI,
    },
];

/// Display names of bundled themes ("Mate_Dark.toml" -> "Mate Dark")
pub fn list_bundled_themes() -> Vec<String> {
    BUNDLED_THEMES
        .iter()
        .map(|t| t.filename.trim_end_matches(".toml").replace('_', " "))
        .collect()
}
