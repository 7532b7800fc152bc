//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (applied by `cli`)
//! 2. Environment variables
//! 3. Config file (~/.config/translate-mate/config.toml)
//! 4. Built-in defaults (lowest priority)

use crate::theme::DEFAULT_THEME;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;


pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long the copy icon stays highlighted after a copy
pub const DEFAULT_COPY_PULSE_MS: u64 = 600;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme name: "Mate Dark", "Mate Light", "Nord", "Terminal ANSI"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// JSON file with translation records (None = demo records)
    pub records: Option<PathBuf>,

    /// Show the bundled demo records even if a records file is configured
    pub demo_mode: bool,

    /// Copy icon acknowledgement duration in milliseconds
    pub copy_pulse_ms: u64,

    /// Show the system logs panel on startup
    pub show_logs: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            records: None,
            demo_mode: false,
            copy_pulse_ms: DEFAULT_COPY_PULSE_MS,
            show_logs: false,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub records: Option<String>,
    pub copy_pulse_ms: Option<u64>,
    pub show_logs: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Config directory: ~/.config/translate-mate
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("translate-mate"))
    }

    /// Get the config file path: ~/.config/translate-mate/config.toml
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Config::default().to_toml() is the single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse a config file; a missing file means defaults
    ///
    /// A file that exists but cannot be read or parsed is an error: a broken
    /// config should fail fast, not silently fall back to defaults.
    fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed config file with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("TRANSLATE_MATE_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Records file: env > file > none
        let records = env("TRANSLATE_MATE_RECORDS")
            .or(file.records)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        // Demo mode: env only (runtime flag)
        let demo_mode = env("TRANSLATE_MATE_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.demo_mode);

        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(level) = env("TRANSLATE_MATE_LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            theme,
            use_theme_background: file
                .use_theme_background
                .unwrap_or(defaults.use_theme_background),
            records,
            demo_mode,
            copy_pulse_ms: file.copy_pulse_ms.unwrap_or(defaults.copy_pulse_ms),
            show_logs: file.show_logs.unwrap_or(defaults.show_logs),
            logging,
        }
    }
}
