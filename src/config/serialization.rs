//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a value as a TOML basic string
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Render the `records = ...` line (commented out when unset)
    fn records_to_toml(&self) -> String {
        match &self.records {
            Some(path) => format!("records = {}", toml_string(&path.to_string_lossy())),
            None => "# records = \"/path/to/translations.json\"".to_string(),
        }
    }

    /// Serialize the effective configuration as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# translate-mate configuration

# Theme: Mate Dark, Mate Light, Nord, Terminal ANSI
# Custom themes live in ~/.config/translate-mate/themes/
theme = {theme}

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# JSON array of {{ "target", "translation", "sourceText" }} objects
# Without a records file the bundled demo records are shown
{records}

# How long the copy icon stays highlighted after copying (milliseconds)
copy_pulse_ms = {pulse}

# Show the system logs panel on startup (toggle with 'l')
show_logs = {show_logs}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (JSON lines, in addition to the TUI buffer)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            theme = toml_string(&self.theme),
            use_bg = self.use_theme_background,
            records = self.records_to_toml(),
            pulse = self.copy_pulse_ms,
            show_logs = self.show_logs,
            log_level = toml_string(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.to_string_lossy()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_string(&self.logging.file_prefix),
        )
    }
}
