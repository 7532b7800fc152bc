// translate-mate - terminal translation browser
//
// Shows translation records as cards (target language, translated text,
// source text) and copies the translated text to the clipboard on demand.
//
// Architecture:
// - Records: JSON file or bundled demo set
// - Config: env > file > defaults, CLI flags on top
// - Logging: tracing into an in-memory buffer (shown in the TUI) plus
//   optional rotating JSON files
// - TUI (ratatui): synchronous event loop, list of reusable row views

mod cli;
mod config;
mod demo;
mod logging;
mod records;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::{Config, VERSION};
use logging::LogBuffer;
use records::TranslationRecord;
use theme::{Theme, ThemeConfig};
use tui::app::App;
use tui::clipboard::SystemClipboard;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(command) = &cli.command {
        return cli::handle_command(command);
    }

    // Write defaults on first run so users can discover the options
    Config::ensure_config_exists();
    theme::ensure_themes_extracted();

    let mut config = Config::load()?;
    cli.apply(&mut config);

    // The guard must outlive the TUI so file logs flush on exit
    let log_buffer = LogBuffer::new();
    let _log_guard = logging::init(&config.logging, &log_buffer);
    tracing::info!("translate-mate v{} starting", VERSION);

    let (records, source_label) = startup_records(&config)?;
    if records.is_empty() {
        tracing::warn!("No translation records to show");
    }

    let theme = Theme::by_name_with_config(
        &config.theme,
        &ThemeConfig {
            use_theme_background: config.use_theme_background,
        },
    );
    tracing::debug!("Using theme {}", theme.name);

    let mut app = App::new(
        records,
        source_label,
        &config,
        theme,
        log_buffer,
        Box::new(SystemClipboard),
    );
    if let (Some(path), false) = (&config.records, config.demo_mode) {
        app = app.with_records_path(path.clone());
    }
    tui::run_tui(app)
}

/// Records to show and a label describing where they came from
///
/// Demo mode wins over a configured file; with neither, the demo set is used.
fn startup_records(config: &Config) -> Result<(Vec<TranslationRecord>, String)> {
    match &config.records {
        Some(path) if !config.demo_mode => {
            let records = records::load_records(path)?;
            let label = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok((records, label))
        }
        _ => Ok((demo::demo_records(), "demo".to_string())),
    }
}
