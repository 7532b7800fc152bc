// CLI module - command-line argument parsing and handlers
//
// Flags override the layered configuration for one run. Subcommands manage
// the config file:
// - config --show: Display effective configuration
// - config --path: Print the config file path
// - config --reset: Regenerate config file with defaults
// - config --themes: List available themes

use crate::config::{Config, VERSION};
use crate::theme::Theme;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// translate-mate - browse translations and copy them with one keystroke
#[derive(Parser, Debug)]
#[command(name = "translate-mate")]
#[command(version = VERSION)]
#[command(about = "Browse translations in the terminal and copy them to the clipboard", long_about = None)]
pub struct Cli {
    /// JSON file with translation records
    #[arg(long, value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// Theme name (see `translate-mate config --themes`)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Show the bundled demo records
    #[arg(long)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// List available themes
        #[arg(long)]
        themes: bool,
    },
}

impl Cli {
    /// Apply flag overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(records) = &self.records {
            config.records = Some(records.clone());
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if self.demo {
            config.demo_mode = true;
        }
    }
}

/// Run a subcommand
pub fn handle_command(command: &Commands) -> Result<()> {
    match *command {
        Commands::Config {
            show,
            reset,
            path,
            themes,
        } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show()
            } else if reset {
                handle_config_reset()
            } else if themes {
                handle_config_themes();
                Ok(())
            } else {
                println!("Usage: translate-mate config [--show|--path|--reset|--themes]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
                println!("  --themes  List available themes");
                Ok(())
            }
        }
    }
}

fn config_path() -> Result<PathBuf> {
    Config::config_path().context("Could not determine config path (no home directory)")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    let path = config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush prompt")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_themes() {
    for name in Theme::list_available() {
        println!("{}", name);
    }
}
