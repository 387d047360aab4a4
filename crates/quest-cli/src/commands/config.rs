//! Config command
//!
//! Manage the gen-quest configuration file.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::{Path, PathBuf};

use quest_core::config::{Config, DEFAULT_CONFIG_FILE};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show_config(config_path),
        ConfigCommand::Init { force } => init_config(config_path, force),
    }
}

fn get_config_path(config_path: Option<&Path>) -> PathBuf {
    config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load the configuration, falling back to defaults when the default file
/// is absent. An explicitly given file must exist.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => {
            Config::load(path).context(format!("Failed to load config {}", path.display()))
        }
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
            .context(format!("Failed to load config {}", DEFAULT_CONFIG_FILE)),
    }
}

fn show_config(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn init_config(config_path: Option<&Path>, force: bool) -> Result<()> {
    use colored::Colorize;

    let path = get_config_path(config_path);

    if path.exists() && !force {
        eprintln!(
            "{} {} already exists. Use --force to overwrite.",
            "⚠".yellow(),
            path.display()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = Config::default().to_toml()?;
    fs::write(&path, content).context(format!("Failed to write {}", path.display()))?;
    eprintln!("{} Created {}", "✓".green(), path.display());

    Ok(())
}
