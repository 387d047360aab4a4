//! Configuration management for gen-quest

use crate::error::{QuestError, Result};
use crate::export::{DocumentStyle, ExportFormat};
use crate::question::Operator;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "quest.toml";

/// Largest document font size in points
pub const MAX_FONT_SIZE: u32 = 819;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Question generation settings
    pub generator: GeneratorConfig,
    /// Export settings
    pub export: ExportConfig,
    /// Document presentation settings
    pub document: DocumentStyle,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| QuestError::from(e).with_context(format!("Invalid {}", path.display())))?;
        config.validate()?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.export.columns == 0 {
            return Err(QuestError::Config("export.columns must be at least 1".to_string()));
        }
        if self.export.name.trim().is_empty() {
            return Err(QuestError::Config("export.name must not be empty".to_string()));
        }
        if self.generator.operators.is_empty() {
            return Err(QuestError::Config(
                "generator.operators must list at least one operator".to_string(),
            ));
        }
        if self.document.font_size == 0 || self.document.font_size > MAX_FONT_SIZE {
            return Err(QuestError::Config(format!(
                "document.font_size must be between 1 and {}",
                MAX_FONT_SIZE
            )));
        }
        let font = &self.document.font;
        if font.trim().is_empty() || font.chars().any(char::is_control) {
            return Err(QuestError::Config(
                "document.font must be a non-empty name without control characters".to_string(),
            ));
        }
        Ok(())
    }
}

/// Question generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of questions
    pub questions: usize,
    /// Operators to draw from
    pub operators: Vec<Operator>,
    /// Append the computed answer to every question
    pub with_answer: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            questions: 100,
            operators: Operator::default_set(),
            with_answer: false,
        }
    }
}

/// Export-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Questions per row
    pub columns: usize,
    /// Output format
    pub format: ExportFormat,
    /// Output base name, the format's extension is appended
    pub name: String,
    /// Write the trailing partial row padded with empty cells
    pub pad_last_row: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            format: ExportFormat::Plain,
            name: "quest".to_string(),
            pad_last_row: false,
        }
    }
}
