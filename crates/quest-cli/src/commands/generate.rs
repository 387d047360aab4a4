//! Generate command
//!
//! Generate a worksheet and export it in the chosen format.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing::info;

use quest_core::config::Config;
use quest_core::export::{ExportFormat, ExporterKind};
use quest_core::question::Operator;
use quest_core::worksheet::{export_worksheet, WorksheetSettings};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    /// Padded columns on standard output
    Plain,
    /// Word document with a .doc extension
    Doc,
    /// Word document with a .docx extension
    Docx,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Plain => ExportFormat::Plain,
            ExportFormatArg::Doc => ExportFormat::Doc,
            ExportFormatArg::Docx => ExportFormat::Docx,
        }
    }
}

/// Arguments for generating a worksheet
///
/// Options left unset fall back to the configuration file, then to the
/// built-in defaults.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of questions [default: 100]
    #[arg(short, long, value_name = "COUNT")]
    pub questions: Option<usize>,

    /// Questions per row [default: 2]
    #[arg(short, long, value_name = "COUNT", value_parser = parse_columns)]
    pub columns: Option<usize>,

    /// Export format [default: plain]
    #[arg(short, long, value_enum)]
    pub export_format: Option<ExportFormatArg>,

    /// Output file name without extension [default: quest]
    #[arg(short = 'f', long, value_name = "NAME")]
    pub export_name: Option<String>,

    /// Include the computed answer after every question
    #[arg(long, overrides_with = "without_answer")]
    pub with_answer: bool,

    /// Leave answers out
    #[arg(long, overrides_with = "with_answer")]
    pub without_answer: bool,

    /// Operators to draw from, comma separated (+, -, x)
    #[arg(long, value_name = "OPS", value_delimiter = ',')]
    pub operators: Option<Vec<Operator>>,

    /// Seed for a reproducible worksheet
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep questions that do not fill the last row, padding it with blanks
    #[arg(long)]
    pub pad_last_row: bool,

    /// Font of document exports [default: Courier New]
    #[arg(long)]
    pub font: Option<String>,
}

impl GenerateArgs {
    /// Answer flag given on the command line, if any
    fn answer_flag(&self) -> Option<bool> {
        if self.with_answer {
            Some(true)
        } else if self.without_answer {
            Some(false)
        } else {
            None
        }
    }

    /// Override configuration values with the options that were given
    pub fn apply(&self, config: &mut Config) {
        if let Some(questions) = self.questions {
            config.generator.questions = questions;
        }
        if let Some(operators) = &self.operators {
            config.generator.operators = operators.clone();
        }
        if let Some(with_answer) = self.answer_flag() {
            config.generator.with_answer = with_answer;
        }
        if let Some(columns) = self.columns {
            config.export.columns = columns;
        }
        if let Some(format) = self.export_format {
            config.export.format = format.into();
        }
        if let Some(name) = &self.export_name {
            config.export.name = name.clone();
        }
        if self.pad_last_row {
            config.export.pad_last_row = true;
        }
        if let Some(font) = &self.font {
            config.document.font = font.clone();
        }
    }
}

fn parse_columns(value: &str) -> std::result::Result<usize, String> {
    let columns: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if columns == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(columns)
}

/// Execute the generate command
pub fn execute(args: GenerateArgs, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let mut config = super::config::load_config(config_path)?;
    args.apply(&mut config);
    config.validate().context("Invalid options")?;

    let settings = WorksheetSettings::from(&config);
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let summary = export_worksheet(&settings, &mut rng).context(format!(
        "Failed to export {} worksheet",
        settings.format
    ))?;

    if summary.dropped > 0 {
        info!(
            "{} questions did not fill the last row and were left out",
            summary.dropped
        );
    }

    if settings.format.kind() == ExporterKind::Document {
        eprintln!(
            "{} Exported {} questions in {} rows to {}",
            "✓".green(),
            (summary.questions - summary.dropped).to_string().yellow(),
            summary.rows.to_string().yellow(),
            settings.output_path().display().to_string().cyan()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(args: &[&str]) -> GenerateArgs {
        let mut argv = vec!["gen-quest"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_export_format_values() {
        assert!(ExportFormatArg::from_str("plain", true).is_ok());
        assert!(ExportFormatArg::from_str("doc", true).is_ok());
        assert!(ExportFormatArg::from_str("docx", true).is_ok());
        assert!(ExportFormatArg::from_str("pdf", true).is_err());
    }

    #[test]
    fn test_unset_options_keep_config() {
        let mut config = Config::default();
        config.export.columns = 5;
        parse(&[]).apply(&mut config);
        assert_eq!(config, {
            let mut expected = Config::default();
            expected.export.columns = 5;
            expected
        });
    }

    #[test]
    fn test_options_override_config() {
        let mut config = Config::default();
        parse(&[
            "-q", "12", "-c", "3", "-e", "docx", "-f", "week", "--with-answer", "--operators",
            "+,x", "--pad-last-row", "--font", "Consolas",
        ])
        .apply(&mut config);

        assert_eq!(config.generator.questions, 12);
        assert_eq!(config.generator.operators, vec![Operator::Add, Operator::Multiply]);
        assert!(config.generator.with_answer);
        assert_eq!(config.export.columns, 3);
        assert_eq!(config.export.format, ExportFormat::Docx);
        assert_eq!(config.export.name, "week");
        assert!(config.export.pad_last_row);
        assert_eq!(config.document.font, "Consolas");
    }

    #[test]
    fn test_without_answer_overrides_config() {
        let mut config = Config::default();
        config.generator.with_answer = true;
        parse(&["--without-answer"]).apply(&mut config);
        assert!(!config.generator.with_answer);
    }

    #[test]
    fn test_last_answer_flag_wins() {
        let args = parse(&["--without-answer", "--with-answer"]);
        assert_eq!(args.answer_flag(), Some(true));
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert!(TestCli::try_parse_from(["gen-quest", "-c", "0"]).is_err());
        assert_eq!(parse_columns("4"), Ok(4));
    }

    #[test]
    fn test_unknown_operator_rejected() {
        assert!(TestCli::try_parse_from(["gen-quest", "--operators", "/"]).is_err());
    }
}
