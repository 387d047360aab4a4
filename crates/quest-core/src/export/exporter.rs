//! Exporter trait and export formats

use crate::error::{QuestError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Trait for worksheet exporters
///
/// The handle returned by [`Exporter::open`] owns whatever output state the
/// exporter needs; it is mutated by every [`Exporter::write`] and consumed
/// by [`Exporter::close`].
pub trait Exporter {
    /// Per-run output state
    type Handle;

    /// Prepare an output with `columns` cells per row
    fn open(&mut self, path: &Path, columns: usize) -> Result<Self::Handle>;

    /// Append one full row
    fn write(&mut self, handle: &mut Self::Handle, row: &[String]) -> Result<()>;

    /// Finalize the output
    fn close(&mut self, handle: Self::Handle) -> Result<()>;

    /// Get the exporter name
    fn format_name(&self) -> &str;
}

/// The exporter implementations an [`ExportFormat`] can select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExporterKind {
    /// Columnar text on a stream
    Plain,
    /// Table in a word-processing document
    Document,
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExportFormat {
    /// Plain text on standard output
    #[default]
    Plain,
    /// Word document with a `.doc` extension
    Doc,
    /// Word document with a `.docx` extension
    Docx,
}

impl ExportFormat {
    /// Every supported format
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Plain, ExportFormat::Doc, ExportFormat::Docx];

    /// Format key, also used as the file extension
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Plain => "plain",
            ExportFormat::Doc => "doc",
            ExportFormat::Docx => "docx",
        }
    }

    /// Exporter that handles this format
    pub fn kind(&self) -> ExporterKind {
        match self {
            ExportFormat::Plain => ExporterKind::Plain,
            ExportFormat::Doc | ExportFormat::Docx => ExporterKind::Document,
        }
    }

    /// Output file name for a base name, e.g. `quest.docx`
    pub fn file_name(&self, base: &str) -> String {
        format!("{}.{}", base, self.name())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = QuestError;

    fn from_str(s: &str) -> Result<Self> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| QuestError::UnknownFormat(s.to_string()))
    }
}

impl TryFrom<String> for ExportFormat {
    type Error = QuestError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ExportFormat> for String {
    fn from(format: ExportFormat) -> Self {
        format.name().to_string()
    }
}
