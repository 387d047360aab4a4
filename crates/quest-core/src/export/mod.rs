//! Export functionality for worksheets
//!
//! This module provides the exporters that persist rows of rendered
//! questions. Each exporter follows the same lifecycle: `open` creates a
//! handle, `write` appends one row, `close` finalizes the output.
//!
//! # Overview
//!
//! - Plain text (columns padded to a fixed line width, written to a stream)
//! - Word-processing document (`.doc`/`.docx`, one table row per row)
//!
//! # Example
//!
//! ```ignore
//! use quest_core::export::{Exporter, PlainExporter};
//!
//! let mut exporter = PlainExporter::stdout();
//! let mut handle = exporter.open(Path::new("unused"), 2)?;
//! exporter.write(&mut handle, &row)?;
//! exporter.close(handle)?;
//! ```

mod document;
mod exporter;
mod package;
mod plain;

pub use document::{Document, DocumentExporter, DocumentHandle, DocumentStyle, Table};
pub use exporter::{ExportFormat, Exporter, ExporterKind};
pub use plain::{column_gap, render_line, PlainExporter, PlainHandle, EXPR_WIDTH, LINE_WIDTH};
