//! Word-processing document exporter

use super::exporter::Exporter;
use super::package;
use crate::error::{QuestError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Presentation settings of the document's default paragraph style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyle {
    /// Font family of the `Normal` style
    pub font: String,
    /// Font size in points
    pub font_size: u32,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            font: "Courier New".to_string(),
            font_size: 12,
        }
    }
}

/// Table with a fixed number of columns and a growing list of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: usize,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row of empty cells and return it for filling in
    pub fn add_row(&mut self) -> &mut [String] {
        self.rows.push(vec![String::new(); self.columns]);
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All rows in insertion order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// In-memory document: a default style and a body of tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    style: DocumentStyle,
    tables: Vec<Table>,
}

impl Document {
    /// Create an empty document
    pub fn new(style: DocumentStyle) -> Self {
        Self {
            style,
            tables: Vec::new(),
        }
    }

    /// Append a table to the body
    pub fn push_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Default paragraph style
    pub fn style(&self) -> &DocumentStyle {
        &self.style
    }

    /// Tables in body order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Serialize the document to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        package::save(self, path)
    }
}

/// Handle of an open document export
#[derive(Debug)]
pub struct DocumentHandle {
    document: Document,
    table: Table,
    path: PathBuf,
}

impl DocumentHandle {
    /// Table receiving the rows
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Destination written on close
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Exporter collecting rows into a document table
///
/// Nothing reaches the disk until [`Exporter::close`]; dropping the handle
/// without closing it discards every written row.
#[derive(Debug, Clone, Default)]
pub struct DocumentExporter {
    style: DocumentStyle,
}

impl DocumentExporter {
    /// Create a document exporter with the given style
    pub fn new(style: DocumentStyle) -> Self {
        Self { style }
    }
}

impl Exporter for DocumentExporter {
    type Handle = DocumentHandle;

    fn open(&mut self, path: &Path, columns: usize) -> Result<DocumentHandle> {
        if columns == 0 {
            return Err(QuestError::Validation(
                "columns must be at least 1".to_string(),
            ));
        }

        debug!("Opened document with {} columns for {:?}", columns, path);
        Ok(DocumentHandle {
            document: Document::new(self.style.clone()),
            table: Table::new(columns),
            path: path.to_path_buf(),
        })
    }

    fn write(&mut self, handle: &mut DocumentHandle, row: &[String]) -> Result<()> {
        if row.len() != handle.table.columns() {
            return Err(QuestError::RowWidth {
                expected: handle.table.columns(),
                actual: row.len(),
            });
        }

        let cells = handle.table.add_row();
        for (cell, text) in cells.iter_mut().zip(row) {
            cell.clone_from(text);
        }
        debug!("Added table row {}", handle.table.row_count());
        Ok(())
    }

    fn close(&mut self, handle: DocumentHandle) -> Result<()> {
        let DocumentHandle {
            mut document,
            table,
            path,
        } = handle;

        let rows = table.row_count();
        document.push_table(table);
        document
            .save(&path)
            .map_err(|e| e.with_context(format!("Failed to save {}", path.display())))?;

        info!("Saved document with {} rows to {:?}", rows, path);
        Ok(())
    }

    fn format_name(&self) -> &str {
        "document"
    }
}
