//! Plain-text exporter

use super::exporter::Exporter;
use crate::error::{QuestError, Result};
use std::io::{self, Stdout, Write};
use std::path::Path;
use tracing::debug;

/// Width of a full output line
pub const LINE_WIDTH: usize = 84;

/// Width reserved for one rendered question
pub const EXPR_WIDTH: usize = 11;

/// Spaces placed after every cell but the last for a given column count
pub fn column_gap(columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    (LINE_WIDTH / columns).saturating_sub(EXPR_WIDTH)
}

/// Render one row as a single line (without the trailing newline)
pub fn render_line(row: &[String]) -> String {
    let gap = " ".repeat(column_gap(row.len()));
    let mut line = String::new();

    if let Some((last, rest)) = row.split_last() {
        for cell in rest {
            line.push_str(cell);
            line.push_str(&gap);
        }
        line.push_str(last);
    }

    line
}

/// Handle of an open plain-text export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainHandle {
    columns: usize,
}

/// Exporter writing padded columns of questions to a stream
///
/// Each row is flushed as soon as it is written, so a crash after a write
/// leaves every earlier row visible.
pub struct PlainExporter<W: Write> {
    out: W,
}

impl PlainExporter<Stdout> {
    /// Exporter writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PlainExporter<W> {
    /// Exporter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the exporter and return the underlying stream
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Exporter for PlainExporter<W> {
    type Handle = PlainHandle;

    fn open(&mut self, _path: &Path, columns: usize) -> Result<PlainHandle> {
        if columns == 0 {
            return Err(QuestError::Validation(
                "columns must be at least 1".to_string(),
            ));
        }
        Ok(PlainHandle { columns })
    }

    fn write(&mut self, handle: &mut PlainHandle, row: &[String]) -> Result<()> {
        if row.len() != handle.columns {
            return Err(QuestError::RowWidth {
                expected: handle.columns,
                actual: row.len(),
            });
        }

        let line = render_line(row);
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        debug!("Wrote plain row of {} cells", row.len());
        Ok(())
    }

    fn close(&mut self, _handle: PlainHandle) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "plain"
    }
}
