//! Worksheet assembly
//!
//! Groups rendered questions into rows of a fixed width and drives an
//! exporter through its open/write/close lifecycle.

use crate::config::Config;
use crate::error::{QuestError, Result};
use crate::export::{
    DocumentExporter, DocumentStyle, ExportFormat, Exporter, ExporterKind, PlainExporter,
};
use crate::question::{generate_questions, Operator};
use rand::Rng;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What happens to questions left over when the count is not a multiple of
/// the column count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingRow {
    /// Leftover questions are discarded
    #[default]
    Drop,
    /// Leftover questions are written as a final row padded with empty cells
    Pad,
}

/// Outcome of a worksheet run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorksheetSummary {
    /// Questions pulled from the generator
    pub questions: usize,
    /// Rows handed to the exporter
    pub rows: usize,
    /// Questions discarded from an incomplete final row
    pub dropped: usize,
}

/// Fully resolved settings of one worksheet run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetSettings {
    pub questions: usize,
    pub operators: Vec<Operator>,
    pub with_answer: bool,
    pub columns: usize,
    pub format: ExportFormat,
    pub name: String,
    pub trailing: TrailingRow,
    pub style: DocumentStyle,
}

impl WorksheetSettings {
    /// Destination path, `<name>.<format>`
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(self.format.file_name(&self.name))
    }
}

impl Default for WorksheetSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for WorksheetSettings {
    fn from(config: &Config) -> Self {
        Self {
            questions: config.generator.questions,
            operators: config.generator.operators.clone(),
            with_answer: config.generator.with_answer,
            columns: config.export.columns,
            format: config.export.format,
            name: config.export.name.clone(),
            trailing: if config.export.pad_last_row {
                TrailingRow::Pad
            } else {
                TrailingRow::Drop
            },
            style: config.document.clone(),
        }
    }
}

/// Write `questions` to `exporter` in rows of `columns` cells
///
/// `close` is called exactly once, after the last row, even when no row was
/// written.
pub fn write_worksheet<E, I>(
    exporter: &mut E,
    path: &Path,
    columns: usize,
    questions: I,
    trailing: TrailingRow,
) -> Result<WorksheetSummary>
where
    E: Exporter,
    I: IntoIterator<Item = String>,
{
    if columns == 0 {
        return Err(QuestError::Validation(
            "columns must be at least 1".to_string(),
        ));
    }

    let mut handle = exporter.open(path, columns)?;
    info!(
        "Opened {} exporter with {} columns",
        exporter.format_name(),
        columns
    );

    let mut summary = WorksheetSummary::default();
    let mut row: Vec<String> = Vec::with_capacity(columns);

    for question in questions {
        summary.questions += 1;
        row.push(question);
        if row.len() >= columns {
            exporter.write(&mut handle, &row)?;
            summary.rows += 1;
            row.clear();
        }
    }

    if !row.is_empty() {
        match trailing {
            TrailingRow::Drop => {
                summary.dropped = row.len();
                debug!("Dropped {} questions from incomplete last row", row.len());
            }
            TrailingRow::Pad => {
                row.resize(columns, String::new());
                exporter.write(&mut handle, &row)?;
                summary.rows += 1;
            }
        }
    }

    exporter.close(handle)?;
    info!(
        "Wrote {} rows from {} questions",
        summary.rows, summary.questions
    );
    Ok(summary)
}

/// Generate and export a worksheet, plain output going to stdout
pub fn export_worksheet<R: Rng + ?Sized>(
    settings: &WorksheetSettings,
    rng: &mut R,
) -> Result<WorksheetSummary> {
    export_with_plain(settings, rng, PlainExporter::stdout())
}

/// Generate and export a worksheet, plain output going to `out`
pub fn export_worksheet_with<R, W>(
    settings: &WorksheetSettings,
    rng: &mut R,
    out: W,
) -> Result<WorksheetSummary>
where
    R: Rng + ?Sized,
    W: Write,
{
    export_with_plain(settings, rng, PlainExporter::new(out))
}

fn export_with_plain<R, W>(
    settings: &WorksheetSettings,
    rng: &mut R,
    mut plain: PlainExporter<W>,
) -> Result<WorksheetSummary>
where
    R: Rng + ?Sized,
    W: Write,
{
    if settings.columns == 0 {
        return Err(QuestError::Validation(
            "columns must be at least 1".to_string(),
        ));
    }

    let questions = generate_questions(
        rng,
        settings.questions,
        &settings.operators,
        settings.with_answer,
    )?;
    let path = settings.output_path();

    match settings.format.kind() {
        ExporterKind::Plain => write_worksheet(
            &mut plain,
            &path,
            settings.columns,
            questions,
            settings.trailing,
        ),
        ExporterKind::Document => write_worksheet(
            &mut DocumentExporter::new(settings.style.clone()),
            &path,
            settings.columns,
            questions,
            settings.trailing,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Read;
    use tempfile::TempDir;

    /// Exporter that records every call
    #[derive(Default)]
    struct RecordingExporter {
        opened: usize,
        rows: Vec<Vec<String>>,
        closed: usize,
    }

    impl Exporter for RecordingExporter {
        type Handle = usize;

        fn open(&mut self, _path: &Path, columns: usize) -> Result<usize> {
            self.opened += 1;
            Ok(columns)
        }

        fn write(&mut self, handle: &mut usize, row: &[String]) -> Result<()> {
            assert_eq!(row.len(), *handle);
            self.rows.push(row.to_vec());
            Ok(())
        }

        fn close(&mut self, _handle: usize) -> Result<()> {
            self.closed += 1;
            Ok(())
        }

        fn format_name(&self) -> &str {
            "recording"
        }
    }

    fn numbered(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("q{}", i)).collect()
    }

    #[test]
    fn test_rows_in_generation_order() {
        let mut exporter = RecordingExporter::default();
        let summary = write_worksheet(
            &mut exporter,
            Path::new("quest"),
            2,
            numbered(4),
            TrailingRow::Drop,
        )
        .unwrap();

        assert_eq!(summary, WorksheetSummary { questions: 4, rows: 2, dropped: 0 });
        assert_eq!(
            exporter.rows,
            vec![
                vec!["q0".to_string(), "q1".to_string()],
                vec!["q2".to_string(), "q3".to_string()],
            ]
        );
    }

    #[test]
    fn test_trailing_row_dropped() {
        let mut exporter = RecordingExporter::default();
        let summary = write_worksheet(
            &mut exporter,
            Path::new("quest"),
            3,
            numbered(7),
            TrailingRow::Drop,
        )
        .unwrap();

        assert_eq!(summary.rows, 2);
        assert_eq!(summary.dropped, 1);
        assert_eq!(exporter.rows.len(), 2);
        assert_eq!(exporter.closed, 1);
    }

    #[test]
    fn test_trailing_row_padded() {
        let mut exporter = RecordingExporter::default();
        let summary = write_worksheet(
            &mut exporter,
            Path::new("quest"),
            3,
            numbered(7),
            TrailingRow::Pad,
        )
        .unwrap();

        assert_eq!(summary.rows, 3);
        assert_eq!(summary.dropped, 0);
        assert_eq!(
            exporter.rows[2],
            vec!["q6".to_string(), String::new(), String::new()]
        );
    }

    #[test]
    fn test_close_called_without_rows() {
        let mut exporter = RecordingExporter::default();
        let summary = write_worksheet(
            &mut exporter,
            Path::new("quest"),
            5,
            numbered(3),
            TrailingRow::Drop,
        )
        .unwrap();

        assert_eq!(summary.rows, 0);
        assert_eq!(exporter.opened, 1);
        assert_eq!(exporter.closed, 1);
    }

    #[test]
    fn test_zero_columns_rejected_before_open() {
        let mut exporter = RecordingExporter::default();
        let result = write_worksheet(
            &mut exporter,
            Path::new("quest"),
            0,
            numbered(3),
            TrailingRow::Drop,
        );

        assert!(matches!(result, Err(QuestError::Validation(_))));
        assert_eq!(exporter.opened, 0);
    }

    #[test]
    fn test_output_path() {
        let settings = WorksheetSettings {
            format: ExportFormat::Docx,
            name: "week-3".to_string(),
            ..WorksheetSettings::default()
        };
        assert_eq!(settings.output_path(), PathBuf::from("week-3.docx"));
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = Config::default();
        config.export.pad_last_row = true;
        config.export.columns = 5;

        let settings = WorksheetSettings::from(&config);
        assert_eq!(settings.trailing, TrailingRow::Pad);
        assert_eq!(settings.columns, 5);
        assert_eq!(settings.questions, 100);
    }

    #[test]
    fn test_export_plain_worksheet() {
        let settings = WorksheetSettings {
            questions: 9,
            columns: 4,
            ..WorksheetSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let mut out = Vec::new();

        let summary = export_worksheet_with(&settings, &mut rng, &mut out).unwrap();

        assert_eq!(summary, WorksheetSummary { questions: 9, rows: 2, dropped: 1 });
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        for line in text.lines() {
            assert_eq!(line.matches('=').count(), 4);
        }
    }

    #[test]
    fn test_export_plain_is_reproducible() {
        let settings = WorksheetSettings {
            questions: 20,
            with_answer: true,
            ..WorksheetSettings::default()
        };

        let mut first = Vec::new();
        let mut second = Vec::new();
        export_worksheet_with(&settings, &mut StdRng::seed_from_u64(99), &mut first).unwrap();
        export_worksheet_with(&settings, &mut StdRng::seed_from_u64(99), &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_export_document_worksheet() {
        let temp = TempDir::new().unwrap();
        let name = temp.path().join("quest").to_string_lossy().into_owned();
        let settings = WorksheetSettings {
            questions: 11,
            columns: 3,
            format: ExportFormat::Docx,
            name,
            ..WorksheetSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(5);

        let summary = export_worksheet(&settings, &mut rng).unwrap();
        assert_eq!(summary.rows, 3);

        let path = temp.path().join("quest.docx");
        let mut archive = zip::ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        assert_eq!(xml.matches("<w:tr>").count(), 3);
        assert_eq!(xml.matches("<w:tc>").count(), 9);
    }

    fn document_cells(path: &Path) -> Vec<String> {
        let mut archive = zip::ZipArchive::new(std::fs::File::open(path).unwrap()).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml.split("<w:tc>")
            .skip(1)
            .map(|cell| {
                cell.split("<w:t xml:space=\"preserve\">")
                    .nth(1)
                    .and_then(|rest| rest.split("</w:t>").next())
                    .unwrap_or("")
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_document_cells_match_generated_questions() {
        let temp = TempDir::new().unwrap();
        let name = temp.path().join("seeded").to_string_lossy().into_owned();
        let settings = WorksheetSettings {
            questions: 10,
            columns: 3,
            with_answer: true,
            operators: Operator::ALL.to_vec(),
            format: ExportFormat::Docx,
            name,
            ..WorksheetSettings::default()
        };

        export_worksheet(&settings, &mut StdRng::seed_from_u64(31)).unwrap();

        let mut rng = StdRng::seed_from_u64(31);
        let expected: Vec<String> =
            generate_questions(&mut rng, 10, &Operator::ALL, true)
                .unwrap()
                .take(9)
                .collect();
        assert_eq!(document_cells(&temp.path().join("seeded.docx")), expected);
    }

    #[test]
    fn test_export_plain_to_stdout_without_questions() {
        let settings = WorksheetSettings {
            questions: 0,
            ..WorksheetSettings::default()
        };
        let summary = export_worksheet(&settings, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(summary, WorksheetSummary::default());
    }

    #[test]
    fn test_export_empty_operator_set_fails() {
        let settings = WorksheetSettings {
            operators: Vec::new(),
            ..WorksheetSettings::default()
        };
        let mut out = Vec::new();
        let result = export_worksheet_with(&settings, &mut StdRng::seed_from_u64(1), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    proptest! {
        #[test]
        fn batching_writes_only_full_rows(count in 0usize..200, columns in 1usize..12) {
            let mut exporter = RecordingExporter::default();
            let summary = write_worksheet(
                &mut exporter,
                Path::new("quest"),
                columns,
                numbered(count),
                TrailingRow::Drop,
            )
            .unwrap();

            prop_assert_eq!(exporter.rows.len(), count / columns);
            prop_assert!(exporter.rows.iter().all(|row| row.len() == columns));
            prop_assert_eq!(summary.dropped, count % columns);
            prop_assert_eq!(exporter.closed, 1);
        }

        #[test]
        fn padding_keeps_every_question(count in 0usize..200, columns in 1usize..12) {
            let mut exporter = RecordingExporter::default();
            write_worksheet(
                &mut exporter,
                Path::new("quest"),
                columns,
                numbered(count),
                TrailingRow::Pad,
            )
            .unwrap();

            prop_assert_eq!(exporter.rows.len(), count.div_ceil(columns));
            let written = exporter.rows.iter().flatten().filter(|c| !c.is_empty()).count();
            prop_assert_eq!(written, count);
        }
    }
}
