//! Error types for gen-quest

use thiserror::Error;

/// Main error type for gen-quest
#[derive(Debug, Error)]
pub enum QuestError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document packaging error
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Export format key with no exporter behind it
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// Operator symbol or name that cannot be generated
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Row handed to an exporter with the wrong number of cells
    #[error("Row has {actual} cells, expected {expected}")]
    RowWidth { expected: usize, actual: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<QuestError>,
    },
}

impl QuestError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        QuestError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for QuestError {
    fn from(err: toml::de::Error) -> Self {
        QuestError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for QuestError {
    fn from(err: toml::ser::Error) -> Self {
        QuestError::Toml(err.to_string())
    }
}

/// Result type alias for gen-quest
pub type Result<T> = std::result::Result<T, QuestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuestError::UnknownFormat("pdf".to_string());
        assert_eq!(err.to_string(), "Unknown export format: pdf");
    }

    #[test]
    fn test_row_width_display() {
        let err = QuestError::RowWidth { expected: 3, actual: 2 };
        assert_eq!(err.to_string(), "Row has 2 cells, expected 3");
    }

    #[test]
    fn test_error_with_context() {
        let err = QuestError::Validation("columns must be at least 1".to_string());
        let err = err.with_context("Failed to build worksheet");
        assert!(err.to_string().contains("Failed to build worksheet"));
        assert!(err.to_string().contains("columns must be at least 1"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: QuestError = io_err.into();
        assert!(matches!(err, QuestError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("columns = ").unwrap_err();
        let err: QuestError = toml_err.into();
        assert!(matches!(err, QuestError::Toml(_)));
    }
}
