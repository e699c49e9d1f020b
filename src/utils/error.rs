use std::path::PathBuf;
use thiserror::Error;

/// Record data that violates an invariant: id, name, or grade range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("student id must be a positive integer, got {value}")]
    InvalidId { value: i64 },

    #[error("student name cannot be empty or whitespace-only")]
    BlankName,

    #[error("grade must be between 0 and 100, got {value}")]
    GradeOutOfRange { value: i64 },

    #[error("invalid value for {field}: {reason} (got {value:?})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Failure while reading or writing a roster file.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("row {row}: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: ValidationError,
    },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application-level error category. The shell catches this, prints the
/// message, and decides the exit code; nothing below it terminates the
/// process.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("data source error: {0}")]
    DataSource(#[from] DataSourceError),

    #[error("student with id {id} already exists")]
    DuplicateId { id: u32 },

    #[error("student with id {id} not found")]
    StudentNotFound { id: u32 },
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
