// ==========================================
// Siparis Converter - error taxonomy
// ==========================================
// `ConvertError` enumerates the failure modes surfaced by the
// import/projection/export pipeline; `ConvertResult<T>` is the
// crate-wide result alias. `From` impls let `?` lift io/csv/calamine
// errors into the taxonomy.
// ==========================================

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum ConvertError {
    // ===== file-level errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("file read error: {0}")]
    FileReadError(String),

    // ===== parse/export errors =====
    #[error("Excel parse error: {0}")]
    ExcelParseError(String),

    #[error("Excel write error: {0}")]
    ExcelWriteError(String),

    #[error("CSV parse error: {0}")]
    CsvParseError(String),

    // ===== projection/data errors =====
    #[error("sheet has no rows")]
    EmptySheet,

    #[error("missing key column: {0}")]
    MissingKeyColumn(String),

    // ===== generic errors =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        ConvertError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ConvertError {
    fn from(err: calamine::Error) -> Self {
        ConvertError::ExcelParseError(err.to_string())
    }
}

/// Result alias carrying [`ConvertError`].
pub type ConvertResult<T> = Result<T, ConvertError>;
