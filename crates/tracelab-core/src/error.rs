//! Error types shared across the parser and the metrics engine.

/// Result type for table and metric operations
pub type TraceResult<T> = Result<T, TraceError>;

/// Errors that can occur while loading a trace or computing a metric
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error at line {line}: {detail}")]
    Parse { line: usize, detail: String },

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("no zero crossing found at or after index {start}")]
    NoCrossing { start: usize },

    #[error("column index {index} out of range (table has {count} columns)")]
    ColumnOutOfRange { index: usize, count: usize },

    #[error("sample index {index} out of range (column has {len} samples)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    Usage(String),
}
