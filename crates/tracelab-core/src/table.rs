//! Column Table — whitespace-delimited numeric trace files
//!
//! Parses a plain-text measurement trace (one row per timestamp, columns
//! separated by whitespace) into column-major arrays. The first non-empty
//! line fixes the column count; every later row must match it. Column 0 is
//! conventionally the time axis, ascending.
//!
//! ## Example
//!
//! ```rust
//! use tracelab_core::table::ColumnTable;
//!
//! let table = ColumnTable::from_reader("0 1 2\n1 -1 3\n2 1 -1\n".as_bytes()).unwrap();
//! assert_eq!(table.num_columns(), 3);
//! assert_eq!(table.column(1).unwrap(), &[1.0, -1.0, 1.0]);
//! ```

use crate::error::{TraceError, TraceResult};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

/// A parsed measurement trace: one `Vec<f64>` per column, all equal length.
///
/// Immutable after construction. Column 0 is the time axis by convention;
/// the parser does not enforce monotonicity, metric functions assume it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTable {
    columns: Vec<Vec<f64>>,
}

impl ColumnTable {
    /// Load a trace from a file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> TraceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TraceError::FileNotFound(path.display().to_string())
            } else {
                TraceError::Io(e)
            }
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a trace from any buffered reader.
    ///
    /// Blank lines are skipped. A row with the wrong column count or a
    /// non-numeric token is a [`TraceError::Parse`] with the 1-based line
    /// number; malformed tokens are never silently dropped.
    pub fn from_reader<R: BufRead>(reader: R) -> TraceResult<Self> {
        let mut columns: Vec<Vec<f64>> = Vec::new();
        let mut width: Option<usize> = None;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }

            let expected = *width.get_or_insert(tokens.len());
            if tokens.len() != expected {
                return Err(TraceError::Parse {
                    line: line_no + 1,
                    detail: format!(
                        "expected {} columns, found {}",
                        expected,
                        tokens.len()
                    ),
                });
            }
            if columns.is_empty() {
                columns = vec![Vec::new(); expected];
            }

            for (col, token) in tokens.iter().enumerate() {
                let value: f64 = token.parse().map_err(|_| TraceError::Parse {
                    line: line_no + 1,
                    detail: format!("invalid number {:?} in column {}", token, col),
                })?;
                columns[col].push(value);
            }
        }

        let table = Self { columns };
        debug!(
            columns = table.num_columns(),
            rows = table.num_rows(),
            "parsed column table"
        );
        Ok(table)
    }

    /// Number of columns (0 for an empty table).
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (samples per column).
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// True if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Samples of a single column by zero-based index.
    pub fn column(&self, index: usize) -> TraceResult<&[f64]> {
        self.columns
            .get(index)
            .map(Vec::as_slice)
            .ok_or(TraceError::ColumnOutOfRange {
                index,
                count: self.num_columns(),
            })
    }

    /// The time axis (column 0).
    pub fn time(&self) -> TraceResult<&[f64]> {
        self.column(0)
    }

    /// Format a short summary as a text report.
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Columns:           {}\n",
            self.num_columns()
        ));
        output.push_str(&format!("Rows:              {}\n", self.num_rows()));
        if let Ok(time) = self.time() {
            if let (Some(first), Some(last)) = (time.first(), time.last()) {
                output.push_str(&format!(
                    "Time span:         {} .. {}\n",
                    first, last
                ));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let table =
            ColumnTable::from_reader("0 1 2\n1 -1 3\n2 1 -1\n".as_bytes()).unwrap();
        assert_eq!(table.num_columns(), 3);
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.time().unwrap(), &[0.0, 1.0, 2.0]);
        assert_eq!(table.column(1).unwrap(), &[1.0, -1.0, 1.0]);
        assert_eq!(table.column(2).unwrap(), &[2.0, 3.0, -1.0]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table =
            ColumnTable::from_reader("\n0 1\n\n1 2\n\n".as_bytes()).unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.column(1).unwrap(), &[1.0, 2.0]);
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let err = ColumnTable::from_reader("0 1 2\n1 -1\n".as_bytes()).unwrap_err();
        match err {
            TraceError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_token_is_parse_error() {
        let err = ColumnTable::from_reader("0 1\n1 abc\n".as_bytes()).unwrap_err();
        match err {
            TraceError::Parse { line, detail } => {
                assert_eq!(line, 2);
                assert!(detail.contains("abc"), "detail was {:?}", detail);
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let table = ColumnTable::from_reader("".as_bytes()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.num_columns(), 0);
    }

    #[test]
    fn test_column_out_of_range() {
        let table = ColumnTable::from_reader("0 1\n".as_bytes()).unwrap();
        match table.column(5).unwrap_err() {
            TraceError::ColumnOutOfRange { index, count } => {
                assert_eq!(index, 5);
                assert_eq!(count, 2);
            }
            other => panic!("expected ColumnOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let err = ColumnTable::from_path("/nonexistent/trace.txt").unwrap_err();
        assert!(matches!(err, TraceError::FileNotFound(_)));
    }

    #[test]
    fn test_from_path_round_trip() {
        let path = std::env::temp_dir().join("tracelab_table_test.txt");
        std::fs::write(&path, "0.0 5.0\n0.5 -5.0\n").unwrap();
        let table = ColumnTable::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.column(1).unwrap(), &[5.0, -5.0]);
    }
}
