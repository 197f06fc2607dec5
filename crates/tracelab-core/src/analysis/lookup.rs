//! Correspondence Lookup
//!
//! Maps a value in one column to the value at the same row in another.
//! Matching uses exact floating-point equality; a query value that was never
//! sampled exactly yields no match. Known limitation, kept deliberately so
//! results stay comparable with the instrument's own readout.

use crate::error::TraceResult;
use crate::table::ColumnTable;

/// Value in `search_col` at the first row where `base_col` equals `value`.
///
/// Returns `Ok(None)` if no row of the base column matches exactly.
pub fn corresponding_value(
    table: &ColumnTable,
    base_col: usize,
    search_col: usize,
    value: f64,
) -> TraceResult<Option<f64>> {
    let base = table.column(base_col)?;
    let search = table.column(search_col)?;

    Ok(base
        .iter()
        .position(|&v| v == value)
        .map(|row| search[row]))
}
