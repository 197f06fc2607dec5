//! Rise Time
//!
//! Finds a column's peak and the first time the signal reaches a reference
//! level. The reference match uses exact floating-point equality, as the
//! measurement convention for these traces dictates; values that only come
//! near the reference level are not matched. Known limitation for data that
//! never samples the level exactly.

use crate::error::{TraceError, TraceResult};
use crate::table::ColumnTable;
use serde::Serialize;

/// Reference level a signal is considered "risen" at.
pub const DEFAULT_RISE_THRESHOLD: f64 = 1.0;

/// Peak and rise-time measurements for one column
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiseTime {
    /// Maximum sampled value
    pub peak_value: f64,
    /// Timestamp of the maximum sample
    pub peak_time: f64,
    /// Timestamp of the first sample exactly equal to the reference level,
    /// or `None` if the level is never sampled
    pub rise_time: Option<f64>,
}

impl RiseTime {
    /// Format as text report
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Peak Value:        {:.6}\n", self.peak_value));
        output.push_str(&format!("Peak Time:         {:.6}\n", self.peak_time));
        match self.rise_time {
            Some(t) => output.push_str(&format!("Rise Time:         {:.6}\n", t)),
            None => output.push_str("Rise Time:         not reached\n"),
        }
        output
    }
}

/// Measure peak and rise time of a column against `threshold`.
pub fn rise_time(
    table: &ColumnTable,
    column_index: usize,
    threshold: f64,
) -> TraceResult<RiseTime> {
    let time = table.time()?;
    let signal = table.column(column_index)?;
    if signal.is_empty() {
        return Err(TraceError::EmptyInput("rise time on empty column"));
    }

    let mut peak_index = 0;
    for (i, &v) in signal.iter().enumerate() {
        if v > signal[peak_index] {
            peak_index = i;
        }
    }

    let rise_index = signal.iter().position(|&v| v == threshold);

    Ok(RiseTime {
        peak_value: signal[peak_index],
        peak_time: time[peak_index],
        rise_time: rise_index.map(|i| time[i]),
    })
}
