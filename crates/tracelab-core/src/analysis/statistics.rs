//! Column Statistics
//!
//! Stateless reducers over a single column (peak-to-peak, RMS) plus an
//! aggregate [`ColumnStats`] report combining them with min/max/mean.

use crate::error::{TraceError, TraceResult};
use serde::Serialize;

/// Peak-to-peak amplitude: `max - min` over the column.
pub fn peak_to_peak(values: &[f64]) -> TraceResult<f64> {
    if values.is_empty() {
        return Err(TraceError::EmptyInput("peak_to_peak on empty column"));
    }
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    Ok(max - min)
}

/// Root-mean-square value: `sqrt(mean(x^2))` over the column.
///
/// Plain IEEE-754 accumulation; no compensated summation.
pub fn rms(values: &[f64]) -> TraceResult<f64> {
    if values.is_empty() {
        return Err(TraceError::EmptyInput("rms on empty column"));
    }
    let sum_squared: f64 = values.iter().map(|v| v * v).sum();
    Ok((sum_squared / values.len() as f64).sqrt())
}

/// Aggregate statistics for one column
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnStats {
    /// Number of samples in the column
    pub num_samples: usize,
    /// Minimum sampled value
    pub min: f64,
    /// Maximum sampled value
    pub max: f64,
    /// Peak-to-peak amplitude (max - min)
    pub peak_to_peak: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Root-mean-square value
    pub rms: f64,
}

impl ColumnStats {
    /// Compute statistics for the given column.
    pub fn compute(values: &[f64]) -> TraceResult<Self> {
        if values.is_empty() {
            return Err(TraceError::EmptyInput("statistics on empty column"));
        }
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        Ok(Self {
            num_samples: values.len(),
            min,
            max,
            peak_to_peak: max - min,
            mean,
            rms: rms(values)?,
        })
    }

    /// Format as text report
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Samples:           {}\n", self.num_samples));
        output.push_str(&format!("Min:               {:.6}\n", self.min));
        output.push_str(&format!("Max:               {:.6}\n", self.max));
        output.push_str(&format!("Peak-to-Peak:      {:.6}\n", self.peak_to_peak));
        output.push_str(&format!("Mean:              {:.6}\n", self.mean));
        output.push_str(&format!("RMS:               {:.6}\n", self.rms));
        output
    }
}
