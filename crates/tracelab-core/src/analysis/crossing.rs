//! Zero-Crossing Detection
//!
//! Scans a signal column for the first sign change at or after a starting
//! index and reports an interpolated crossing time.

use crate::error::{TraceError, TraceResult};
use serde::Serialize;

/// A detected zero crossing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crossing {
    /// Interpolated crossing time: midpoint of the timestamps straddling the
    /// sign change
    pub time: f64,
    /// Row index of the first sample on the far side of the change
    pub index: usize,
}

/// Find the first zero crossing of `signal` at or after `start`.
///
/// The sign to cross away from is taken from `signal[start]`
/// (positive if strictly `> 0`). The crossing is the first sample with the
/// strictly opposite sign; a sample of exactly `0.0` never counts as a
/// crossing. The reported time is the arithmetic midpoint
/// `(time[i-1] + time[i]) / 2`, a zero-order estimate rather than a true
/// interpolation to zero.
///
/// The scan begins at index 1 at the earliest: a midpoint needs a
/// predecessor sample, so index 0 can never be reported as a crossing.
///
/// Returns [`TraceError::NoCrossing`] if the column ends without a sign
/// change.
pub fn detect_crossing(time: &[f64], signal: &[f64], start: usize) -> TraceResult<Crossing> {
    if signal.is_empty() {
        return Err(TraceError::EmptyInput("crossing detection on empty column"));
    }
    if time.len() != signal.len() {
        return Err(TraceError::Usage(format!(
            "time and signal columns differ in length ({} vs {})",
            time.len(),
            signal.len()
        )));
    }
    if start >= signal.len() {
        return Err(TraceError::IndexOutOfRange {
            index: start,
            len: signal.len(),
        });
    }

    let positive_first = signal[start] > 0.0;

    // Positional scan; the crossing index is the loop position, never a
    // value re-search (repeated sample values would alias).
    for i in start.max(1)..signal.len() {
        let crossed = if positive_first {
            signal[i] < 0.0
        } else {
            signal[i] > 0.0
        };
        if crossed {
            return Ok(Crossing {
                time: (time[i - 1] + time[i]) / 2.0,
                index: i,
            });
        }
    }

    Err(TraceError::NoCrossing { start })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_to_negative() {
        let time = [0.0, 1.0, 2.0, 3.0];
        let signal = [1.0, 1.0, -1.0, -1.0];
        let crossing = detect_crossing(&time, &signal, 0).unwrap();
        assert_eq!(crossing.time, 1.5);
        assert_eq!(crossing.index, 2);
    }

    #[test]
    fn test_negative_to_positive() {
        let time = [0.0, 1.0, 2.0, 3.0];
        let signal = [-1.0, -1.0, -1.0, 1.0];
        let crossing = detect_crossing(&time, &signal, 0).unwrap();
        assert_eq!(crossing.time, 2.5);
        assert_eq!(crossing.index, 3);
    }

    #[test]
    fn test_scan_respects_start_index() {
        let time = [0.0, 1.0, 2.0, 3.0, 4.0];
        let signal = [1.0, -1.0, -1.0, -1.0, 1.0];
        // From index 1 the seed is negative, so the next crossing is at 4.
        let crossing = detect_crossing(&time, &signal, 1).unwrap();
        assert_eq!(crossing.index, 4);
        assert_eq!(crossing.time, 3.5);
    }

    #[test]
    fn test_repeated_values_use_positional_index() {
        // The crossing sample value also appears earlier in the column; a
        // value re-search would report index 0 instead of the true position.
        let time = [0.0, 1.0, 2.0, 3.0];
        let signal = [2.0, -1.0, 2.0, 2.0];
        let crossing = detect_crossing(&time, &signal, 1).unwrap();
        assert_eq!(crossing.index, 2);
        assert_eq!(crossing.time, 1.5);
    }

    #[test]
    fn test_exact_zero_is_not_a_crossing() {
        let time = [0.0, 1.0, 2.0];
        let signal = [1.0, 0.0, 1.0];
        assert!(matches!(
            detect_crossing(&time, &signal, 0).unwrap_err(),
            TraceError::NoCrossing { .. }
        ));
    }

    #[test]
    fn test_no_crossing_found() {
        let time = [0.0, 1.0, 2.0];
        let signal = [1.0, 2.0, 3.0];
        assert!(matches!(
            detect_crossing(&time, &signal, 0).unwrap_err(),
            TraceError::NoCrossing { start: 0 }
        ));
    }

    #[test]
    fn test_start_index_out_of_range() {
        let time = [0.0, 1.0];
        let signal = [1.0, -1.0];
        assert!(matches!(
            detect_crossing(&time, &signal, 2).unwrap_err(),
            TraceError::IndexOutOfRange { index: 2, len: 2 }
        ));
    }

    #[test]
    fn test_empty_column() {
        assert!(matches!(
            detect_crossing(&[], &[], 0).unwrap_err(),
            TraceError::EmptyInput(_)
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let time = [0.0, 1.0, 2.0];
        let signal = [1.0, -1.0];
        assert!(matches!(
            detect_crossing(&time, &signal, 0).unwrap_err(),
            TraceError::Usage(_)
        ));
    }
}
