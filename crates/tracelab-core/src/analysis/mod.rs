//! Signal Metrics Module
//!
//! Pure metric functions over an immutable [`ColumnTable`]: column
//! statistics, zero-crossing detection, phase difference between two signals,
//! rise time, and row-correspondence lookup.
//!
//! All functions are stateless; none mutates the table, so independent
//! callers may run them concurrently on a shared table.
//!
//! ## Example
//!
//! ```rust
//! use tracelab_core::analysis::{peak_to_peak, phase_difference, rms};
//! use tracelab_core::table::ColumnTable;
//!
//! let table = ColumnTable::from_reader("0 1 1\n1 -1 1\n2 -1 -1\n".as_bytes()).unwrap();
//! let voltage = table.column(1).unwrap();
//!
//! assert_eq!(peak_to_peak(voltage).unwrap(), 2.0);
//! assert_eq!(rms(voltage).unwrap(), 1.0);
//! let offset = phase_difference(&table, 1, 2).unwrap();
//! assert!(offset >= 0.0);
//! ```
//!
//! [`ColumnTable`]: crate::table::ColumnTable

pub mod crossing;
pub mod lookup;
pub mod phase;
pub mod rise;
pub mod statistics;

pub use crossing::{detect_crossing, Crossing};
pub use lookup::corresponding_value;
pub use phase::{phase_difference, phase_report, PhaseReport};
pub use rise::{rise_time, RiseTime, DEFAULT_RISE_THRESHOLD};
pub use statistics::{peak_to_peak, rms, ColumnStats};
