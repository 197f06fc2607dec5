//! # tracelab-core
//!
//! Signal metrics engine for multi-column lab instrument traces: a time
//! column plus one or more signal columns (voltage, current, ...), parsed
//! from whitespace-delimited text into an immutable column table and reduced
//! to a fixed set of measurements.
//!
//! ## Features
//!
//! - **Column Parser**: whitespace-delimited numeric tables, strict shape
//!   validation with line-numbered errors
//! - **Statistics**: peak-to-peak, RMS, and aggregate per-column reports
//! - **Zero-Crossing Detection**: positional sign-change scan with midpoint
//!   time interpolation
//! - **Phase Difference**: time offset between corresponding crossings of
//!   two signals
//! - **Rise Time**: peak location plus first arrival at a reference level
//! - **Correspondence Lookup**: value-at-same-row mapping between columns
//!
//! ## Example
//!
//! ```rust,no_run
//! use tracelab_core::analysis::ColumnStats;
//! use tracelab_core::table::ColumnTable;
//!
//! let table = ColumnTable::from_path("trace.txt")?;
//! let stats = ColumnStats::compute(table.column(1)?)?;
//! println!("Voltage RMS: {:.6}", stats.rms);
//! # Ok::<(), tracelab_core::TraceError>(())
//! ```

pub mod analysis;
pub mod error;
pub mod table;

pub use error::{TraceError, TraceResult};
pub use table::ColumnTable;
