//! menu-history
//!
//! Append-only log of placed orders for the lifetime of the process, plus
//! export of that log as a plain transcript or as CSV rows.
//!
//! Records are never removed; the log empties only on restart.

mod export;
mod record;

pub use export::{ExportError, ExportFormat, ExportReport, CSV_HEADER};
pub use record::{
    InvalidTimestampFormat, OrderHistory, OrderRecord, PlaceOutcome, DEFAULT_TIMESTAMP_FORMAT,
};
