//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventRow, OccupancyRow, OutputResult};

/// Trait implemented by output backends.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error`, since observer callbacks return nothing.
pub trait OutputWriter {
    /// Write a batch of park/pick/reject events.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write one snapshot's worth of per-lot occupancy rows.
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()>;

    /// Flush all underlying sinks.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
