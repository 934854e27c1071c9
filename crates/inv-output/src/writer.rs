//! The `EventWriter` trait implemented by all backend writers.

use crate::{DestructionRow, OutputResult, SummaryRow};

/// Trait implemented by event-log backends.
///
/// Errors are stored by [`EventLogObserver`][crate::EventLogObserver] and
/// retrieved with its `take_error`, since observer hooks return nothing.
pub trait EventWriter {
    fn write_destruction(&mut self, row: &DestructionRow) -> OutputResult<()>;

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
