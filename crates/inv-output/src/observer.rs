//! `EventLogObserver<W>` — bridges `SimObserver` to an `EventWriter`.

use inv_sim::{DestructionEvent, SimObserver, SimStats};

use crate::row::{DestructionRow, SummaryRow};
use crate::writer::EventWriter;
use crate::OutputError;

/// A [`SimObserver`] that records destructions and the final summary to any
/// [`EventWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct EventLogObserver<W: EventWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: EventWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: EventWriter> SimObserver for EventLogObserver<W> {
    fn on_city_destroyed(&mut self, event: &DestructionEvent) {
        let row = DestructionRow {
            iteration:    event.iteration.0,
            city:         event.city.clone(),
            first_alien:  event.aliens[0].0,
            second_alien: event.aliens[1].0,
        };
        let result = self.writer.write_destruction(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, stats: &SimStats) {
        let row = SummaryRow {
            iterations: stats.iterations,
            outcome:    stats.outcome.as_str(),
            moves:      stats.moves,
            max_cities: stats.max_cities as u64,
            destroyed:  stats.destroyed() as u64,
            remaining:  stats.remaining as u64,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
