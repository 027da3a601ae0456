//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use pk_core::{LotId, ParkingError, Step, Ticket, TicketNumber, Vehicle};
use pk_lot::LotHandle;
use pk_sim::{SimObserver, SimStats};

use crate::row::{EventKind, EventRow, OccupancyRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that logs every event and occupancy snapshot to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn event(&mut self, step: Step, kind: EventKind, ticket: Option<Ticket>, vehicle: &Vehicle) {
        let row = EventRow {
            step:          step.0,
            kind,
            lot_id:        ticket.map_or(LotId::INVALID, |t| t.lot).0,
            ticket_number: ticket.map_or(TicketNumber::INVALID, |t| t.number).0,
            plate:         vehicle.plate().to_owned(),
        };
        let result = self.writer.write_events(std::slice::from_ref(&row));
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_parked(&mut self, step: Step, ticket: Ticket, vehicle: &Vehicle) {
        self.event(step, EventKind::Park, Some(ticket), vehicle);
    }

    fn on_picked(&mut self, step: Step, ticket: Ticket, vehicle: &Vehicle) {
        self.event(step, EventKind::Pick, Some(ticket), vehicle);
    }

    fn on_rejected(&mut self, step: Step, vehicle: &Vehicle, _error: &ParkingError) {
        self.event(step, EventKind::Reject, None, vehicle);
    }

    fn on_snapshot(&mut self, step: Step, lots: &[LotHandle]) {
        let rows: Vec<OccupancyRow> = lots
            .iter()
            .map(|lot| OccupancyRow {
                step:      step.0,
                lot_id:    lot.id().0,
                capacity:  lot.capacity() as u64,
                available: lot.available_space() as u64,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_occupancy(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_step: Step, _stats: &SimStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
