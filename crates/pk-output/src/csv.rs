//! CSV output backend.
//!
//! Two tables:
//! - events: `step,kind,lot_id,ticket,plate`
//! - occupancy: `step,lot_id,capacity,available`

use std::fs::File;
use std::io;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OccupancyRow, OutputResult};

const EVENT_HEADERS: [&str; 5] = ["step", "kind", "lot_id", "ticket", "plate"];
const OCCUPANCY_HEADERS: [&str; 4] = ["step", "lot_id", "capacity", "available"];

/// Writes simulation output as two CSV tables.
pub struct CsvWriter<W: io::Write = File> {
    events:    Writer<W>,
    occupancy: Writer<W>,
    finished:  bool,
}

impl CsvWriter<File> {
    /// Open (or create) `events.csv` and `occupancy.csv` in `dir` and write
    /// the header rows.
    pub fn create(dir: &Path) -> OutputResult<Self> {
        Self::from_writers(
            File::create(dir.join("events.csv"))?,
            File::create(dir.join("occupancy.csv"))?,
        )
    }
}

impl<W: io::Write> CsvWriter<W> {
    /// Wrap two arbitrary sinks and write the header rows.
    pub fn from_writers(events: W, occupancy: W) -> OutputResult<Self> {
        let mut events = Writer::from_writer(events);
        events.write_record(EVENT_HEADERS)?;

        let mut occupancy = Writer::from_writer(occupancy);
        occupancy.write_record(OCCUPANCY_HEADERS)?;

        Ok(Self {
            events,
            occupancy,
            finished: false,
        })
    }

    /// Flush and recover the `(events, occupancy)` sinks.
    pub fn into_inner(self) -> OutputResult<(W, W)> {
        let events = self.events.into_inner().map_err(|e| e.into_error())?;
        let occupancy = self.occupancy.into_inner().map_err(|e| e.into_error())?;
        Ok((events, occupancy))
    }
}

impl<W: io::Write> OutputWriter for CsvWriter<W> {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.step.to_string(),
                row.kind.to_string(),
                row.lot_id.to_string(),
                row.ticket_number.to_string(),
                row.plate.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()> {
        for row in rows {
            self.occupancy.write_record(&[
                row.step.to_string(),
                row.lot_id.to_string(),
                row.capacity.to_string(),
                row.available.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.occupancy.flush()?;
        Ok(())
    }
}
