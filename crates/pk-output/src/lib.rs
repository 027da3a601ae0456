//! `pk-output` — simulation logs for the rust_parking simulator.
//!
//! | Backend     | Files created                      |
//! |-------------|------------------------------------|
//! | CSV         | `events.csv`, `occupancy.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `pk_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pk_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::create(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventKind, EventRow, OccupancyRow};
pub use writer::OutputWriter;
