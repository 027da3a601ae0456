//! Simulation observer trait for progress reporting and data collection.

use pk_core::{ParkingError, Step, Ticket, Vehicle};
use pk_lot::LotHandle;

use crate::SimStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — rejection printer
///
/// ```rust,ignore
/// struct RejectionPrinter;
///
/// impl SimObserver for RejectionPrinter {
///     fn on_rejected(&mut self, step: Step, vehicle: &Vehicle, error: &ParkingError) {
///         eprintln!("{step}: {vehicle} turned away ({error})");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _step: Step) {}

    /// A vehicle was parked and issued `ticket`.
    fn on_parked(&mut self, _step: Step, _ticket: Ticket, _vehicle: &Vehicle) {}

    /// A vehicle was retrieved with `ticket`.
    fn on_picked(&mut self, _step: Step, _ticket: Ticket, _vehicle: &Vehicle) {}

    /// A vehicle could not be parked because every lot was full.
    fn on_rejected(&mut self, _step: Step, _vehicle: &Vehicle, _error: &ParkingError) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_steps`
    /// steps) with read access to every lot, in strategy order.
    fn on_snapshot(&mut self, _step: Step, _lots: &[LotHandle]) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_step: Step, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
