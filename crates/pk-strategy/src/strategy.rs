//! The allocation strategy trait.
//!
//! # Pluggability
//!
//! Callers park and pick through [`AllocationStrategy`], so the policy can be
//! swapped without touching the lots.  An implementation only decides *which*
//! lot gets the next vehicle ([`select_lot`](AllocationStrategy::select_lot));
//! parking, picking and capacity queries are shared provided methods.

use std::collections::HashSet;

use pk_core::{ParkingError, ParkingResult, StrategyKind, Ticket, Vehicle};
use pk_lot::LotHandle;

use crate::{FirstFitStrategy, MaxSpaceStrategy, StrategyError, StrategyResult};

/// A policy choosing among an ordered, fixed set of lots.
pub trait AllocationStrategy {
    /// The managed lots, in sequence order.
    fn lots(&self) -> &[LotHandle];

    /// Index into [`lots`](Self::lots) of the lot that should receive the
    /// next vehicle, or `None` if every lot is full.
    ///
    /// Must only return an index whose lot has `available_space() > 0`.
    fn select_lot(&self) -> Option<usize>;

    /// Which built-in policy this is, if any.
    fn kind(&self) -> Option<StrategyKind> {
        None
    }

    /// Park `vehicle` in the selected lot.
    ///
    /// # Errors
    ///
    /// [`ParkingError::NoAvailableLot`] if no managed lot has space.  No lot
    /// is touched in that case.
    fn park(&self, vehicle: Vehicle) -> ParkingResult<Ticket> {
        let index = self.select_lot().ok_or(ParkingError::NoAvailableLot)?;
        self.lots()[index].park(vehicle)
    }

    /// Redeem `ticket` at the first lot in sequence order that holds it.
    ///
    /// Lots are probed with the non-mutating `holds`; only the lot that
    /// recognises the ticket is asked to `pick`.
    ///
    /// # Errors
    ///
    /// [`ParkingError::InvalidTicket`] if no managed lot holds the ticket.
    fn pick(&self, ticket: Ticket) -> ParkingResult<Vehicle> {
        self.lots()
            .iter()
            .find(|lot| lot.holds(ticket))
            .ok_or(ParkingError::InvalidTicket(ticket))?
            .pick(ticket)
    }

    /// Free spaces summed over all managed lots.
    fn available_space(&self) -> usize {
        self.lots().iter().map(LotHandle::available_space).sum()
    }
}

/// Check that no two lots share an id.
///
/// Tickets name their lot by id, so a repeated id would let `pick` redeem a
/// ticket at the wrong lot.
///
/// # Errors
///
/// [`StrategyError::DuplicateLot`] naming the first repeated id.
pub fn ensure_unique_ids(lots: &[LotHandle]) -> StrategyResult<()> {
    let mut seen = HashSet::with_capacity(lots.len());
    for lot in lots {
        let id = lot.id();
        if !seen.insert(id) {
            return Err(StrategyError::DuplicateLot(id));
        }
    }
    Ok(())
}

/// Construct the built-in strategy named by `kind` over `lots`.
///
/// # Errors
///
/// [`StrategyError::DuplicateLot`] if two lots share an id.
pub fn build_strategy(
    kind: StrategyKind,
    lots: Vec<LotHandle>,
) -> StrategyResult<Box<dyn AllocationStrategy>> {
    Ok(match kind {
        StrategyKind::FirstFit => Box::new(FirstFitStrategy::new(lots)?),
        StrategyKind::MaxSpace => Box::new(MaxSpaceStrategy::new(lots)?),
    })
}
