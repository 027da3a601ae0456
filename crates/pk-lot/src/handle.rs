//! `LotHandle` — a shared reference to a [`ParkingLot`].
//!
//! Lots are constructed by the caller and handed to a strategy, but the caller
//! keeps inspecting them afterwards.  Cloning a handle is cheap and every
//! clone sees the same lot.  Each method borrows the inner lot only for the
//! duration of the call, so no borrow ever outlives a method.
//!
//! The simulator is single-threaded, so the handle is `!Send`.

use std::cell::RefCell;
use std::num::TryFromIntError;
use std::rc::Rc;

use pk_core::{LotId, ParkingResult, Ticket, Vehicle};

use crate::ParkingLot;

#[derive(Clone, Debug)]
pub struct LotHandle(Rc<RefCell<ParkingLot>>);

impl LotHandle {
    pub fn new(lot: ParkingLot) -> Self {
        LotHandle(Rc::new(RefCell::new(lot)))
    }

    /// Shorthand for `LotHandle::new(ParkingLot::new(id, capacity))`.
    pub fn with_capacity(id: LotId, capacity: usize) -> Self {
        Self::new(ParkingLot::new(id, capacity))
    }

    pub fn id(&self) -> LotId {
        self.0.borrow().id()
    }

    pub fn capacity(&self) -> usize {
        self.0.borrow().capacity()
    }

    pub fn occupied(&self) -> usize {
        self.0.borrow().occupied()
    }

    pub fn available_space(&self) -> usize {
        self.0.borrow().available_space()
    }

    pub fn holds(&self, ticket: Ticket) -> bool {
        self.0.borrow().holds(ticket)
    }

    pub fn park(&self, vehicle: Vehicle) -> ParkingResult<Ticket> {
        self.0.borrow_mut().park(vehicle)
    }

    pub fn pick(&self, ticket: Ticket) -> ParkingResult<Vehicle> {
        self.0.borrow_mut().pick(ticket)
    }

    /// Run `f` against a read-only view of the lot.  The borrow ends when
    /// `f` returns.
    pub fn with_lot<T>(&self, f: impl FnOnce(&ParkingLot) -> T) -> T {
        f(&self.0.borrow())
    }

    /// `true` if both handles refer to the same lot.
    pub fn ptr_eq(&self, other: &LotHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<ParkingLot> for LotHandle {
    fn from(lot: ParkingLot) -> Self {
        LotHandle::new(lot)
    }
}

/// Build one handle per capacity, with ids `LotId(0)`, `LotId(1)`, … in order.
///
/// # Errors
///
/// Fails if there are more lots than `LotId` can number.
pub fn lots_from_capacities(capacities: &[usize]) -> Result<Vec<LotHandle>, TryFromIntError> {
    capacities
        .iter()
        .enumerate()
        .map(|(i, &capacity)| Ok(LotHandle::with_capacity(LotId::try_from(i)?, capacity)))
        .collect()
}
