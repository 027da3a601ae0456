//! The `ParkingLot` — the only component that mutates occupancy state.

use pk_core::{LotId, ParkingError, ParkingResult, Ticket, TicketNumber, Vehicle};

#[cfg(feature = "fx-hash")]
type OccupancyMap = rustc_hash::FxHashMap<TicketNumber, Vehicle>;

#[cfg(not(feature = "fx-hash"))]
type OccupancyMap = std::collections::HashMap<TicketNumber, Vehicle>;

/// A fixed-capacity lot mapping issued ticket numbers to parked vehicles.
///
/// Ticket numbers start at [`TicketNumber::FIRST`] and only ever grow; a
/// redeemed number is never issued again by the same lot.  A failed `park` or
/// `pick` leaves the lot exactly as it was.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    id:          LotId,
    capacity:    usize,
    occupancy:   OccupancyMap,
    next_ticket: TicketNumber,
}

impl ParkingLot {
    /// Create an empty lot.  A capacity of 0 yields a lot that is always full.
    pub fn new(id: LotId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            occupancy:   OccupancyMap::default(),
            next_ticket: TicketNumber::FIRST,
        }
    }

    #[inline]
    pub fn id(&self) -> LotId {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of vehicles currently parked.
    #[inline]
    pub fn occupied(&self) -> usize {
        self.occupancy.len()
    }

    /// `capacity - occupied`, floored at 0.
    #[inline]
    pub fn available_space(&self) -> usize {
        self.capacity.saturating_sub(self.occupancy.len())
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.available_space() == 0
    }

    /// `true` if `ticket` was issued by this lot and has not been redeemed.
    ///
    /// Never mutates; strategies use this to probe lots before `pick`.
    pub fn holds(&self, ticket: Ticket) -> bool {
        ticket.lot == self.id && self.occupancy.contains_key(&ticket.number)
    }

    /// Park `vehicle` and return its ticket.
    ///
    /// # Errors
    ///
    /// [`ParkingError::LotFull`] if there is no free space.
    pub fn park(&mut self, vehicle: Vehicle) -> ParkingResult<Ticket> {
        if self.is_full() {
            return Err(ParkingError::LotFull(self.id));
        }
        let number = self.next_ticket;
        self.occupancy.insert(number, vehicle);
        self.next_ticket = number.next();
        Ok(Ticket::new(self.id, number))
    }

    /// Redeem `ticket`, removing and returning the vehicle parked under it.
    ///
    /// # Errors
    ///
    /// [`ParkingError::InvalidTicket`] if the ticket was issued by another
    /// lot, never issued, or already redeemed.
    pub fn pick(&mut self, ticket: Ticket) -> ParkingResult<Vehicle> {
        if ticket.lot != self.id {
            return Err(ParkingError::InvalidTicket(ticket));
        }
        self.occupancy
            .remove(&ticket.number)
            .ok_or(ParkingError::InvalidTicket(ticket))
    }

    /// Iterate over parked vehicles and their tickets (arbitrary order).
    pub fn vehicles(&self) -> impl Iterator<Item = (Ticket, &Vehicle)> + '_ {
        self.occupancy
            .iter()
            .map(move |(&number, vehicle)| (Ticket::new(self.id, number), vehicle))
    }
}
