//! Lot-scoped parking tickets.
//!
//! Every lot numbers its tickets from 1, so a bare number is ambiguous as soon
//! as more than one lot is in play.  A [`Ticket`] therefore carries the issuing
//! lot's id alongside the number, and lots reject tickets issued elsewhere.

use std::fmt;

use crate::{LotId, TicketNumber};

/// Proof of parking: the issuing lot plus that lot's ticket number.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticket {
    pub lot:    LotId,
    pub number: TicketNumber,
}

impl Ticket {
    #[inline]
    pub fn new(lot: LotId, number: TicketNumber) -> Self {
        Self { lot, number }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}#{}", self.lot.0, self.number.0)
    }
}
