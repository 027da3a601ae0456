//! Parking error taxonomy.
//!
//! Exactly three failure kinds exist and callers are expected to match on
//! them exhaustively.  Failed operations never mutate lot state.

use thiserror::Error;

use crate::{LotId, Ticket};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    /// A single lot has no free space.
    #[error("lot {0} is full")]
    LotFull(LotId),

    /// No lot managed by a strategy has free space.
    #[error("no managed lot has available space")]
    NoAvailableLot,

    /// The ticket is unknown, was issued by another lot, or was already redeemed.
    #[error("invalid ticket {0}")]
    InvalidTicket(Ticket),
}

/// Shorthand result type for parking operations.
pub type ParkingResult<T> = Result<T, ParkingError>;
