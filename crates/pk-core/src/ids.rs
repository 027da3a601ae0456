//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` so rows
//! and log lines can carry the raw value.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID": the inner type's `MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a parking lot.  Unique among the lots a strategy manages.
    pub struct LotId(u32);
}

typed_id! {
    /// Per-lot ticket counter value.  Only meaningful together with the
    /// issuing [`LotId`]; see [`Ticket`][crate::Ticket].
    pub struct TicketNumber(u64);
}

impl TicketNumber {
    /// The first number a fresh lot hands out.
    pub const FIRST: TicketNumber = TicketNumber(1);

    /// The number issued after `self`.
    #[inline]
    pub fn next(self) -> TicketNumber {
        TicketNumber(self.0 + 1)
    }
}
