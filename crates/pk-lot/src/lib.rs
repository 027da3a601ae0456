//! `pk-lot` — fixed-capacity parking lots.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`lot`]     | `ParkingLot` — capacity, occupancy map, ticket counter         |
//! | [`handle`]  | `LotHandle` — shared reference used by callers and strategies  |
//!
//! # Lot state machine
//!
//! A lot is either *has space* (`available_space() > 0`) or *full*.  `park`
//! moves it toward full and fails with `ParkingError::LotFull` once there;
//! `pick` moves it back.  There is no terminal state.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Uses `rustc_hash::FxHashMap` for the occupancy map.     |

pub mod handle;
pub mod lot;


pub use handle::{LotHandle, lots_from_capacities};
pub use lot::ParkingLot;
