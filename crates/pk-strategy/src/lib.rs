//! `pk-strategy` — policies that choose which lot receives a vehicle.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`strategy`]    | `AllocationStrategy` trait, `build_strategy` factory      |
//! | [`first_fit`]   | `FirstFitStrategy` — lowest-index lot with space          |
//! | [`max_space`]   | `MaxSpaceStrategy` — lot with the most space              |
//! | [`error`]       | `StrategyError` — rejected lot sets                       |
//!
//! Strategies hold an ordered, fixed list of [`LotHandle`][pk_lot::LotHandle]s
//! and no state of their own.  All mutable state lives in the lots.  Lot ids
//! must be unique within a strategy; construction fails otherwise.
//!
//! # Quick-start
//!
//! ```rust
//! use pk_core::Vehicle;
//! use pk_lot::lots_from_capacities;
//! use pk_strategy::{AllocationStrategy, MaxSpaceStrategy};
//!
//! let lots = lots_from_capacities(&[5, 10]).unwrap();
//! let attendant = MaxSpaceStrategy::new(lots.clone()).unwrap();
//!
//! let ticket = attendant.park(Vehicle::new("京A 11111")).unwrap();
//! assert_eq!(lots[1].available_space(), 9);
//! assert_eq!(attendant.pick(ticket).unwrap().plate(), "京A 11111");
//! ```

pub mod error;
pub mod first_fit;
pub mod max_space;
pub mod strategy;


pub use error::{StrategyError, StrategyResult};
pub use first_fit::FirstFitStrategy;
pub use max_space::MaxSpaceStrategy;
pub use strategy::{AllocationStrategy, build_strategy, ensure_unique_ids};
