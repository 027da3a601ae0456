//! `pk-sim` — step loop driver for the rust_parking simulator.
//!
//! # Step loop
//!
//! ```text
//! for step in 0..config.total_steps:
//!   ① Decide    — park if nothing is outstanding, otherwise park with
//!                 probability `park_probability` and pick the rest of the time.
//!   ② Park      — new vehicle through the strategy; `NoAvailableLot` is a
//!                 recorded rejection, not a failure.
//!   ③ Pick      — redeem a uniformly random outstanding ticket.
//!   ④ Snapshot  — every `snapshot_interval_steps`, hand the lots to the observer.
//! ```
//!
//! # Quick-start
//!
//! ```rust
//! use pk_core::{SimConfig, StrategyKind};
//! use pk_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig {
//!     lot_capacities:          vec![5, 10],
//!     strategy:                StrategyKind::MaxSpace,
//!     total_steps:             100,
//!     seed:                    42,
//!     park_probability:        0.6,
//!     snapshot_interval_steps: 0,
//! };
//! let mut sim = SimBuilder::new(config).build().unwrap();
//! let stats = sim.run(&mut NoopObserver).unwrap();
//! assert_eq!(stats.parked + stats.rejected + stats.picked, 100);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimStats};
