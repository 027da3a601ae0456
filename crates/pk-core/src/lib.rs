//! `pk-core` — foundational types for the `rust_parking` allocation simulator.
//!
//! This crate is a dependency of every other `pk-*` crate.  It has no `pk-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LotId`, `TicketNumber`                               |
//! | [`vehicle`]     | `Vehicle` — opaque plate identity                     |
//! | [`ticket`]      | `Ticket` — lot-scoped composite ticket                |
//! | [`step`]        | `Step` counter                                        |
//! | [`rng`]         | `SimRng`                                              |
//! | [`config`]      | `SimConfig`, `StrategyKind`                           |
//! | [`error`]       | `ParkingError`, `ParkingResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod step;
pub mod ticket;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, StrategyKind, UnknownStrategy};
pub use error::{ParkingError, ParkingResult};
pub use ids::{LotId, TicketNumber};
pub use rng::SimRng;
pub use step::Step;
pub use ticket::Ticket;
pub use vehicle::Vehicle;
