//! Simulation configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Step;

// ── StrategyKind ──────────────────────────────────────────────────────────────

/// Which allocation policy a run uses to choose a lot for each vehicle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyKind {
    /// First lot in sequence order with free space.
    #[default]
    FirstFit,
    /// Lot with the most free space; lowest index wins ties.
    MaxSpace,
}

impl StrategyKind {
    /// Stable label, used in config files and output rows.
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::FirstFit => "first_fit",
            StrategyKind::MaxSpace => "max_space",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown allocation strategy {0:?}")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_fit" => Ok(StrategyKind::FirstFit),
            "max_space" => Ok(StrategyKind::MaxSpace),
            other => Err(UnknownStrategy(other.to_owned())),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON/TOML file by the application (enable the
/// `serde` feature) and passed to `pk_sim::SimBuilder`, which validates it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Capacity of each lot, in strategy sequence order.  Lot `i` gets
    /// `LotId(i)`.
    pub lot_capacities: Vec<usize>,

    /// Allocation policy used for every park.
    pub strategy: StrategyKind,

    /// Total steps to simulate.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Chance that a step parks a new vehicle rather than redeeming an
    /// outstanding ticket.  Must lie in `[0, 1]`.
    pub park_probability: f64,

    /// Emit an occupancy snapshot every N steps.  0 disables snapshots.
    pub snapshot_interval_steps: u64,
}

impl SimConfig {
    /// The step at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.total_steps)
    }

    /// Sum of all lot capacities.
    pub fn total_capacity(&self) -> usize {
        self.lot_capacities.iter().sum()
    }
}
