//! Fluent builder for constructing a [`Sim`].

use pk_core::{SimConfig, SimRng, Step};
use pk_lot::{LotHandle, lots_from_capacities};
use pk_strategy::build_strategy;

use crate::{Sim, SimError, SimResult, SimStats};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                                         |
/// |--------------|-------------------------------------------------|
/// | `.lots(v)`   | Fresh lots built from `config.lot_capacities`   |
///
/// Supplying lots lets the caller keep handles and inspect occupancy while
/// (or after) the simulation runs.
///
/// # Example
///
/// ```rust,ignore
/// let lots = lots_from_capacities(&config.lot_capacities)?;
/// let mut sim = SimBuilder::new(config).lots(lots.clone()).build()?;
/// sim.run(&mut NoopObserver)?;
/// println!("lot 0 has {} free", lots[0].available_space());
/// ```
pub struct SimBuilder {
    config: SimConfig,
    lots:   Option<Vec<LotHandle>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, lots: None }
    }

    /// Supply the lots to simulate over (must be length
    /// `config.lot_capacities.len()`, with distinct ids).
    pub fn lots(mut self, lots: Vec<LotHandle>) -> Self {
        self.lots = Some(lots);
        self
    }

    /// Validate inputs, build the strategy, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let expected = self.config.lot_capacities.len();
        if expected == 0 {
            return Err(SimError::Config("at least one lot is required".into()));
        }

        let p = self.config.park_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(SimError::Config(format!(
                "park_probability must lie in [0, 1], got {p}"
            )));
        }

        let lots = match self.lots {
            Some(lots) => {
                if lots.len() != expected {
                    return Err(SimError::LotCountMismatch { expected, got: lots.len() });
                }
                lots
            }
            None => lots_from_capacities(&self.config.lot_capacities)
                .map_err(|e| SimError::Config(format!("too many lots: {e}")))?,
        };

        let strategy = build_strategy(self.config.strategy, lots.clone())?;

        Ok(Sim {
            rng:            SimRng::new(self.config.seed),
            config:         self.config,
            step:           Step::ZERO,
            lots,
            strategy,
            outstanding:    Vec::new(),
            stats:          SimStats::default(),
            vehicle_serial: 0,
        })
    }
}
