//! The `Sim` struct and its step loop.

use pk_core::{ParkingError, SimConfig, SimRng, Step, Ticket, Vehicle};
use pk_lot::LotHandle;
use pk_strategy::AllocationStrategy;

use crate::{SimObserver, SimResult};

// ── SimStats ──────────────────────────────────────────────────────────────────

/// Running totals for one simulation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Successful parks.
    pub parked: u64,
    /// Successful picks.
    pub picked: u64,
    /// Parks turned away with `NoAvailableLot`.
    pub rejected: u64,
}

impl SimStats {
    /// Vehicles still parked: `parked - picked`.
    #[inline]
    pub fn in_lots(&self) -> u64 {
        self.parked - self.picked
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each step either parks a freshly numbered vehicle through the strategy or
/// redeems one outstanding ticket chosen at random.  All randomness comes from
/// a single [`SimRng`] seeded by `config.seed`, so runs are reproducible.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (steps, seed, park probability, …).
    pub config: SimConfig,

    /// The next step to execute.
    pub step: Step,

    /// The lots, in strategy order.  Shared with `strategy`.
    pub lots: Vec<LotHandle>,

    /// Allocation policy every park goes through.
    pub strategy: Box<dyn AllocationStrategy>,

    pub rng: SimRng,

    /// Tickets issued and not yet redeemed.
    pub outstanding: Vec<Ticket>,

    pub stats: SimStats,

    /// Serial for the next generated plate.
    pub(crate) vehicle_serial: u64,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current step to `config.end_step()` and return the totals.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimStats> {
        while self.step < self.config.end_step() {
            self.advance(observer)?;
        }
        observer.on_sim_end(self.step, &self.stats);
        Ok(self.stats)
    }

    /// Run exactly `n` steps from the current position (ignores `end_step`).
    ///
    /// Useful for tests and incremental stepping.  Does not call `on_sim_end`.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<SimStats> {
        for _ in 0..n {
            self.advance(observer)?;
        }
        Ok(self.stats)
    }

    /// Vehicles currently parked, summed over every lot.
    pub fn occupied(&self) -> usize {
        self.lots.iter().map(LotHandle::occupied).sum()
    }

    // ── Step loop ─────────────────────────────────────────────────────────

    fn advance<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.step;
        observer.on_step_start(now);
        self.process_step(now, observer)?;

        let interval = self.config.snapshot_interval_steps;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.lots);
        }
        self.step = now + 1;
        Ok(())
    }

    fn process_step<O: SimObserver>(&mut self, now: Step, observer: &mut O) -> SimResult<()> {
        let park = self.outstanding.is_empty() || self.rng.gen_bool(self.config.park_probability);

        if park {
            let vehicle = self.next_vehicle();
            match self.strategy.park(vehicle.clone()) {
                Ok(ticket) => {
                    self.outstanding.push(ticket);
                    self.stats.parked += 1;
                    observer.on_parked(now, ticket, &vehicle);
                }
                Err(err @ ParkingError::NoAvailableLot) => {
                    self.stats.rejected += 1;
                    observer.on_rejected(now, &vehicle, &err);
                }
                Err(err) => return Err(err.into()),
            }
        } else {
            let i = self.rng.gen_range(0..self.outstanding.len());
            let ticket = self.outstanding.swap_remove(i);
            // Every outstanding ticket was issued by a managed lot, so a
            // failure here means someone redeemed it behind our back.
            let vehicle = self.strategy.pick(ticket)?;
            self.stats.picked += 1;
            observer.on_picked(now, ticket, &vehicle);
        }
        Ok(())
    }

    fn next_vehicle(&mut self) -> Vehicle {
        self.vehicle_serial += 1;
        Vehicle::new(format!("SIM-{:06}", self.vehicle_serial))
    }
}
