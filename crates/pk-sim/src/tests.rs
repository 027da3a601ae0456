//! Integration tests for pk-sim.

use pk_core::{ParkingError, SimConfig, Step, StrategyKind, Ticket, Vehicle};
use pk_lot::LotHandle;

use crate::{SimObserver, SimStats};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(capacities: &[usize], strategy: StrategyKind, total_steps: u64, p: f64) -> SimConfig {
    SimConfig {
        lot_capacities:          capacities.to_vec(),
        strategy,
        total_steps,
        seed:                    42,
        park_probability:        p,
        snapshot_interval_steps: 0,
    }
}

/// Records every callback as a line of text.
#[derive(Default)]
struct Recorder {
    events:    Vec<String>,
    snapshots: Vec<(Step, Vec<usize>)>,
    ended:     Vec<(Step, SimStats)>,
}

impl SimObserver for Recorder {
    fn on_parked(&mut self, step: Step, ticket: Ticket, vehicle: &Vehicle) {
        self.events.push(format!("{step} park {ticket} {vehicle}"));
    }

    fn on_picked(&mut self, step: Step, ticket: Ticket, vehicle: &Vehicle) {
        self.events.push(format!("{step} pick {ticket} {vehicle}"));
    }

    fn on_rejected(&mut self, step: Step, vehicle: &Vehicle, error: &ParkingError) {
        self.events.push(format!("{step} reject {vehicle} {error}"));
    }

    fn on_snapshot(&mut self, step: Step, lots: &[LotHandle]) {
        let spaces = lots.iter().map(LotHandle::available_space).collect();
        self.snapshots.push((step, spaces));
    }

    fn on_sim_end(&mut self, final_step: Step, stats: &SimStats) {
        self.ended.push((final_step, *stats));
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use pk_core::LotId;
    use pk_lot::lots_from_capacities;
    use pk_strategy::StrategyError;

    use super::*;
    use crate::{SimBuilder, SimError};

    #[test]
    fn builds_successfully_with_defaults() {
        let sim = SimBuilder::new(test_config(&[1, 10], StrategyKind::FirstFit, 10, 0.5))
            .build()
            .unwrap();
        assert_eq!(sim.lots.len(), 2);
        assert_eq!(sim.step, Step::ZERO);
        assert_eq!(sim.strategy.kind(), Some(StrategyKind::FirstFit));
        assert_eq!(sim.strategy.available_space(), 11);
    }

    #[test]
    fn no_lots_is_config_error() {
        let result = SimBuilder::new(test_config(&[], StrategyKind::FirstFit, 10, 0.5)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn probability_out_of_range_is_config_error() {
        for p in [-0.1, 1.5, f64::NAN] {
            let result = SimBuilder::new(test_config(&[3], StrategyKind::FirstFit, 10, p)).build();
            assert!(matches!(result, Err(SimError::Config(_))), "p = {p}");
        }
    }

    #[test]
    fn lot_count_mismatch_errors() {
        let result = SimBuilder::new(test_config(&[3, 3], StrategyKind::FirstFit, 10, 0.5))
            .lots(lots_from_capacities(&[3]).unwrap())
            .build();
        assert!(matches!(
            result,
            Err(SimError::LotCountMismatch { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn shared_lot_id_is_strategy_error() {
        let lots = vec![
            LotHandle::with_capacity(LotId(0), 1),
            LotHandle::with_capacity(LotId(0), 1),
        ];
        for kind in [StrategyKind::FirstFit, StrategyKind::MaxSpace] {
            let result = SimBuilder::new(test_config(&[1, 1], kind, 10, 0.5))
                .lots(lots.clone())
                .build();
            assert!(
                matches!(result, Err(SimError::Strategy(StrategyError::DuplicateLot(LotId(0))))),
                "{kind}"
            );
        }
    }
}

// ── Step loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use pk_lot::lots_from_capacities;

    use super::*;
    use crate::{NoopObserver, SimBuilder, SimError};

    #[test]
    fn always_park_fills_then_rejects() {
        let lots = lots_from_capacities(&[1, 2]).unwrap();
        let mut sim = SimBuilder::new(test_config(&[1, 2], StrategyKind::FirstFit, 5, 1.0))
            .lots(lots.clone())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let stats = sim.run(&mut rec).unwrap();

        assert_eq!(stats, SimStats { parked: 3, picked: 0, rejected: 2 });
        assert_eq!(lots[0].available_space(), 0);
        assert_eq!(lots[1].available_space(), 0);
        assert_eq!(rec.events[0], "S0 park L0#1 SIM-000001");
        assert_eq!(rec.events[1], "S1 park L1#1 SIM-000002");
        assert!(rec.events[3].starts_with("S3 reject SIM-000004"));
    }

    #[test]
    fn max_space_prefers_larger_lot() {
        let lots = lots_from_capacities(&[5, 10]).unwrap();
        let mut sim = SimBuilder::new(test_config(&[5, 10], StrategyKind::MaxSpace, 3, 1.0))
            .lots(lots.clone())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(lots[0].available_space(), 5);
        assert_eq!(lots[1].available_space(), 7);
    }

    #[test]
    fn never_park_alternates_park_and_pick() {
        let mut sim = SimBuilder::new(test_config(&[2], StrategyKind::FirstFit, 4, 0.0))
            .build()
            .unwrap();
        let stats = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(stats, SimStats { parked: 2, picked: 2, rejected: 0 });
        assert_eq!(sim.occupied(), 0);
        assert!(sim.outstanding.is_empty());
    }

    #[test]
    fn occupancy_matches_stats() {
        let config = test_config(&[3, 5, 2], StrategyKind::MaxSpace, 500, 0.6);
        let mut sim = SimBuilder::new(config).build().unwrap();
        let stats = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(stats.parked + stats.picked + stats.rejected, 500);
        assert_eq!(stats.in_lots(), sim.occupied() as u64);
        assert_eq!(sim.outstanding.len(), sim.occupied());
        for lot in &sim.lots {
            assert!(lot.occupied() <= lot.capacity());
        }
    }

    #[test]
    fn same_seed_same_events() {
        let config = test_config(&[2, 4], StrategyKind::FirstFit, 200, 0.55);

        let mut a = Recorder::default();
        SimBuilder::new(config.clone()).build().unwrap().run(&mut a).unwrap();
        let mut b = Recorder::default();
        SimBuilder::new(config).build().unwrap().run(&mut b).unwrap();

        assert_eq!(a.events, b.events);
        assert_eq!(a.events.len(), 200);
    }

    #[test]
    fn snapshots_follow_interval() {
        let mut config = test_config(&[10], StrategyKind::FirstFit, 35, 1.0);
        config.snapshot_interval_steps = 10;
        let mut rec = Recorder::default();
        SimBuilder::new(config).build().unwrap().run(&mut rec).unwrap();

        let steps: Vec<_> = rec.snapshots.iter().map(|(s, _)| *s).collect();
        assert_eq!(steps, [Step(0), Step(10), Step(20), Step(30)]);
        // Snapshot is taken after the step's park.
        assert_eq!(rec.snapshots[0].1, [9]);
        assert_eq!(rec.snapshots[1].1, [0]);
    }

    #[test]
    fn sim_end_fires_once_with_final_step() {
        let mut rec = Recorder::default();
        let mut sim = SimBuilder::new(test_config(&[4], StrategyKind::FirstFit, 12, 0.5))
            .build()
            .unwrap();
        let stats = sim.run(&mut rec).unwrap();
        assert_eq!(rec.ended, [(Step(12), stats)]);

        // Already at the end: a second run does no work but reports again.
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.ended.len(), 2);
        assert_eq!(rec.events.len(), 12);
    }

    #[test]
    fn run_steps_ignores_end_step() {
        let mut sim = SimBuilder::new(test_config(&[4], StrategyKind::FirstFit, 2, 1.0))
            .build()
            .unwrap();
        let stats = sim.run_steps(6, &mut NoopObserver).unwrap();
        assert_eq!(sim.step, Step(6));
        assert_eq!(stats, SimStats { parked: 4, picked: 0, rejected: 2 });
    }

    #[test]
    fn ticket_redeemed_outside_sim_surfaces_as_error() {
        let lots = lots_from_capacities(&[5]).unwrap();
        let mut sim = SimBuilder::new(test_config(&[5], StrategyKind::FirstFit, 10, 1.0))
            .lots(lots.clone())
            .build()
            .unwrap();
        sim.run_steps(3, &mut NoopObserver).unwrap();

        for ticket in sim.outstanding.clone() {
            lots[0].pick(ticket).unwrap();
        }
        sim.config.park_probability = 0.0;

        let err = sim.run_steps(1, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Parking(ParkingError::InvalidTicket(_))));
    }
}
