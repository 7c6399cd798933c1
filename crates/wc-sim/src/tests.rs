//! Integration tests for wc-sim.

use wc_core::{AnimalCounts, PointId, SimConfig};
use wc_graph::{CollectionGraph, GraphBuilder};

use crate::{NoopObserver, RunOutcome, SimBuilder, SimObserver, TimelineEvent};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config() -> SimConfig {
    SimConfig {
        initial_trucks: 1,
        truck_capacity_m3: 10.0,
        staff_per_truck: 4,
        elastic_fleet: false,
        ..SimConfig::default()
    }
}

/// Three points in a line: 0 —5— 1 —3— 2, waste [12, 0, 8].
fn line_graph() -> CollectionGraph {
    let mut b = GraphBuilder::new();
    let p0 = b.add_point(12.0);
    let p1 = b.add_point(0.0);
    let p2 = b.add_point(8.0);
    b.add_road(p0, p1, 5);
    b.add_road(p1, p2, 3);
    b.build().unwrap()
}

/// `n` points in a ring with assorted waste and costs.
fn ring(n: u32) -> CollectionGraph {
    let mut b = GraphBuilder::new();
    let p: Vec<PointId> = (0..n).map(|i| b.add_point(1.5 + (i % 5) as f64 * 2.25)).collect();
    for i in 0..n {
        b.add_road(p[i as usize], p[((i + 1) % n) as usize], (i % 4 + 1) as i64);
    }
    b.build().unwrap()
}

fn no_animals(n: usize) -> Vec<AnimalCounts> {
    vec![AnimalCounts::NONE; n]
}

/// Counts every observer callback.
#[derive(Default)]
struct Counting {
    tick_starts: u64,
    tick_ends:   u64,
    events:      Vec<TimelineEvent>,
    ended:       u32,
}

impl SimObserver for Counting {
    fn on_tick_start(&mut self, _tick: u64, _now: wc_core::Minute) {
        self.tick_starts += 1;
    }
    fn on_event(&mut self, event: &TimelineEvent) {
        self.events.push(event.clone());
    }
    fn on_tick_end(&mut self, _tick: u64, _now: wc_core::Minute) {
        self.tick_ends += 1;
    }
    fn on_sim_end(&mut self, _report: &crate::RunReport) {
        self.ended += 1;
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use wc_core::CoreError;

    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(test_config(), line_graph()).build().unwrap();
        assert_eq!(sim.trucks.len(), 1);
        assert_eq!(sim.landfill, PointId(0));
        assert_eq!(sim.shelter, PointId(0));
        assert_eq!(sim.initial_waste, wc_core::Volume::m3(20));
        assert!(!sim.captures.is_empty());
    }

    #[test]
    fn invalid_config_errors() {
        let config = SimConfig { budget_minutes: 0, ..test_config() };
        let err = SimBuilder::new(config, line_graph()).build().err().unwrap();
        assert!(matches!(err, SimError::Config(CoreError::Config(_))));
    }

    #[test]
    fn unknown_landfill_errors() {
        let err = SimBuilder::new(test_config(), line_graph())
            .landfill(PointId(9))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::UnknownPoint { role: "landfill", .. }));
    }

    #[test]
    fn unknown_shelter_errors() {
        let err = SimBuilder::new(test_config(), line_graph())
            .shelter(PointId(3))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::UnknownPoint { role: "shelter", .. }));
    }

    #[test]
    fn unreachable_landfill_errors() {
        let mut b = GraphBuilder::new();
        let a = b.add_point(1.0);
        let c = b.add_point(1.0);
        b.add_point(4.0);
        b.add_road(a, c, 2);
        let err = SimBuilder::new(test_config(), b.build().unwrap())
            .initial_animals(no_animals(3))
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SimError::Unreachable { role: "landfill", from: PointId(2), .. }
        ));
    }

    #[test]
    fn unreachable_shelter_errors() {
        let mut b = GraphBuilder::new();
        let a = b.add_point(1.0);
        let c = b.add_point(1.0);
        b.add_point(0.0);
        b.add_road(a, c, 2);
        let mut animals = no_animals(3);
        animals[2] = AnimalCounts::new(0, 1, 0);
        let err = SimBuilder::new(test_config(), b.build().unwrap())
            .initial_animals(animals)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Unreachable { role: "shelter", .. }));
    }

    #[test]
    fn animal_count_mismatch_errors() {
        let err = SimBuilder::new(test_config(), line_graph())
            .initial_animals(no_animals(2))
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SimError::PointCountMismatch { expected: 3, got: 2, .. }
        ));
    }

    #[test]
    fn capture_fleet_sized_from_animals() {
        let mut animals = no_animals(12);
        for a in animals.iter_mut().take(11) {
            *a = AnimalCounts::new(1, 0, 0);
        }
        let sim = SimBuilder::new(test_config(), ring(12))
            .initial_animals(animals)
            .build()
            .unwrap();
        assert_eq!(sim.captures.len(), 2);

        let sim = SimBuilder::new(test_config(), ring(12))
            .initial_animals(no_animals(12))
            .build()
            .unwrap();
        assert_eq!(sim.captures.len(), 1);
    }

    #[test]
    fn explicit_capture_fleet_wins() {
        let config = SimConfig { capture_vehicles: Some(3), ..test_config() };
        let sim = SimBuilder::new(config, ring(6)).build().unwrap();
        assert_eq!(sim.captures.len(), 3);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use wc_core::{Minute, Volume};

    use super::*;
    use crate::EventSource;

    #[test]
    fn first_visit_compacts_the_full_truck() {
        let mut sim = SimBuilder::new(test_config(), line_graph())
            .initial_animals(no_animals(3))
            .build()
            .unwrap();
        sim.tick(&mut NoopObserver).unwrap();

        let tl = sim.timeline();
        assert_eq!(tl[0].source, EventSource::Truck(wc_core::TruckId(0)));
        assert_eq!(tl[0].at, Minute(3));
        assert!(tl[0].message.starts_with("collected 10.00 m³ at point 0, 2.00 m³ left there"));
        assert_eq!(tl[1].message, "compacted load (1/3), now 3.33 m³");
        assert_eq!(tl[2].source, EventSource::Scheduler);
        assert_eq!(tl[2].to_string(), "[13 min] scheduler: truck 0 spent 13 min at point 0");
        assert_eq!(sim.store.waste(PointId(0)), Volume::m3(2));
    }

    #[test]
    fn trucks_visit_in_fleet_order_then_point_order() {
        let config = SimConfig { initial_trucks: 2, ..test_config() };
        let mut sim = SimBuilder::new(config, line_graph())
            .initial_animals(no_animals(3))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.outcome, RunOutcome::Completed);
        assert_eq!(report.ticks, 1);

        // "truck N spent M min at point P" → (truck N, point P)
        let visits: Vec<(String, String)> = sim
            .timeline()
            .iter()
            .filter(|e| e.source == EventSource::Scheduler)
            .filter_map(|e| {
                let (truck, rest) = e.message.split_once(" spent ")?;
                let (_, point) = rest.rsplit_once(" at ")?;
                Some((truck.to_owned(), point.to_owned()))
            })
            .collect();
        let expected = [("truck 0", "point 0"), ("truck 0", "point 2"), ("truck 1", "point 0")];
        assert_eq!(
            visits,
            expected.map(|(t, p)| (t.to_owned(), p.to_owned())).to_vec()
        );

        // Within the tick every truck-0 line precedes the first truck-1
        // line; end-of-shift unloading comes after the last scheduler line.
        let tl = sim.timeline();
        let last_visit = tl.iter().rposition(|e| e.source == EventSource::Scheduler).unwrap();
        let sources: Vec<EventSource> = tl[..last_visit]
            .iter()
            .map(|e| e.source)
            .filter(|s| matches!(s, EventSource::Truck(_)))
            .collect();
        let first_t1 = sources
            .iter()
            .position(|&s| s == EventSource::Truck(wc_core::TruckId(1)))
            .unwrap();
        assert!(sources[..first_t1].iter().all(|&s| s == EventSource::Truck(wc_core::TruckId(0))));
        assert!(sources[first_t1..].iter().all(|&s| s != EventSource::Truck(wc_core::TruckId(0))));
    }

    #[test]
    fn line_graph_runs_to_completion() {
        let mut sim = SimBuilder::new(test_config(), line_graph())
            .initial_animals(no_animals(3))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(report.outcome, RunOutcome::Completed);
        assert_eq!(report.ticks, 2);
        assert_eq!(report.minutes, Minute(36));
        assert_eq!(report.stats.compactions, 3);
        assert_eq!(report.stats.truck_unloads, 1);
        assert_eq!(report.stats.gross_collected, Volume::m3(20));
        assert_eq!(report.stats.gross_delivered, Volume::m3(20));
        assert_eq!(report.waste_remaining, Volume::ZERO);
        assert_eq!(report.estimate.trucks, 1);
        assert_eq!(report.estimate.staff, 4);
        assert_eq!(report.estimate.capture_vehicles, 0);
    }

    #[test]
    fn one_minute_budget_stops_after_first_tick() {
        let config = SimConfig { budget_minutes: 1, ..test_config() };
        let mut sim = SimBuilder::new(config, line_graph())
            .initial_animals(no_animals(3))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(report.outcome, RunOutcome::BudgetExceeded);
        assert_eq!(report.ticks, 1);
        assert_eq!(report.waste_remaining, Volume::m3(10));
        // End-of-shift unload delivers what was on board.
        assert_eq!(report.stats.gross_delivered, Volume::m3(10));
    }

    #[test]
    fn tick_cap_reports_budget_exceeded() {
        let config = SimConfig { max_ticks: 1, ..test_config() };
        let mut sim = SimBuilder::new(config, line_graph())
            .initial_animals(no_animals(3))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.outcome, RunOutcome::BudgetExceeded);
        assert_eq!(report.ticks, 1);
    }

    #[test]
    fn clean_graph_completes_immediately() {
        let mut b = GraphBuilder::new();
        b.add_point(0.0);
        let mut sim = SimBuilder::new(test_config(), b.build().unwrap())
            .initial_animals(no_animals(1))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.outcome, RunOutcome::Completed);
        assert_eq!(report.ticks, 0);
        assert_eq!(report.minutes, Minute(0));
        assert!(sim.timeline().is_empty());
    }

    #[test]
    fn capture_fleet_clears_dogs_then_cats() {
        let config = SimConfig {
            capture_vehicles: Some(1),
            capture_capacity: 2,
            ..test_config()
        };
        let mut animals = no_animals(3);
        animals[0] = AnimalCounts::new(0, 1, 2);
        let mut sim = SimBuilder::new(config, line_graph())
            .shelter(PointId(2))
            .initial_animals(animals)
            .migration_rule(wc_fauna::NoMigration)
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(report.outcome, RunOutcome::Completed);
        assert_eq!(report.stats.animals_captured, 3);
        assert_eq!(report.stats.animals_delivered, 3);
        assert_eq!(report.stats.capture_unloads, 2);
        assert_eq!(report.stats.capture_requests, 1);
        assert_eq!(report.stats.pest_control_requests, 0);
        assert_eq!(report.animals_remaining, AnimalCounts::NONE);
        assert_eq!(report.estimate.capture_vehicles, 2);

        let captured: Vec<&str> = sim
            .timeline()
            .iter()
            .filter(|e| e.message.starts_with("captured a "))
            .map(|e| e.message.split_whitespace().nth(2).unwrap_or(""))
            .collect();
        assert_eq!(captured, vec!["dog", "dog", "cat"]);
    }

    #[test]
    fn strays_double_labor_and_raise_requests() {
        let mut animals = no_animals(3);
        animals[2] = AnimalCounts::new(1, 1, 1);
        let config = SimConfig { capture_vehicles: Some(0), ..test_config() };
        let mut sim = SimBuilder::new(config, line_graph())
            .initial_animals(animals)
            .migration_rule(wc_fauna::NoMigration)
            .build()
            .unwrap();
        sim.tick(&mut NoopObserver).unwrap();
        assert_eq!(sim.stats.capture_requests, 1);
        assert_eq!(sim.stats.pest_control_requests, 1);
        // Point 0: 3 + 10 (compaction); point 2: compaction 10, then 2 × 2 labor.
        assert_eq!(sim.clock.now(), Minute(13 + 10 + 4));
    }

    #[test]
    fn elastic_fleet_grows_up_to_cap() {
        let config = SimConfig {
            truck_capacity_m3: 1.0,
            elastic_fleet: true,
            max_trucks: 2,
            ..test_config()
        };
        let mut sim = SimBuilder::new(config, ring(8))
            .initial_animals(no_animals(8))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.trucks_used, 2);
        assert_eq!(report.stats.trucks_added, 1);
        assert!(sim.timeline().iter().any(|e| e.message.contains("truck 1 joins the fleet")));
    }

    #[test]
    fn fixed_fleet_never_grows() {
        let config = SimConfig { truck_capacity_m3: 1.0, ..test_config() };
        let mut sim = SimBuilder::new(config, ring(8))
            .initial_animals(no_animals(8))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.trucks_used, 1);
        assert_eq!(report.stats.trucks_added, 0);
    }

    #[test]
    fn run_twice_returns_same_report() {
        let mut sim = SimBuilder::new(test_config(), line_graph()).build().unwrap();
        let first = sim.run(&mut NoopObserver).unwrap();
        let len = sim.timeline().len();
        let second = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(first, second);
        assert_eq!(sim.timeline().len(), len);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn observer_sees_every_event_and_tick() {
        let mut obs = Counting::default();
        let mut sim = SimBuilder::new(test_config(), ring(10)).build().unwrap();
        let report = sim.run(&mut obs).unwrap();

        assert_eq!(obs.events.as_slice(), sim.timeline());
        assert_eq!(obs.tick_starts, report.ticks);
        assert_eq!(obs.tick_ends, report.ticks);
        assert_eq!(obs.ended, 1);
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use wc_core::Volume;

    use super::*;

    #[test]
    fn same_seed_same_timeline() {
        let config = SimConfig { seed: 99, elastic_fleet: true, ..test_config() };
        let mut a = SimBuilder::new(config.clone(), ring(15)).build().unwrap();
        let mut b = SimBuilder::new(config, ring(15)).build().unwrap();
        let ra = a.run(&mut NoopObserver).unwrap();
        let rb = b.run(&mut NoopObserver).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(a.timeline(), b.timeline());
    }

    #[test]
    fn waste_and_animals_are_conserved_every_tick() {
        let config = SimConfig { seed: 5, capture_capacity: 3, ..test_config() };
        let mut sim = SimBuilder::new(config, ring(20)).build().unwrap();
        let initial_animals = sim.store.animal_totals().total();

        while sim.tick(&mut NoopObserver).unwrap().is_none() {
            assert_eq!(sim.stats.gross_collected + sim.store.total_waste(), sim.initial_waste);
            assert_eq!(
                sim.store.animal_totals().total() + sim.stats.animals_captured,
                initial_animals
            );
            for t in &sim.trucks {
                assert!(t.current_volume() <= t.capacity());
                assert!(t.compaction_count() <= 3);
            }
        }

        let report = sim.run(&mut NoopObserver).unwrap();
        let delivered: Volume = sim.trucks.iter().map(|t| t.gross_delivered()).sum();
        assert_eq!(delivered, report.stats.gross_delivered);
        assert_eq!(delivered + report.waste_remaining, report.initial_waste);
        assert_eq!(report.stats.animals_delivered, report.stats.animals_captured);
    }

    #[test]
    fn timeline_is_chronological() {
        let config = SimConfig { seed: 3, elastic_fleet: true, ..test_config() };
        let mut sim = SimBuilder::new(config, ring(25)).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        let tl = sim.timeline();
        assert!(!tl.is_empty());
        assert!(tl.windows(2).all(|w| w[0].at <= w[1].at));
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;
    use wc_core::Volume;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Every litre taken from a point reaches the landfill by the end of
        /// the shift, whatever the seed and fleet shape.
        #[test]
        fn shift_delivers_what_it_collects(
            n in 3u32..16,
            seed in any::<u64>(),
            trucks in 1usize..4,
            elastic in any::<bool>(),
            budget in 30u64..600,
        ) {
            let config = SimConfig {
                seed,
                initial_trucks: trucks,
                elastic_fleet: elastic,
                budget_minutes: budget,
                ..test_config()
            };
            let mut sim = SimBuilder::new(config, ring(n)).build().unwrap();
            let report = sim.run(&mut NoopObserver).unwrap();

            prop_assert_eq!(report.stats.gross_delivered, report.stats.gross_collected);
            prop_assert_eq!(report.stats.gross_collected + report.waste_remaining, report.initial_waste);
            prop_assert!(sim.trucks.iter().all(|t| t.current_volume() == Volume::ZERO));
            prop_assert!(sim.timeline.windows(2).all(|w| w[0].at <= w[1].at));
            if report.outcome == RunOutcome::Completed {
                prop_assert_eq!(report.waste_remaining, Volume::ZERO);
            }
        }
    }
}
