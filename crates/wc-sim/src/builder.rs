//! Fluent builder for constructing a [`Sim`].

use wc_core::{AnimalCounts, CaptureId, PointId, SimClock, SimConfig, SimRng, TruckId};
use wc_fauna::{spawn_animals, DominanceRule, MigrationRule};
use wc_fleet::{CaptureVehicle, Truck};
use wc_graph::{CollectionGraph, DijkstraRouter, RouteCache, Router};
use wc_points::PointStore;

use crate::{RunStatistics, Sim, SimError, SimResult};

/// Points with animals per capture vehicle when the fleet is sized
/// automatically.
const POINTS_PER_CAPTURE_VEHICLE: usize = 5;

/// Fluent builder for [`Sim<R, M>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: budget, seed, fleet sizes, …
/// - [`CollectionGraph`]: from [`wc_graph::GraphBuilder`] or the loader
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                     |
/// |------------------------|---------------------------------------------|
/// | `.landfill(p)`         | `PointId(0)`                                |
/// | `.shelter(p)`          | the landfill                                |
/// | `.initial_animals(v)`  | seeded spawn from `config.spawn`            |
/// | `.router(r)`           | [`DijkstraRouter`]                          |
/// | `.migration_rule(m)`   | [`DominanceRule`]                           |
///
/// # Example
///
/// ```rust,ignore
/// let graph = load_graph_path(path)?;
/// let mut sim = SimBuilder::new(config, graph)
///     .landfill(PointId(0))
///     .shelter(PointId(3))
///     .build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: Router = DijkstraRouter, M: MigrationRule = DominanceRule> {
    config:   SimConfig,
    graph:    CollectionGraph,
    landfill: PointId,
    shelter:  Option<PointId>,
    animals:  Option<Vec<AnimalCounts>>,
    router:   R,
    rule:     M,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, graph: CollectionGraph) -> Self {
        Self {
            config,
            graph,
            landfill: PointId(0),
            shelter:  None,
            animals:  None,
            router:   DijkstraRouter,
            rule:     DominanceRule,
        }
    }
}

impl<R: Router, M: MigrationRule> SimBuilder<R, M> {
    /// Where trucks unload.
    pub fn landfill(mut self, point: PointId) -> Self {
        self.landfill = point;
        self
    }

    /// Where capture vehicles unload.
    pub fn shelter(mut self, point: PointId) -> Self {
        self.shelter = Some(point);
        self
    }

    /// Supply the starting animal counts instead of spawning them (must be
    /// length `point_count`).
    pub fn initial_animals(mut self, animals: Vec<AnimalCounts>) -> Self {
        self.animals = Some(animals);
        self
    }

    /// Replace the routing algorithm.
    pub fn router<R2: Router>(self, router: R2) -> SimBuilder<R2, M> {
        SimBuilder {
            config:   self.config,
            graph:    self.graph,
            landfill: self.landfill,
            shelter:  self.shelter,
            animals:  self.animals,
            router,
            rule:     self.rule,
        }
    }

    /// Replace the migration rule.
    pub fn migration_rule<M2: MigrationRule>(self, rule: M2) -> SimBuilder<R, M2> {
        SimBuilder {
            config:   self.config,
            graph:    self.graph,
            landfill: self.landfill,
            shelter:  self.shelter,
            animals:  self.animals,
            router:   self.router,
            rule,
        }
    }

    /// Validate inputs, populate the points, size both fleets, and return a
    /// ready-to-run [`Sim`].
    ///
    /// Fails if the configuration is invalid, the landfill or shelter is
    /// not a point, or a point that needs service cannot reach them.
    pub fn build(self) -> SimResult<Sim<R, M>> {
        self.config.validate()?;
        let graph = self.graph;
        let landfill = self.landfill;
        let shelter = self.shelter.unwrap_or(landfill);

        // ── Validate service points ───────────────────────────────────────
        if !graph.contains(landfill) {
            return Err(SimError::UnknownPoint { role: "landfill", point: landfill });
        }
        if !graph.contains(shelter) {
            return Err(SimError::UnknownPoint { role: "shelter", point: shelter });
        }

        // ── Point state ───────────────────────────────────────────────────
        let mut store = PointStore::from_graph(&graph);
        match self.animals {
            Some(a) => {
                if a.len() != graph.point_count() {
                    return Err(SimError::PointCountMismatch {
                        expected: graph.point_count(),
                        got:      a.len(),
                        what:     "initial animals",
                    });
                }
                store.animals = a;
            }
            None => {
                let mut rng = SimRng::new(self.config.seed);
                spawn_animals(&mut store, &self.config.spawn, &mut rng);
            }
        }

        // ── Reachability ──────────────────────────────────────────────────
        //
        // Animals only migrate along roads, so a capturable animal stays in
        // its starting component for the whole run.
        let mut routes = RouteCache::new(self.router);
        for p in store.point_ids() {
            if !store.waste(p).is_zero() && routes.cost(&graph, p, landfill).is_err() {
                return Err(SimError::Unreachable { role: "landfill", from: p, to: landfill });
            }
            if store.animals(p).any_capturable() && routes.cost(&graph, p, shelter).is_err() {
                return Err(SimError::Unreachable { role: "shelter", from: p, to: shelter });
            }
        }

        // ── Fleets ────────────────────────────────────────────────────────
        let capacity = self.config.truck_capacity();
        let trucks = (0..self.config.initial_trucks)
            .map(|i| Truck::new(TruckId(i as u32), capacity, self.config.staff_per_truck, landfill))
            .collect();

        let capture_count = self
            .config
            .capture_vehicles
            .unwrap_or_else(|| (store.points_with_animals() / POINTS_PER_CAPTURE_VEHICLE).max(1));
        let captures = (0..capture_count)
            .map(|i| CaptureVehicle::new(CaptureId(i as u32), self.config.capture_capacity, shelter))
            .collect();

        Ok(Sim {
            initial_waste: store.total_waste(),
            config: self.config,
            graph,
            store,
            clock: SimClock::new(),
            trucks,
            captures,
            routes,
            rule: self.rule,
            landfill,
            shelter,
            timeline: Vec::new(),
            stats: RunStatistics::default(),
            ticks: 0,
            report: None,
        })
    }
}
