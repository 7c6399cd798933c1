//! Routing trait, single-source cost tables, and the per-run route cache.
//!
//! # Pluggability
//!
//! `wc-sim` reaches routing through the [`Router`] trait, so callers can
//! swap in another single-source algorithm without touching the scheduler.
//! The default [`DijkstraRouter`] is sufficient for neighborhood-sized
//! graphs.
//!
//! # Cost units
//!
//! All costs are whole minutes (`u64`), the same unit as the sim clock, so a
//! route cost can be added to elapsed time without conversion.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use wc_core::PointId;

use crate::network::CollectionGraph;
use crate::{GraphError, GraphResult};

/// Distance sentinel for points not reachable from the origin.
const UNREACHABLE: u64 = u64::MAX;

// ── CostTable ─────────────────────────────────────────────────────────────────

/// Minimal travel cost from one origin to every point of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    origin: PointId,
    dist:   Vec<u64>,
}

impl CostTable {
    pub fn origin(&self) -> PointId {
        self.origin
    }

    /// Cost from the origin to `dest`, or `None` if `dest` is unreachable or
    /// not in the graph.
    #[inline]
    pub fn cost_to(&self, dest: PointId) -> Option<u64> {
        match self.dist.get(dest.index()) {
            Some(&d) if d != UNREACHABLE => Some(d),
            _ => None,
        }
    }

    /// `(destination, cost)` for every point, `None` where unreachable.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, Option<u64>)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .map(|(i, &d)| (PointId(i as u32), (d != UNREACHABLE).then_some(d)))
    }

    /// Number of points reachable from the origin (including itself).
    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable single-source shortest-path engine.
pub trait Router {
    /// Compute the cost from `origin` to every point of `graph`.
    ///
    /// Fails with [`GraphError::PointNotFound`] if `origin` is not a point
    /// of the graph.
    fn costs_from(&self, graph: &CollectionGraph, origin: PointId) -> GraphResult<CostTable>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR collection graph.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn costs_from(&self, graph: &CollectionGraph, origin: PointId) -> GraphResult<CostTable> {
        shortest_path_costs(graph, origin)
    }
}

/// Dijkstra from `origin`: the minimal cost to every destination.
///
/// Edge costs are non-negative by construction (the builder rejects
/// negative weights), which is what makes the stale-entry skip below sound.
pub fn shortest_path_costs(graph: &CollectionGraph, origin: PointId) -> GraphResult<CostTable> {
    if !graph.contains(origin) {
        return Err(GraphError::PointNotFound(origin));
    }

    // dist[v] = best known cost to reach v.
    let mut dist = vec![UNREACHABLE; graph.point_count()];
    dist[origin.index()] = 0;

    // Min-heap: (cost, point). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key PointId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u64, PointId)>> = BinaryHeap::new();
    heap.push(Reverse((0, origin)));

    while let Some(Reverse((cost, point))) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[point.index()] {
            continue;
        }

        for (neighbor, edge_cost) in graph.neighbors(point) {
            let new_cost = cost.saturating_add(edge_cost);
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Ok(CostTable { origin, dist })
}

// ── RouteCache ────────────────────────────────────────────────────────────────

/// Memoizes one [`CostTable`] per origin for the lifetime of a run.
///
/// The graph is undirected, so `cost(a, b) == cost(b, a)`.  A lookup reuses
/// a table rooted at *either* endpoint; in practice every landfill and
/// shelter trip is answered from the single table rooted at that
/// destination.
pub struct RouteCache<R: Router> {
    router: R,
    tables: FxHashMap<PointId, CostTable>,
}

impl<R: Router> RouteCache<R> {
    pub fn new(router: R) -> Self {
        Self { router, tables: FxHashMap::default() }
    }

    /// The cost table rooted at `origin`, computing it on first use.
    pub fn table(&mut self, graph: &CollectionGraph, origin: PointId) -> GraphResult<&CostTable> {
        if !self.tables.contains_key(&origin) {
            let table = self.router.costs_from(graph, origin)?;
            self.tables.insert(origin, table);
        }
        self.tables
            .get(&origin)
            .ok_or(GraphError::PointNotFound(origin))
    }

    /// Minimal travel cost between `from` and `to`.
    pub fn cost(&mut self, graph: &CollectionGraph, from: PointId, to: PointId) -> GraphResult<u64> {
        if !graph.contains(from) {
            return Err(GraphError::PointNotFound(from));
        }
        if let Some(table) = self.tables.get(&from) {
            return table.cost_to(to).ok_or(GraphError::NoRoute { from, to });
        }
        self.table(graph, to)?
            .cost_to(from)
            .ok_or(GraphError::NoRoute { from, to })
    }

    /// Number of origins with a cached table.
    pub fn cached_origins(&self) -> usize {
        self.tables.len()
    }
}
