//! Collection-point graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `PointId p`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ point_out_start[p] .. point_out_start[p+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_cost`) are sorted by
//! source point and indexed by `EdgeId`.  Within one point the edges it
//! declared itself come first, in declaration order, followed by roads
//! declared only from the other end.  Migration and the round-robin
//! distribution of fleeing animals depend on that order.
//!
//! # Symmetry
//!
//! The builder only accepts undirected roads ([`GraphBuilder::add_road`]),
//! so "A→B with cost c implies B→A with cost c" holds by construction and
//! is never re-checked at run time.

use rustc_hash::FxHashMap;

use wc_core::{EdgeId, PointId, Volume};

use crate::{GraphError, GraphResult};

// ── CollectionGraph ───────────────────────────────────────────────────────────

/// Undirected, weighted collection-point graph in CSR format.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`GraphBuilder`].
pub struct CollectionGraph {
    // ── Point data ────────────────────────────────────────────────────────
    /// Waste present at each point when the run starts.  Indexed by `PointId`.
    pub initial_waste: Vec<Volume>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of point `p` are at EdgeIds
    /// `point_out_start[p] .. point_out_start[p+1]`.
    /// Length = `point_count + 1`.
    pub point_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source point of each edge.
    pub edge_from: Vec<PointId>,

    /// Destination point of each edge.
    pub edge_to: Vec<PointId>,

    /// Travel cost of each edge, in minutes.
    pub edge_cost: Vec<u64>,
}

impl CollectionGraph {
    /// Construct an empty graph with no points or edges.
    pub fn empty() -> Self {
        CollectionGraph {
            initial_waste:   Vec::new(),
            point_out_start: vec![0],
            edge_from:       Vec::new(),
            edge_to:         Vec::new(),
            edge_cost:       Vec::new(),
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn point_count(&self) -> usize {
        self.initial_waste.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.initial_waste.is_empty()
    }

    /// `true` if `point` names a point of this graph.
    #[inline]
    pub fn contains(&self, point: PointId) -> bool {
        point.index() < self.point_count()
    }

    /// All point ids in declared order.
    pub fn points(&self) -> impl Iterator<Item = PointId> {
        (0..self.point_count() as u32).map(PointId)
    }

    /// Sum of the initial waste over every point.
    pub fn total_initial_waste(&self) -> Volume {
        self.initial_waste.iter().copied().sum()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `point`.
    ///
    /// This is a contiguous index range, no heap allocation.
    #[inline]
    pub fn out_edges(&self, point: PointId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.point_out_start[point.index()] as usize;
        let end   = self.point_out_start[point.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// `(neighbor, cost)` pairs of `point`, in declared order.
    #[inline]
    pub fn neighbors(&self, point: PointId) -> impl Iterator<Item = (PointId, u64)> + '_ {
        self.out_edges(point)
            .map(|e| (self.edge_to[e.index()], self.edge_cost[e.index()]))
    }

    /// Number of neighbors of `point`.
    #[inline]
    pub fn degree(&self, point: PointId) -> usize {
        let start = self.point_out_start[point.index()] as usize;
        let end   = self.point_out_start[point.index() + 1] as usize;
        end - start
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`CollectionGraph`] incrementally, then call
/// [`build`](Self::build).
///
/// Points and roads are accepted in any order and checked only at build
/// time, so a loader can add a road to a point it has not reached yet.
///
/// # Example
///
/// ```
/// use wc_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// let a = b.add_point(12.0);
/// let c = b.add_point(8.0);
/// b.add_road(a, c, 5);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.point_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // both directions
/// ```
pub struct GraphBuilder {
    waste_m3:  Vec<f64>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from:   PointId,
    to:     PointId,
    cost:   i64,
    /// The reverse direction of a road declared from the other end.
    mirror: bool,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { waste_m3: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of points and roads.
    pub fn with_capacity(points: usize, roads: usize) -> Self {
        Self {
            waste_m3:  Vec::with_capacity(points),
            raw_edges: Vec::with_capacity(roads * 2),
        }
    }

    /// Add a collection point holding `waste_m3` cubic metres and return
    /// its `PointId` (sequential from 0).
    pub fn add_point(&mut self, waste_m3: f64) -> PointId {
        let id = PointId(self.waste_m3.len() as u32);
        self.waste_m3.push(waste_m3);
        id
    }

    /// Add an undirected road between `a` and `b` costing `cost` minutes in
    /// either direction, declared from `a`'s side.
    ///
    /// Each point lists first the neighbors it declared itself, in call
    /// order, then the ones only reachable through roads declared from the
    /// other end, in call order.
    ///
    /// Declaring the same road again with the same cost is a no-op; with a
    /// different cost, `build` fails with [`GraphError::ConflictingEdge`].
    pub fn add_road(&mut self, a: PointId, b: PointId, cost: i64) {
        self.raw_edges.push(RawEdge { from: a, to: b, cost, mirror: false });
        self.raw_edges.push(RawEdge { from: b, to: a, cost, mirror: true });
    }

    pub fn point_count(&self) -> usize { self.waste_m3.len() }

    /// Consume the builder, validate its contents, and produce a
    /// [`CollectionGraph`].
    ///
    /// Fails on unknown endpoints, negative costs, self-loops, conflicting
    /// duplicate roads, and negative or non-finite waste volumes.
    pub fn build(self) -> GraphResult<CollectionGraph> {
        let point_count = self.waste_m3.len();

        let initial_waste = self
            .waste_m3
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                Volume::from_m3(value).map_err(|_| GraphError::InvalidWaste {
                    point: PointId(i as u32),
                    value,
                })
            })
            .collect::<GraphResult<Vec<Volume>>>()?;
        // Waste only ever moves out of points, so every later total fits too.
        if Volume::checked_sum(initial_waste.iter().copied()).is_none() {
            return Err(GraphError::WasteOverflow);
        }

        // Validate and de-duplicate.  Own declarations go first so a point's
        // row follows its own declaration order; mirrors only fill in roads
        // the point never declared.
        let mut seen: FxHashMap<(PointId, PointId), u64> = FxHashMap::default();
        let mut edges: Vec<(PointId, PointId, u64)> = Vec::with_capacity(self.raw_edges.len());

        let own = self.raw_edges.iter().filter(|e| !e.mirror);
        let mirrored = self.raw_edges.iter().filter(|e| e.mirror);
        for e in own.chain(mirrored) {
            for p in [e.from, e.to] {
                if p.index() >= point_count {
                    return Err(GraphError::PointNotFound(p));
                }
            }
            if e.from == e.to {
                return Err(GraphError::SelfLoop(e.from));
            }
            if e.cost < 0 {
                return Err(GraphError::NegativeWeight { from: e.from, to: e.to, cost: e.cost });
            }
            let cost = e.cost as u64;
            match seen.get(&(e.from, e.to)) {
                Some(&first) if first == cost => continue,
                Some(&first) => {
                    return Err(GraphError::ConflictingEdge {
                        a: e.from,
                        b: e.to,
                        first,
                        second: cost,
                    });
                }
                None => {
                    seen.insert((e.from, e.to), cost);
                    edges.push((e.from, e.to, cost));
                }
            }
        }

        // Stable sort keeps own-then-mirror order within each source point.
        edges.sort_by_key(|&(from, _, _)| from.0);

        let edge_from: Vec<PointId> = edges.iter().map(|e| e.0).collect();
        let edge_to:   Vec<PointId> = edges.iter().map(|e| e.1).collect();
        let edge_cost: Vec<u64>     = edges.iter().map(|e| e.2).collect();

        // Build CSR row pointer (point_out_start).
        let mut point_out_start = vec![0u32; point_count + 1];
        for &(from, _, _) in &edges {
            point_out_start[from.index() + 1] += 1;
        }
        for i in 1..=point_count {
            point_out_start[i] += point_out_start[i - 1];
        }
        debug_assert_eq!(point_out_start[point_count] as usize, edges.len());

        Ok(CollectionGraph {
            initial_waste,
            point_out_start,
            edge_from,
            edge_to,
            edge_cost,
        })
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
