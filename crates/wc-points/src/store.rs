//! `PointStore` (SoA point state) and `PointSlot` (one point, mutably).

use wc_core::{AnimalCounts, AnimalKind, PointId, Volume};
use wc_graph::CollectionGraph;

// ── PointStore ────────────────────────────────────────────────────────────────

/// Mutable state of every collection point.
///
/// Both `Vec` fields have exactly one element per graph point; the
/// `PointId` value is the index into them:
///
/// ```ignore
/// let w = store.waste[point.index()];
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointStore {
    /// Waste currently waiting at each point.
    pub waste: Vec<Volume>,

    /// Animal head counts at each point.
    pub animals: Vec<AnimalCounts>,
}

impl PointStore {
    /// Fresh state for `graph`: initial waste, no animals.
    pub fn from_graph(graph: &CollectionGraph) -> Self {
        Self {
            waste:   graph.initial_waste.clone(),
            animals: vec![AnimalCounts::NONE; graph.point_count()],
        }
    }

    pub fn len(&self) -> usize {
        self.waste.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waste.is_empty()
    }

    /// All point ids in ascending (declared) order.
    pub fn point_ids(&self) -> impl Iterator<Item = PointId> {
        (0..self.waste.len() as u32).map(PointId)
    }

    #[inline]
    pub fn waste(&self, point: PointId) -> Volume {
        self.waste[point.index()]
    }

    #[inline]
    pub fn animals(&self, point: PointId) -> &AnimalCounts {
        &self.animals[point.index()]
    }

    #[inline]
    pub fn animals_mut(&mut self, point: PointId) -> &mut AnimalCounts {
        &mut self.animals[point.index()]
    }

    /// Borrow one point's waste and animals together.
    ///
    /// This is what a vehicle receives while it works a point.
    #[inline]
    pub fn slot(&mut self, point: PointId) -> PointSlot<'_> {
        PointSlot {
            id:      point,
            waste:   &mut self.waste[point.index()],
            animals: &mut self.animals[point.index()],
        }
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    /// `true` once every point reports zero waste.
    pub fn all_clean(&self) -> bool {
        self.waste.iter().all(|w| w.is_zero())
    }

    pub fn total_waste(&self) -> Volume {
        self.waste.iter().copied().sum()
    }

    /// Per-kind totals over every point.
    pub fn animal_totals(&self) -> AnimalCounts {
        let mut totals = AnimalCounts::NONE;
        for counts in &self.animals {
            totals += *counts;
        }
        totals
    }

    /// Number of points with at least one animal of any kind.
    pub fn points_with_animals(&self) -> usize {
        self.animals.iter().filter(|a| a.any()).count()
    }

    /// Points holding at least one animal of `kind`, in declared order.
    pub fn points_with(&self, kind: AnimalKind) -> impl Iterator<Item = PointId> + '_ {
        self.animals
            .iter()
            .enumerate()
            .filter(move |(_, a)| a.has(kind))
            .map(|(i, _)| PointId(i as u32))
    }
}

// ── PointSlot ─────────────────────────────────────────────────────────────────

/// Exclusive view of a single point's mutable state.
pub struct PointSlot<'a> {
    pub id:      PointId,
    pub waste:   &'a mut Volume,
    pub animals: &'a mut AnimalCounts,
}
