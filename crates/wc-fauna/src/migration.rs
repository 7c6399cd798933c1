//! Migration rules and the plan/apply pass.

use wc_core::{AnimalCounts, AnimalKind, PointId, Volume};
use wc_graph::CollectionGraph;
use wc_points::PointStore;

// ── Migration ─────────────────────────────────────────────────────────────────

/// `count` animals of `kind` moving from `from` to the neighbor `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Migration {
    pub from:  PointId,
    pub to:    PointId,
    pub kind:  AnimalKind,
    pub count: u32,
}

// ── Rules ─────────────────────────────────────────────────────────────────────

/// Decides which animals leave a point during one migration pass.
///
/// Implementations only see the point's own counts and waste; spreading
/// the leavers over neighbors is done by [`plan_migrations`].
pub trait MigrationRule {
    /// Per-kind counts that leave a point holding `animals` and `waste`.
    /// Each returned count must not exceed the corresponding input count.
    fn leaving(&self, animals: &AnimalCounts, waste: Volume) -> AnimalCounts;
}

/// Default rule: every kind leaves a point with no waste left; otherwise a
/// kind flees whenever a strictly more dominant kind is present.
pub struct DominanceRule;

impl MigrationRule for DominanceRule {
    fn leaving(&self, animals: &AnimalCounts, waste: Volume) -> AnimalCounts {
        if waste.is_zero() {
            return *animals;
        }
        let mut out = AnimalCounts::NONE;
        for kind in AnimalKind::ALL {
            let chased = AnimalKind::ALL
                .iter()
                .any(|&other| other.dominance() > kind.dominance() && animals.has(other));
            if chased {
                out.set(kind, animals.get(kind));
            }
        }
        out
    }
}

/// A rule under which nothing ever moves.
pub struct NoMigration;

impl MigrationRule for NoMigration {
    fn leaving(&self, _animals: &AnimalCounts, _waste: Volume) -> AnimalCounts {
        AnimalCounts::NONE
    }
}

// ── Plan / apply ──────────────────────────────────────────────────────────────

/// Decide every move of one pass against the current counts, without
/// changing them.
///
/// Leavers of each kind are dealt round-robin over the point's neighbors in
/// declared order, one animal per neighbor per round.  Points without
/// neighbors keep their animals.
pub fn plan_migrations<M: MigrationRule + ?Sized>(
    graph: &CollectionGraph,
    store: &PointStore,
    rule:  &M,
) -> Vec<Migration> {
    let mut moves = Vec::new();
    for from in store.point_ids() {
        let animals = store.animals(from);
        if !animals.any() {
            continue;
        }
        let degree = graph.degree(from) as u32;
        if degree == 0 {
            continue;
        }
        let leaving = rule.leaving(animals, store.waste(from));
        for (kind, n) in leaving.iter() {
            let n = n.min(animals.get(kind));
            if n == 0 {
                continue;
            }
            let (base, extra) = (n / degree, n % degree);
            for (i, (to, _)) in graph.neighbors(from).enumerate() {
                let count = base + u32::from((i as u32) < extra);
                if count > 0 {
                    moves.push(Migration { from, to, kind, count });
                }
            }
        }
    }
    moves
}

/// Carry out planned moves.
pub fn apply_migrations(store: &mut PointStore, moves: &[Migration]) {
    for m in moves {
        let removed = store.animals_mut(m.from).remove(m.kind, m.count);
        debug_assert_eq!(removed, m.count, "migration plan out of date");
        store.animals_mut(m.to).add(m.kind, removed);
    }
}

/// Plan and apply one migration pass; returns the moves made.
pub fn migrate<M: MigrationRule + ?Sized>(
    graph: &CollectionGraph,
    store: &mut PointStore,
    rule:  &M,
) -> Vec<Migration> {
    let moves = plan_migrations(graph, store, rule);
    apply_migrations(store, &moves);
    moves
}
