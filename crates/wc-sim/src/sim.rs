//! The `Sim` struct and its tick loop.

use tracing::{debug, info, warn};

use wc_core::{AnimalKind, CaptureId, PointId, SimClock, SimConfig, TruckId, Volume};
use wc_fauna::{migrate, MigrationRule};
use wc_fleet::{CaptureVehicle, CollectContext, LogEntry, Truck};
use wc_graph::{CollectionGraph, RouteCache, Router};
use wc_points::PointStore;

use crate::{
    EventSource, ResourceEstimate, RunOutcome, RunReport, RunStatistics, SimObserver, SimResult,
    TimelineEvent,
};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<R, M>` holds all run state and drives the tick loop:
///
/// 1. **Done?** stop with [`RunOutcome::Completed`] once every point is clean.
/// 2. **Collect**: each truck, in fleet order, works each point with waste,
///    in declared order.  The clock advances by what each visit cost.
/// 3. **Grow**: if a truck ended up full or had to unload mid-collection,
///    add one truck (bounded by `max_trucks`, only with `elastic_fleet`).
/// 4. **Migrate**: one two-phase migration pass under rule `M`.
/// 5. **Capture**: each capture vehicle takes dogs, then cats, point by
///    point, unloading at the shelter whenever it fills up.
/// 6. **Budget**: stop with [`RunOutcome::BudgetExceeded`] once the clock
///    has reached the budget with waste left.
///
/// Collection and capture stop issuing new visits as soon as the clock
/// reaches the budget, so the overrun is at most one visit.  After the loop
/// every vehicle still carrying a load unloads.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router, M: MigrationRule> {
    /// Run configuration.
    pub config: SimConfig,

    /// Static topology.
    pub graph: CollectionGraph,

    /// Waste and animals per point.
    pub store: PointStore,

    /// The shared clock.  Only the scheduler advances it.
    pub clock: SimClock,

    /// Collection fleet in insertion order.
    pub trucks: Vec<Truck>,

    /// Capture fleet in insertion order.
    pub captures: Vec<CaptureVehicle>,

    /// Memoized travel costs; landfill and shelter lookups hit one table each.
    pub routes: RouteCache<R>,

    /// Decides which animals leave a point.
    pub rule: M,

    pub landfill: PointId,
    pub shelter:  PointId,

    /// Every event of the run, in order.
    pub timeline: Vec<TimelineEvent>,

    /// Cumulative counters.
    pub stats: RunStatistics,

    /// Ticks completed so far.
    pub ticks: u64,

    /// Total waste when the run started.
    pub initial_waste: Volume,

    /// Set once `run` has finished.
    pub(crate) report: Option<RunReport>,
}

impl<R: Router, M: MigrationRule> Sim<R, M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run ticks until the work is done or the budget is spent, unload every
    /// vehicle, and return the report.
    ///
    /// Calling `run` again after it has finished returns the same report
    /// without doing anything.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        if let Some(report) = &self.report {
            return Ok(report.clone());
        }
        let outcome = loop {
            if let Some(outcome) = self.tick(observer)? {
                break outcome;
            }
        };
        info!(%outcome, ticks = self.ticks, now = %self.clock, "shift over");

        self.end_of_shift(observer)?;

        let report = self.build_report(outcome);
        observer.on_sim_end(&report);
        self.report = Some(report.clone());
        Ok(report)
    }

    /// Run a single tick.
    ///
    /// Returns `Some(outcome)` when the run should stop (checked before and
    /// after the tick's work), `None` otherwise.  Does not unload vehicles;
    /// [`run`](Self::run) does that once at the end.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<RunOutcome>> {
        if self.store.all_clean() {
            return Ok(Some(RunOutcome::Completed));
        }
        if self.out_of_time() {
            return Ok(Some(RunOutcome::BudgetExceeded));
        }
        if self.ticks >= self.config.max_ticks {
            warn!(max_ticks = self.config.max_ticks, "tick cap reached with waste left");
            return Ok(Some(RunOutcome::BudgetExceeded));
        }

        let tick = self.ticks;
        observer.on_tick_start(tick, self.clock.now());
        debug!(tick, now = %self.clock, remaining = %self.store.total_waste(), "tick start");

        let overflowed = self.collect_phase(observer)?;
        if overflowed {
            self.grow_fleet(observer);
        }
        self.migration_phase(observer);
        self.capture_phase(observer)?;

        observer.on_tick_end(tick, self.clock.now());
        self.ticks += 1;

        if self.out_of_time() && !self.store.all_clean() {
            return Ok(Some(RunOutcome::BudgetExceeded));
        }
        Ok(None)
    }

    /// Every event so far, in order.
    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Returns `true` if any truck overflowed (ended full, or was forced to
    /// unload before it could take a point's waste).
    fn collect_phase<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        let mut overflowed = false;

        for t in 0..self.trucks.len() {
            for i in 0..self.graph.point_count() {
                let p = PointId(i as u32);
                if self.out_of_time() {
                    return Ok(overflowed);
                }
                if self.store.waste(p).is_zero() {
                    continue;
                }
                let truck_id = self.trucks[t].id();
                self.log_service_requests(truck_id, p, observer);

                let ctx = CollectContext {
                    now:                 self.clock.now(),
                    landfill:            self.landfill,
                    landfill_minutes:    self.routes.cost(&self.graph, p, self.landfill)?,
                    compaction_minutes:  self.config.compaction_minutes,
                    interference_factor: self.config.interference_factor,
                };

                let truck = &mut self.trucks[t];
                let mark = truck.log().len();
                let delivered_before = truck.gross_delivered();
                let out = truck.collect(self.store.slot(p), &ctx);
                let entries = truck.log().since(mark).to_vec();
                let delivered = truck.gross_delivered() - delivered_before;
                overflowed |= out.unloaded || truck.is_full();

                self.clock.advance(out.minutes);
                self.stats.gross_collected += out.collected;
                self.stats.gross_delivered += delivered;
                self.stats.compactions += out.compactions;
                self.stats.truck_unloads += u32::from(out.unloaded);

                self.emit_all(EventSource::Truck(truck_id), entries, observer);
                self.emit(
                    EventSource::Scheduler,
                    format!("{truck_id} spent {} min at {p}", out.minutes),
                    observer,
                );
            }
        }
        Ok(overflowed)
    }

    fn grow_fleet<O: SimObserver>(&mut self, observer: &mut O) {
        if !self.config.elastic_fleet || self.trucks.len() >= self.config.max_trucks {
            return;
        }
        let id = TruckId(self.trucks.len() as u32);
        self.trucks.push(Truck::new(
            id,
            self.config.truck_capacity(),
            self.config.staff_per_truck,
            self.landfill,
        ));
        self.stats.trucks_added += 1;
        info!(truck = %id, fleet = self.trucks.len(), "fleet grown after overflow");
        self.emit(
            EventSource::Scheduler,
            format!("overflow detected, {id} joins the fleet ({} trucks)", self.trucks.len()),
            observer,
        );
    }

    fn migration_phase<O: SimObserver>(&mut self, observer: &mut O) {
        let moves = migrate(&self.graph, &mut self.store, &self.rule);
        for m in moves {
            self.stats.animals_migrated += m.count;
            self.emit(
                EventSource::Scheduler,
                format!("{} {} moved from {} to {}", m.count, plural(m.kind, m.count), m.from, m.to),
                observer,
            );
        }
    }

    fn capture_phase<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        for c in 0..self.captures.len() {
            for i in 0..self.graph.point_count() {
                let p = PointId(i as u32);
                if !self.store.animals(p).any_capturable() {
                    continue;
                }
                for kind in AnimalKind::CAPTURABLE {
                    while self.store.animals(p).has(kind) {
                        if self.out_of_time() {
                            return Ok(());
                        }
                        if !self.capture_one(c, kind, p, observer)? {
                            break;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn capture_one<O: SimObserver>(
        &mut self,
        c:        usize,
        kind:     AnimalKind,
        p:        PointId,
        observer: &mut O,
    ) -> SimResult<bool> {
        let vehicle = &mut self.captures[c];
        let id = vehicle.id();
        let mark = vehicle.log().len();

        if let Err(e) = vehicle.capture(kind, p, self.store.animals_mut(p), self.clock.now()) {
            debug!(vehicle = %id, error = %e, "capture refused");
            return Ok(false);
        }
        self.clock.advance(self.config.capture_minutes);
        self.stats.animals_captured += 1;

        if self.captures[c].is_full() {
            let travel = self.routes.cost(&self.graph, p, self.shelter)?;
            let at = self.clock.advance(travel);
            let n = self.captures[c].unload(at, self.shelter);
            self.stats.animals_delivered += n;
            self.stats.capture_unloads += 1;
        }

        let entries = self.captures[c].log().since(mark).to_vec();
        self.emit_all(EventSource::Capture(id), entries, observer);
        Ok(true)
    }

    /// Send every vehicle still carrying a load to be emptied.
    fn end_of_shift<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        for t in 0..self.trucks.len() {
            if !self.trucks[t].has_load() {
                continue;
            }
            let travel = self.routes.cost(&self.graph, self.trucks[t].location(), self.landfill)?;
            let at = self.clock.advance(travel);
            let truck = &mut self.trucks[t];
            let mark = truck.log().len();
            if let Some(v) = truck.unload(at, self.landfill) {
                self.stats.gross_delivered += v;
                self.stats.truck_unloads += 1;
            }
            let entries = truck.log().since(mark).to_vec();
            self.emit_all(EventSource::Truck(TruckId(t as u32)), entries, observer);
        }

        for c in 0..self.captures.len() {
            if self.captures[c].held() == 0 {
                continue;
            }
            let travel = self.routes.cost(&self.graph, self.captures[c].location(), self.shelter)?;
            let at = self.clock.advance(travel);
            let vehicle = &mut self.captures[c];
            let mark = vehicle.log().len();
            let n = vehicle.unload(at, self.shelter);
            self.stats.animals_delivered += n;
            self.stats.capture_unloads += 1;
            let entries = vehicle.log().since(mark).to_vec();
            self.emit_all(EventSource::Capture(CaptureId(c as u32)), entries, observer);
        }
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    #[inline]
    fn out_of_time(&self) -> bool {
        self.clock.exhausted(self.config.budget_minutes)
    }

    /// A truck about to work `p` reports strays it sees there.
    fn log_service_requests<O: SimObserver>(&mut self, truck: TruckId, p: PointId, observer: &mut O) {
        let animals = *self.store.animals(p);
        if animals.any_capturable() {
            self.stats.capture_requests += 1;
            self.emit(
                EventSource::Truck(truck),
                format!("requests animal capture at {p} ({})", animals.describe()),
                observer,
            );
        }
        if animals.all_kinds() {
            self.stats.pest_control_requests += 1;
            self.emit(
                EventSource::Truck(truck),
                format!("requests pest control at {p}: rodents, cats and dogs together"),
                observer,
            );
        }
    }

    fn emit<O: SimObserver>(&mut self, source: EventSource, message: String, observer: &mut O) {
        let event = TimelineEvent { at: self.clock.now(), source, message };
        observer.on_event(&event);
        self.timeline.push(event);
    }

    fn emit_all<O: SimObserver>(&mut self, source: EventSource, entries: Vec<LogEntry>, observer: &mut O) {
        for LogEntry { at, text } in entries {
            let event = TimelineEvent { at, source, message: text };
            observer.on_event(&event);
            self.timeline.push(event);
        }
    }

    fn build_report(&self, outcome: RunOutcome) -> RunReport {
        RunReport {
            outcome,
            minutes: self.clock.now(),
            ticks: self.ticks,
            trucks_used: self.trucks.len(),
            capture_vehicles_used: self.captures.len(),
            initial_waste: self.initial_waste,
            stats: self.stats.clone(),
            waste_remaining: self.store.total_waste(),
            animals_remaining: self.store.animal_totals(),
            estimate: ResourceEstimate::from_run(
                self.trucks.len(),
                self.config.staff_per_truck,
                self.stats.animals_captured,
                self.config.capture_capacity,
            ),
        }
    }
}

fn plural(kind: AnimalKind, n: u32) -> String {
    if n == 1 {
        kind.as_str().to_owned()
    } else {
        format!("{}s", kind.as_str())
    }
}
