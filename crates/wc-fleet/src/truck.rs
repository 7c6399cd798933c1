//! Waste-collection truck.
//!
//! # State machine
//!
//! ```text
//! Collecting ──(overflow, count < 3)──▶ Compacting ──▶ Collecting
//!     │                                                    ▲
//!     └──(overflow, no room after compacting)──▶ Unloading ┘
//! ```
//!
//! Two volumes are tracked.  `current_volume` is what physically sits in
//! the truck and shrinks on compaction.  `gross_on_board` counts the waste
//! as it was taken from the points and is never compacted; on unload it
//! moves into `gross_delivered`.  The gross figures are what the
//! conservation totals are built from.

use wc_core::{Minute, PointId, TruckId, Volume};
use wc_points::PointSlot;

use crate::EventLog;

/// Compactions allowed between two unloads.
pub const MAX_COMPACTIONS: u8 = 3;

// ── CollectContext ────────────────────────────────────────────────────────────

/// Everything `collect` needs besides the point itself.
#[derive(Clone, Copy, Debug)]
pub struct CollectContext {
    /// Clock value when the truck starts working the point.
    pub now: Minute,

    /// Where unloads happen.
    pub landfill: PointId,

    /// Travel cost from the point being worked to the landfill.
    pub landfill_minutes: u64,

    /// Time one compaction takes.
    pub compaction_minutes: u64,

    /// Labor multiplier applied when any animal is at the point.
    pub interference_factor: u64,
}

/// What one `collect` call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollectOutcome {
    /// Total minutes consumed: labor, compactions, landfill travel.
    pub minutes: u64,

    /// Labor minutes alone (already multiplied by interference).
    pub labor_minutes: u64,

    /// Volume taken from the point.
    pub collected: Volume,

    /// Compactions performed during the call.
    pub compactions: u32,

    /// `true` if the truck went to the landfill during the call.
    pub unloaded: bool,
}

// ── Truck ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Truck {
    id:               TruckId,
    capacity:         Volume,
    staff:            u32,
    current_volume:   Volume,
    compaction_count: u8,
    location:         PointId,
    gross_on_board:   Volume,
    gross_delivered:  Volume,
    log:              EventLog,
}

impl Truck {
    /// A new, empty truck parked at `home`.
    ///
    /// # Panics
    /// Panics if `capacity` is zero or `staff` is zero.
    pub fn new(id: TruckId, capacity: Volume, staff: u32, home: PointId) -> Self {
        assert!(!capacity.is_zero(), "truck capacity must be positive");
        assert!(staff > 0, "truck staff must be positive");
        Self {
            id,
            capacity,
            staff,
            current_volume:   Volume::ZERO,
            compaction_count: 0,
            location:         home,
            gross_on_board:   Volume::ZERO,
            gross_delivered:  Volume::ZERO,
            log:              EventLog::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> TruckId { self.id }
    pub fn capacity(&self) -> Volume { self.capacity }
    pub fn staff(&self) -> u32 { self.staff }
    pub fn current_volume(&self) -> Volume { self.current_volume }
    pub fn compaction_count(&self) -> u8 { self.compaction_count }
    pub fn location(&self) -> PointId { self.location }
    pub fn gross_on_board(&self) -> Volume { self.gross_on_board }
    pub fn gross_delivered(&self) -> Volume { self.gross_delivered }
    pub fn log(&self) -> &EventLog { &self.log }

    /// `true` when no more waste fits without compacting or unloading.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.current_volume >= self.capacity
    }

    /// `true` while the truck carries anything that would need unloading.
    #[inline]
    pub fn has_load(&self) -> bool {
        !self.current_volume.is_zero()
    }

    #[inline]
    pub fn can_compact(&self) -> bool {
        self.compaction_count < MAX_COMPACTIONS
    }

    #[inline]
    fn room(&self) -> Volume {
        self.capacity.saturating_sub(self.current_volume)
    }

    fn check_invariants(&self) {
        assert!(
            self.current_volume <= self.capacity,
            "{} holds {} over its capacity {}",
            self.id,
            self.current_volume,
            self.capacity
        );
        assert!(self.compaction_count <= MAX_COMPACTIONS);
        assert_eq!(
            self.current_volume.is_zero(),
            self.gross_on_board.is_zero(),
            "{} lost track of its load",
            self.id
        );
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Work the point in `slot`: compact or unload first if its waste would
    /// overflow, take as much as fits, and compact again if that left the
    /// truck exactly full.
    ///
    /// Never touches the clock; the returned outcome says how long it took.
    pub fn collect(&mut self, slot: PointSlot<'_>, ctx: &CollectContext) -> CollectOutcome {
        let mut out = CollectOutcome::default();
        let waste = *slot.waste;
        if waste.is_zero() {
            return out;
        }

        out.labor_minutes = waste.labor_minutes(self.staff);
        if slot.animals.any() {
            out.labor_minutes *= ctx.interference_factor;
        }

        if self.current_volume + waste > self.capacity && !self.current_volume.is_zero() {
            if self.compact(ctx.now + out.minutes) {
                out.minutes += ctx.compaction_minutes;
                out.compactions += 1;
            }
            if self.current_volume + waste > self.capacity {
                out.minutes += ctx.landfill_minutes;
                self.unload(ctx.now + out.minutes, ctx.landfill);
                out.unloaded = true;
            }
        }

        let amount = waste.min(self.room());
        *slot.waste -= amount;
        self.current_volume += amount;
        self.gross_on_board += amount;
        self.location = slot.id;
        out.collected = amount;
        out.minutes += out.labor_minutes;
        self.check_invariants();
        self.log.push(
            ctx.now + out.minutes,
            format!(
                "collected {} at {}, {} left there, load {}",
                amount, slot.id, *slot.waste, self.current_volume
            ),
        );

        if self.is_full() && self.compact(ctx.now + out.minutes) {
            out.minutes += ctx.compaction_minutes;
            out.compactions += 1;
        }

        out
    }

    /// Compress the load to a third.  Returns `false` (and does nothing)
    /// once the truck has compacted [`MAX_COMPACTIONS`] times since its last
    /// unload, or when it is empty.
    ///
    /// A load never compacts below one litre, so a truck holding collected
    /// waste always has a nonzero volume to unload.
    pub fn compact(&mut self, at: Minute) -> bool {
        if !self.can_compact() || self.current_volume.is_zero() {
            return false;
        }
        self.current_volume = self.current_volume.third().max(Volume(1));
        self.compaction_count += 1;
        self.check_invariants();
        self.log.push(
            at,
            format!(
                "compacted load ({}/{}), now {}",
                self.compaction_count, MAX_COMPACTIONS, self.current_volume
            ),
        );
        true
    }

    /// Empty the truck at `landfill`.  The caller has already accounted for
    /// the travel there.
    ///
    /// Returns the gross (pre-compaction) volume delivered, or `None` with
    /// no state change when the truck is already empty.
    pub fn unload(&mut self, at: Minute, landfill: PointId) -> Option<Volume> {
        if !self.has_load() {
            return None;
        }
        let delivered = self.gross_on_board;
        self.log.push(
            at,
            format!(
                "unloaded {} ({} before compaction) at the landfill, {}",
                self.current_volume, delivered, landfill
            ),
        );
        self.gross_delivered += delivered;
        self.gross_on_board = Volume::ZERO;
        self.current_volume = Volume::ZERO;
        self.compaction_count = 0;
        self.location = landfill;
        Some(delivered)
    }
}
