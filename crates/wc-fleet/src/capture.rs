//! Animal-capture vehicle.
//!
//! `Capturing ──(held == capacity)──▶ Unloading ──▶ Capturing`

use wc_core::{AnimalCounts, AnimalKind, CaptureId, Minute, PointId};

use crate::{EventLog, FleetError, FleetResult};

#[derive(Clone, Debug)]
pub struct CaptureVehicle {
    id:        CaptureId,
    capacity:  u32,
    held:      u32,
    location:  PointId,
    captured:  u32,
    delivered: u32,
    log:       EventLog,
}

impl CaptureVehicle {
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(id: CaptureId, capacity: u32, home: PointId) -> Self {
        assert!(capacity > 0, "capture capacity must be positive");
        Self {
            id,
            capacity,
            held: 0,
            location: home,
            captured: 0,
            delivered: 0,
            log: EventLog::new(),
        }
    }

    pub fn id(&self) -> CaptureId { self.id }
    pub fn capacity(&self) -> u32 { self.capacity }
    pub fn held(&self) -> u32 { self.held }
    pub fn location(&self) -> PointId { self.location }
    /// Animals taken off the streets so far, delivered or not.
    pub fn captured(&self) -> u32 { self.captured }
    /// Animals handed over at the shelter so far.
    pub fn delivered(&self) -> u32 { self.delivered }
    pub fn log(&self) -> &EventLog { &self.log }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.held >= self.capacity
    }

    /// Take one animal of `kind` from `animals` (the counts at `point`).
    ///
    /// Refused, with nothing changed, for rodents, when the vehicle is full,
    /// or when no such animal is at the point.
    pub fn capture(
        &mut self,
        kind:    AnimalKind,
        point:   PointId,
        animals: &mut AnimalCounts,
        at:      Minute,
    ) -> FleetResult<()> {
        if !kind.is_capturable() {
            return Err(FleetError::NotCapturable(kind));
        }
        if self.is_full() {
            return Err(FleetError::VehicleFull(self.id));
        }
        if animals.remove(kind, 1) == 0 {
            return Err(FleetError::NoneAtPoint { kind, point });
        }
        self.held += 1;
        self.captured += 1;
        self.location = point;
        assert!(self.held <= self.capacity);
        self.log.push(
            at,
            format!("captured a {kind} at {point} ({}/{} aboard)", self.held, self.capacity),
        );
        Ok(())
    }

    /// Hand every held animal over at `shelter`.  The caller has already
    /// accounted for the travel there.
    ///
    /// Returns the number delivered; zero (no log entry, no state change)
    /// when the vehicle is empty.
    pub fn unload(&mut self, at: Minute, shelter: PointId) -> u32 {
        if self.held == 0 {
            return 0;
        }
        let n = self.held;
        self.log.push(at, format!("delivered {n} animals to the shelter, {shelter}"));
        self.delivered += n;
        self.held = 0;
        self.location = shelter;
        n
    }
}
