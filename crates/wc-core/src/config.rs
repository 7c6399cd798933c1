//! Run configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to the simulation builder.  Every field has a
//! default, so a config file only needs to name what it overrides.

use crate::{CoreError, CoreResult, Volume};

// ── SpawnRates ────────────────────────────────────────────────────────────────

/// Probabilities for the one-off animal spawn at the start of a run.
///
/// Base draws are independent per point.  The attraction draws are
/// conditional: they are only rolled when the triggering kind is already
/// present, and each success adds one more animal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnRates {
    pub rodent: f64,
    pub cat:    f64,
    pub dog:    f64,
    /// Extra cat when rodents are present.
    pub cat_given_rodent: f64,
    /// Extra dog when rodents are present.
    pub dog_given_rodent: f64,
    /// Extra dog when cats are present.
    pub dog_given_cat: f64,
}

impl Default for SpawnRates {
    fn default() -> Self {
        Self {
            rodent:           0.50,
            cat:              0.25,
            dog:              0.10,
            cat_given_rodent: 0.75,
            dog_given_rodent: 0.10,
            dog_given_cat:    0.75,
        }
    }
}

impl SpawnRates {
    /// No animals ever spawn.  Handy for tests of the collection fleet alone.
    pub fn none() -> Self {
        Self {
            rodent:           0.0,
            cat:              0.0,
            dog:              0.0,
            cat_given_rodent: 0.0,
            dog_given_rodent: 0.0,
            dog_given_cat:    0.0,
        }
    }

    fn all(&self) -> [(&'static str, f64); 6] {
        [
            ("rodent", self.rodent),
            ("cat", self.cat),
            ("dog", self.dog),
            ("cat_given_rodent", self.cat_given_rodent),
            ("dog_given_rodent", self.dog_given_rodent),
            ("dog_given_cat", self.dog_given_cat),
        ]
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Shift length in minutes.  Default: 480 (an 8-hour shift).
    pub budget_minutes: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Trucks on the road at minute 0.
    pub initial_trucks: usize,

    /// Truck payload in cubic metres.
    pub truck_capacity_m3: f64,

    /// Workers per truck.  Each loads one cubic metre per minute.
    pub staff_per_truck: u32,

    /// Fixed time one compaction takes.
    pub compaction_minutes: u64,

    /// Labor multiplier at points where any animal is present.
    pub interference_factor: u64,

    /// Add a truck at the end of a collection pass when one is full.
    pub elastic_fleet: bool,

    /// Upper bound on the truck fleet when `elastic_fleet` is on.
    pub max_trucks: usize,

    /// Capture vehicles at minute 0.  `None` sizes the fleet from the spawned
    /// population: one per five points with animals, at least one.
    pub capture_vehicles: Option<usize>,

    /// Animals one capture vehicle holds before it must visit the shelter.
    pub capture_capacity: u32,

    /// Time spent per captured animal.
    pub capture_minutes: u64,

    /// Safety net on the number of ticks, independent of the time budget.
    pub max_ticks: u64,

    pub spawn: SpawnRates,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            budget_minutes:      480,
            seed:                42,
            initial_trucks:      1,
            truck_capacity_m3:   10.0,
            staff_per_truck:     4,
            compaction_minutes:  10,
            interference_factor: 2,
            elastic_fleet:       true,
            max_trucks:          10,
            capture_vehicles:    None,
            capture_capacity:    5,
            capture_minutes:     0,
            max_ticks:           10_000,
            spawn:               SpawnRates::default(),
        }
    }
}

impl SimConfig {
    /// Truck payload as an exact [`Volume`].
    ///
    /// Call [`validate`](Self::validate) first; an invalid capacity maps to
    /// zero here.
    pub fn truck_capacity(&self) -> Volume {
        Volume::from_m3(self.truck_capacity_m3).unwrap_or(Volume::ZERO)
    }

    /// Check every field for a value the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        let fail = |msg: String| Err(CoreError::Config(msg));

        if self.budget_minutes == 0 {
            return fail("budget_minutes must be positive".into());
        }
        if self.initial_trucks == 0 {
            return fail("initial_trucks must be at least 1".into());
        }
        if self.truck_capacity().is_zero() {
            return fail(format!(
                "truck_capacity_m3 must be a positive finite volume, got {}",
                self.truck_capacity_m3
            ));
        }
        if self.staff_per_truck == 0 {
            return fail("staff_per_truck must be at least 1".into());
        }
        if self.interference_factor == 0 {
            return fail("interference_factor must be at least 1".into());
        }
        if self.max_trucks < self.initial_trucks {
            return fail(format!(
                "max_trucks ({}) is below initial_trucks ({})",
                self.max_trucks, self.initial_trucks
            ));
        }
        if self.capture_capacity == 0 {
            return fail("capture_capacity must be at least 1".into());
        }
        if self.max_ticks == 0 {
            return fail("max_ticks must be positive".into());
        }
        for (name, p) in self.spawn.all() {
            if !(0.0..=1.0).contains(&p) {
                return fail(format!("spawn.{name} must be a probability in [0, 1], got {p}"));
            }
        }
        Ok(())
    }
}
