//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing count of whole simulated minutes
//! since the start of the shift.  Using an integer as the canonical unit
//! means all budget arithmetic is exact and comparisons are O(1).
//!
//! `SimClock` is owned by the scheduler.  Every other component receives
//! the current `Minute` by value and reports the minutes it spent back to
//! the scheduler, which is the only writer of simulated time.

use std::fmt;

// ── Minute ────────────────────────────────────────────────────────────────────

/// An absolute point in simulated time, in minutes from the start of the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u64);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Return the minute `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Minute {
        Minute(self.0 + n)
    }

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Minute) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u64) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Minute) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The shared simulated clock.
///
/// Only ever moves forward: [`advance`](Self::advance) takes an unsigned
/// duration, so the "clock never decreases" invariant is structural.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    now: Minute,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current simulated minute.
    #[inline]
    pub fn now(&self) -> Minute {
        self.now
    }

    /// Advance the clock by `minutes` and return the new time.
    #[inline]
    pub fn advance(&mut self, minutes: u64) -> Minute {
        self.now = self.now + minutes;
        self.now
    }

    /// `true` once the clock has reached or passed `budget_minutes`.
    #[inline]
    pub fn exhausted(&self, budget_minutes: u64) -> bool {
        self.now.0 >= budget_minutes
    }

    /// Break elapsed time into (hours, minutes) from the start of the shift.
    pub fn elapsed_hm(&self) -> (u64, u64) {
        (self.now.0 / 60, self.now.0 % 60)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.elapsed_hm();
        write!(f, "{} ({:02}:{:02})", self.now, h, m)
    }
}
