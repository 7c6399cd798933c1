//! Waste volume with exact integer arithmetic.
//!
//! Volumes are stored as whole litres in a `u64`.  Inputs and reports use
//! cubic metres (1 m³ = 1 000 L), but every mutation in the simulation is an
//! integer add/subtract, so the conservation law "collected + remaining =
//! initial" holds exactly instead of within a float epsilon.
//!
//! Compaction divides by three and truncates; the lost fraction is below one
//! litre per compaction and is never part of the conserved totals, which
//! are tracked pre-compaction.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Litres in one cubic metre.
pub const LITRES_PER_M3: u64 = 1_000;

/// A non-negative waste volume in litres.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume(pub u64);

impl Volume {
    pub const ZERO: Volume = Volume(0);

    /// Largest volume [`from_m3`](Self::from_m3) accepts for one point,
    /// in cubic metres.
    pub const MAX_M3: f64 = 1e9;

    /// Convert cubic metres to a `Volume`, rounding to the nearest litre.
    ///
    /// Fails on negative, non-finite, or larger than [`MAX_M3`](Self::MAX_M3)
    /// inputs.
    pub fn from_m3(m3: f64) -> CoreResult<Volume> {
        if !m3.is_finite() || !(0.0..=Self::MAX_M3).contains(&m3) {
            return Err(CoreError::InvalidVolume(m3));
        }
        Ok(Volume((m3 * LITRES_PER_M3 as f64).round() as u64))
    }

    /// Sum of `volumes`, or `None` if it does not fit in a `u64` of litres.
    pub fn checked_sum<I: IntoIterator<Item = Volume>>(volumes: I) -> Option<Volume> {
        volumes
            .into_iter()
            .try_fold(0u64, |acc, v| acc.checked_add(v.0))
            .map(Volume)
    }

    /// Whole cubic metres (no rounding needed).
    #[inline]
    pub const fn m3(n: u64) -> Volume {
        Volume(n * LITRES_PER_M3)
    }

    #[inline]
    pub fn litres(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_m3(self) -> f64 {
        self.0 as f64 / LITRES_PER_M3 as f64
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// One third of this volume, truncated to the litre.
    #[inline]
    pub fn third(self) -> Volume {
        Volume(self.0 / 3)
    }

    /// Subtraction clamped at zero.
    #[inline]
    pub fn saturating_sub(self, rhs: Volume) -> Volume {
        Volume(self.0.saturating_sub(rhs.0))
    }

    /// Whole minutes `staff` workers need to load this volume at one cubic
    /// metre per worker per minute (rounded up).
    ///
    /// # Panics
    /// Panics if `staff == 0`.
    #[inline]
    pub fn labor_minutes(self, staff: u32) -> u64 {
        assert!(staff > 0, "staff count must be positive");
        self.0.div_ceil(staff as u64 * LITRES_PER_M3)
    }
}

impl std::ops::Add for Volume {
    type Output = Volume;
    #[inline]
    fn add(self, rhs: Volume) -> Volume {
        Volume(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Volume {
    #[inline]
    fn add_assign(&mut self, rhs: Volume) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Volume {
    type Output = Volume;
    /// # Panics
    /// Panics (in debug builds, wraps otherwise) if `rhs > self`; use
    /// [`Volume::saturating_sub`] where underflow is possible.
    #[inline]
    fn sub(self, rhs: Volume) -> Volume {
        Volume(self.0 - rhs.0)
    }
}

impl std::ops::SubAssign for Volume {
    #[inline]
    fn sub_assign(&mut self, rhs: Volume) {
        self.0 -= rhs.0;
    }
}

impl std::iter::Sum for Volume {
    fn sum<I: Iterator<Item = Volume>>(iter: I) -> Volume {
        Volume(iter.map(|v| v.0).sum())
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m³", self.as_m3())
    }
}
