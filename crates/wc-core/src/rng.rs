//! Seeded randomness for population spawning.
//!
//! The builder creates one `SimRng` from `SimConfig::seed` and hands it to
//! the spawner by `&mut`.  Nothing else draws random numbers, so a seed and
//! a point file fix the whole timeline.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// One Bernoulli draw.  `p` is clamped to `[0, 1]`; NaN never succeeds.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
