//! Animal kinds and per-point population counts.
//!
//! The enumeration is closed: rodents, cats, and dogs.  Dominance runs
//! `Dog > Cat > Rodent` and drives both migration (a kind flees from any
//! more dominant kind) and capture order (most dominant first).

/// A kind of stray animal found at collection points.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimalKind {
    Rodent,
    Cat,
    Dog,
}

impl AnimalKind {
    /// All kinds, least dominant first.
    pub const ALL: [AnimalKind; 3] = [AnimalKind::Rodent, AnimalKind::Cat, AnimalKind::Dog];

    /// Kinds the capture fleet may remove, most dominant first.
    pub const CAPTURABLE: [AnimalKind; 2] = [AnimalKind::Dog, AnimalKind::Cat];

    /// Position in the dominance order (higher chases lower).
    #[inline]
    pub fn dominance(self) -> usize {
        self as usize
    }

    /// Rodents are never captured; population control targets their
    /// predators instead.
    #[inline]
    pub fn is_capturable(self) -> bool {
        !matches!(self, AnimalKind::Rodent)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnimalKind::Rodent => "rodent",
            AnimalKind::Cat    => "cat",
            AnimalKind::Dog    => "dog",
        }
    }
}

impl std::fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AnimalCounts ──────────────────────────────────────────────────────────────

/// Non-negative head counts of each [`AnimalKind`] at one point.
///
/// Indexed by `AnimalKind::dominance()`; unsigned storage keeps every count
/// non-negative by construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimalCounts([u32; 3]);

impl AnimalCounts {
    pub const NONE: AnimalCounts = AnimalCounts([0; 3]);

    pub fn new(rodents: u32, cats: u32, dogs: u32) -> Self {
        Self([rodents, cats, dogs])
    }

    #[inline]
    pub fn get(&self, kind: AnimalKind) -> u32 {
        self.0[kind.dominance()]
    }

    #[inline]
    pub fn set(&mut self, kind: AnimalKind, count: u32) {
        self.0[kind.dominance()] = count;
    }

    #[inline]
    pub fn add(&mut self, kind: AnimalKind, n: u32) {
        self.0[kind.dominance()] += n;
    }

    /// Remove up to `n` animals of `kind`; returns how many were removed.
    #[inline]
    pub fn remove(&mut self, kind: AnimalKind, n: u32) -> u32 {
        let slot = &mut self.0[kind.dominance()];
        let taken = n.min(*slot);
        *slot -= taken;
        taken
    }

    #[inline]
    pub fn has(&self, kind: AnimalKind) -> bool {
        self.get(kind) > 0
    }

    /// `true` if any animal of any kind is present.
    #[inline]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&c| c > 0)
    }

    /// `true` if all three kinds are present at once.
    #[inline]
    pub fn all_kinds(&self) -> bool {
        self.0.iter().all(|&c| c > 0)
    }

    /// `true` if a cat or dog is present.
    #[inline]
    pub fn any_capturable(&self) -> bool {
        AnimalKind::CAPTURABLE.iter().any(|&k| self.has(k))
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// `(kind, count)` pairs, least dominant first.
    pub fn iter(&self) -> impl Iterator<Item = (AnimalKind, u32)> + '_ {
        AnimalKind::ALL.iter().map(move |&k| (k, self.get(k)))
    }

    /// Comma-separated list of kinds present, or `"none"`.
    pub fn describe(&self) -> String {
        let present: Vec<&str> = self
            .iter()
            .filter(|&(_, n)| n > 0)
            .map(|(k, _)| k.as_str())
            .collect();
        if present.is_empty() {
            "none".to_owned()
        } else {
            present.join(", ")
        }
    }
}

impl std::ops::AddAssign for AnimalCounts {
    fn add_assign(&mut self, rhs: AnimalCounts) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}
