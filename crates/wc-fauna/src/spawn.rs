//! Initial animal population.
//!
//! Each point draws independently, in a fixed order, from one shared
//! [`SimRng`]:
//!
//! 1. base presence: rodent, cat, dog (`SpawnRates::{rodent, cat, dog}`);
//! 2. attraction: rodents draw one more cat, then one more dog;
//! 3. attraction: cats (including a cat added in step 2) draw one more dog.
//!
//! Every successful draw adds one animal, so a count can reach two.

use wc_core::{AnimalCounts, AnimalKind, SimRng, SpawnRates};
use wc_points::PointStore;

/// Populate every point of `store` and return the per-kind totals added.
///
/// Points are visited in declared order, so a given seed always yields the
/// same population.
pub fn spawn_animals(store: &mut PointStore, rates: &SpawnRates, rng: &mut SimRng) -> AnimalCounts {
    let mut added = AnimalCounts::NONE;
    for counts in store.animals.iter_mut() {
        let drawn = draw_point(rates, rng);
        *counts += drawn;
        added += drawn;
    }
    added
}

fn draw_point(rates: &SpawnRates, rng: &mut SimRng) -> AnimalCounts {
    let mut c = AnimalCounts::NONE;
    if rng.chance(rates.rodent) {
        c.add(AnimalKind::Rodent, 1);
    }
    if rng.chance(rates.cat) {
        c.add(AnimalKind::Cat, 1);
    }
    if rng.chance(rates.dog) {
        c.add(AnimalKind::Dog, 1);
    }

    if c.has(AnimalKind::Rodent) {
        if rng.chance(rates.cat_given_rodent) {
            c.add(AnimalKind::Cat, 1);
        }
        if rng.chance(rates.dog_given_rodent) {
            c.add(AnimalKind::Dog, 1);
        }
    }
    if c.has(AnimalKind::Cat) && rng.chance(rates.dog_given_cat) {
        c.add(AnimalKind::Dog, 1);
    }
    c
}
