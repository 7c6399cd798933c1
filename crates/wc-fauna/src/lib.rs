//! `wc-fauna`: where the strays come from and where they go.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`spawn`]     | `spawn_animals`: seeded initial population + attraction   |
//! | [`migration`] | `MigrationRule` trait, `DominanceRule`, `NoMigration`,     |
//! |               | `plan_migrations` / `apply_migrations` / `migrate`         |
//!
//! # Two-phase migration
//!
//! 1. **Plan** (read-only): for every point, ask the [`MigrationRule`] which
//!    animals leave, and spread them over the neighbors.  Every decision is
//!    made against the same start-of-pass counts.
//! 2. **Apply** (sequential): move the planned counts.
//!
//! An animal therefore moves at most one hop per pass, and the result does
//! not depend on the order points are visited in.

pub mod migration;
pub mod spawn;


pub use migration::{
    apply_migrations, migrate, plan_migrations, DominanceRule, Migration, MigrationRule,
    NoMigration,
};
pub use spawn::spawn_animals;
