//! Demo data for the portal and its feature applications.
//!
//! Every generator takes the random source and the reference time as
//! arguments, so a seeded RNG and a fixed `now` reproduce the same data.

mod profiles;
mod todos;
mod users;

use rand::Rng;
use uuid::Uuid;

pub use profiles::{SEED_PROFILE_ACTOR, seed_profiles};
pub use todos::{SEED_TODO_ACTORS, seed_todos};
pub use users::demo_accounts;

/// Number of records each feature application starts with.
pub const SEED_RECORD_COUNT: usize = 25;

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    Uuid::from_u128(rng.r#gen()).to_string()
}
