//! Profile domain module (feature application B).

mod model;

pub use model::{Address, Gender, Profile, ProfileFormData, ProfileStatus, ProfileStore};
