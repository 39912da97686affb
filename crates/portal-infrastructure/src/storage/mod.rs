//! `ClientStorage` implementations.

mod file;
mod memory;

pub use file::FileClientStorage;
pub use memory::InMemoryClientStorage;
