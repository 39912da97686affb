//! Session state management.

mod manager;

pub use manager::SessionManager;
