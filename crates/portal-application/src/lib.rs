//! Application layer for the Portal.
//!
//! Coordinates the domain and infrastructure layers: the session manager
//! that owns the authentication state, and the context that wires every
//! component together at startup.

pub mod context;
pub mod session;

pub use context::PortalContext;
pub use session::SessionManager;
