//! Record store domain module.
//!
//! Shared by the todo and profile feature applications.
//!
//! - `model`: `Record<F>` and the `RecordFields` trait
//! - `pagination`: `PaginationInfo`, `Page`
//! - `store`: `RecordStore<F>`

mod model;
mod pagination;
mod store;

pub use model::{DEFAULT_ACTOR, Record, RecordFields};
pub use pagination::{Page, PaginationInfo};
pub use store::{DEFAULT_ITEMS_PER_PAGE, RecordStore};
