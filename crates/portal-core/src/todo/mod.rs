//! Todo domain module (feature application A).

mod model;

pub use model::{Todo, TodoFormData, TodoStatus, TodoStore};
