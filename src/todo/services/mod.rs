//! Application services for todo orchestration.

mod lifecycle;

pub use lifecycle::{TodoInput, TodoLifecycleError, TodoLifecycleResult, TodoLifecycleService};
