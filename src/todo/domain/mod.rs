//! Domain model for todo management.
//!
//! The todo domain models validated todo content, persisted todo records and
//! the list query (filters plus pagination) while keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod query;
mod todo;

pub use error::TodoDomainError;
pub use ids::{TodoId, TodoTitle};
pub use query::{Page, TodoListParams, TodoListQuery, parse_status_filter};
pub use todo::{PersistedTodoData, Todo, TodoContent};
