//! Repository port for todo persistence and lookup.

use crate::todo::domain::{Todo, TodoContent, TodoId, TodoListQuery};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Every method maps to a single atomic storage statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts a new todo, letting storage assign `id` and `created_date`.
    async fn insert(&self, content: &TodoContent) -> TodoRepositoryResult<Todo>;

    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the todo does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Returns the page of todos selected by `query`, most recent first.
    async fn list(&self, query: &TodoListQuery) -> TodoRepositoryResult<Vec<Todo>>;

    /// Replaces title, description and status of an existing todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the todo does not exist.
    async fn update(&self, id: TodoId, content: &TodoContent) -> TodoRepositoryResult<Todo>;

    /// Deletes a todo, reporting whether a row was removed.
    ///
    /// Deleting an unknown identifier is not an error.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The todo was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
