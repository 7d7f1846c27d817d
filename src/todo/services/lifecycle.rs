//! Service layer for todo creation, listing, update and deletion.

use crate::todo::{
    domain::{Todo, TodoContent, TodoDomainError, TodoId, TodoListParams, TodoListQuery, TodoTitle},
    ports::{TodoRepository, TodoRepositoryError},
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Unvalidated todo payload shared by create and update.
///
/// Every field is optional on the wire; [`TodoInput::validate`] enforces the
/// required title and fills in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TodoInput {
    title: Option<String>,
    description: Option<String>,
    status: Option<bool>,
}

impl TodoInput {
    /// Creates an input carrying the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            status: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion status.
    #[must_use]
    pub const fn with_status(mut self, status: bool) -> Self {
        self.status = Some(status);
        self
    }

    /// Validates the payload into persistable content.
    ///
    /// A missing description becomes empty and a missing status becomes
    /// `false`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::MissingTitle`] when no title was supplied,
    /// or the error raised by [`TodoTitle::new`].
    pub fn validate(self) -> Result<TodoContent, TodoDomainError> {
        let raw_title = self.title.ok_or(TodoDomainError::MissingTitle)?;
        let content = TodoContent::new(TodoTitle::new(raw_title)?)
            .with_description(self.description.unwrap_or_default())
            .with_status(self.status.unwrap_or(false));
        Ok(content)
    }
}

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo service operations.
pub type TodoLifecycleResult<T> = Result<T, TodoLifecycleError>;

/// Todo orchestration service.
///
/// Owns the injected repository and the clock that supplies "now" for list
/// queries without an explicit `endDate`.
pub struct TodoLifecycleService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TodoLifecycleService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TodoLifecycleService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates and stores a new todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Domain`] when validation fails, before
    /// anything is written, or [`TodoLifecycleError::Repository`] when the
    /// insert fails.
    pub async fn create(&self, input: TodoInput) -> TodoLifecycleResult<Todo> {
        let content = input.validate()?;
        let todo = self.repository.insert(&content).await?;
        info!(todo_id = %todo.id(), "created todo");
        Ok(todo)
    }

    /// Lists todos matching the raw query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Domain`] for malformed pagination and
    /// [`TodoLifecycleError::Repository`] when the query fails.
    pub async fn list(&self, params: &TodoListParams) -> TodoLifecycleResult<Vec<Todo>> {
        let query = TodoListQuery::from_params(params, self.clock.utc())?;
        debug!(?query, "listing todos");
        Ok(self.repository.list(&query).await?)
    }

    /// Replaces title, description and status of an existing todo.
    ///
    /// `input` is the caller's decoding of the request body. Existence is
    /// checked before a decoding failure or an invalid payload is reported;
    /// the creation date is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] (wrapped) when the todo does
    /// not exist, [`TodoLifecycleError::Domain`] when decoding or validation
    /// fails, or another repository error when persistence fails.
    pub async fn update(
        &self,
        id: TodoId,
        input: Result<TodoInput, TodoDomainError>,
    ) -> TodoLifecycleResult<Todo> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(TodoRepositoryError::NotFound(id).into());
        }

        let content = input?.validate()?;
        let todo = self.repository.update(id, &content).await?;
        info!(todo_id = %id, "updated todo");
        Ok(todo)
    }

    /// Deletes a todo; unknown identifiers succeed silently.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when the delete fails.
    pub async fn delete(&self, id: TodoId) -> TodoLifecycleResult<()> {
        let removed = self.repository.delete(id).await?;
        info!(todo_id = %id, removed, "deleted todo");
        Ok(())
    }
}
