//! In-memory repository for todo tests and local runs.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{PersistedTodoData, Todo, TodoContent, TodoId, TodoListQuery},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Identifiers come from a counter that never goes backwards, so a deleted
/// identifier is never handed out again. Creation timestamps come from the
/// injected clock.
pub struct InMemoryTodoRepository<C = DefaultClock> {
    state: Arc<RwLock<InMemoryTodoState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    todos: BTreeMap<TodoId, Todo>,
    last_id: i64,
}

impl InMemoryTodoRepository {
    /// Creates an empty repository stamping records with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryTodoRepository<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryTodoRepository<C> {
    /// Creates an empty repository stamping records with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTodoState::default())),
            clock,
        }
    }

    fn read(&self) -> TodoRepositoryResult<RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TodoRepositoryResult<RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl<C> TodoRepository for InMemoryTodoRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn insert(&self, content: &TodoContent) -> TodoRepositoryResult<Todo> {
        let created_date = self.clock.utc();
        let mut state = self.write()?;
        state.last_id += 1;
        let id = TodoId::new(state.last_id);

        let todo = Todo::from_persisted(PersistedTodoData {
            id,
            content: content.clone(),
            created_date,
        });
        state.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.read()?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn list(&self, query: &TodoListQuery) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.read()?;
        let mut matching: Vec<&Todo> = state
            .todos
            .values()
            .filter(|todo| query.matches(todo))
            .collect();
        matching.sort_by(|left, right| {
            right
                .created_date()
                .cmp(&left.created_date())
                .then_with(|| right.id().cmp(&left.id()))
        });

        let page = query.page();
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update(&self, id: TodoId, content: &TodoContent) -> TodoRepositoryResult<Todo> {
        let mut state = self.write()?;
        let existing = state
            .todos
            .get_mut(&id)
            .ok_or(TodoRepositoryError::NotFound(id))?;

        *existing = existing.with_content(content.clone());
        Ok(existing.clone())
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        let mut state = self.write()?;
        Ok(state.todos.remove(&id).is_some())
    }
}
