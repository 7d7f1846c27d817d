//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{TodoContentRow, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{PersistedTodoData, Todo, TodoContent, TodoId, TodoListQuery, TodoTitle},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// DDL creating the `todos` table and its ordering index when absent.
pub const SCHEMA_SQL: &str = include_str!("schema.sql");

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `todos` table and index if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when a connection cannot
    /// be obtained or the DDL fails.
    pub async fn ensure_schema(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(SCHEMA_SQL)
                .map_err(TodoRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn insert(&self, content: &TodoContent) -> TodoRepositoryResult<Todo> {
        let new_row = to_content_row(content);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            row_to_todo(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.value())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn list(&self, query: &TodoListQuery) -> TodoRepositoryResult<Vec<Todo>> {
        let list_query = *query;
        self.run_blocking(move |connection| {
            let rows =
                load_page(connection, &list_query).map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn update(&self, id: TodoId, content: &TodoContent) -> TodoRepositoryResult<Todo> {
        let changes = to_content_row(content);

        self.run_blocking(move |connection| {
            let row = diesel::update(todos::table.find(id.value()))
                .set(&changes)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?
                .ok_or(TodoRepositoryError::NotFound(id))?;
            row_to_todo(row)
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

/// Builds and runs the single filtered, ordered, paginated list statement.
fn load_page(connection: &mut PgConnection, query: &TodoListQuery) -> QueryResult<Vec<TodoRow>> {
    let mut statement = todos::table.select(TodoRow::as_select()).into_boxed();

    if let Some(from) = query.lower_bound() {
        statement = statement.filter(todos::created_date.ge(from));
    }
    if let Some(until) = query.upper_bound() {
        statement = statement.filter(todos::created_date.le(until));
    }
    if let Some(status) = query.status() {
        statement = statement.filter(todos::status.eq(status));
    }

    let page = query.page();
    statement
        .order((todos::created_date.desc(), todos::id.desc()))
        .limit(page.limit())
        .offset(page.offset())
        .load::<TodoRow>(connection)
}

fn to_content_row(content: &TodoContent) -> TodoContentRow {
    TodoContentRow {
        title: content.title().as_str().to_owned(),
        description: content.description().to_owned(),
        status: content.status(),
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow {
        id,
        title: persisted_title,
        description,
        status,
        created_date,
    } = row;

    let title = TodoTitle::new(persisted_title).map_err(TodoRepositoryError::persistence)?;
    let content = TodoContent::new(title)
        .with_description(description)
        .with_status(status);

    Ok(Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        content,
        created_date,
    }))
}
