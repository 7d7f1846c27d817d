//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use todox::todo::{
    adapters::postgres::PostgresTodoRepository,
    domain::{Todo, TodoContent, TodoTitle},
    ports::TodoRepository,
};
use uuid::Uuid;

/// Environment variable holding the test database URL.
pub const DATABASE_URL_ENV: &str = "TODOX_TEST_DATABASE_URL";

/// Boxed error type for test results.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Points every pooled connection at the test schema.
#[derive(Debug)]
struct SearchPath(String);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for SearchPath {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!("SET search_path TO {}", self.0))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Throwaway schema dropped when the guard goes out of scope.
pub struct TestSchema {
    url: String,
    name: String,
}

impl Drop for TestSchema {
    fn drop(&mut self) {
        let Ok(mut conn) = PgConnection::establish(&self.url) else {
            return;
        };
        let statement = format!("DROP SCHEMA IF EXISTS {} CASCADE", self.name);
        if let Err(err) = conn.batch_execute(&statement) {
            tracing::warn!(schema = %self.name, error = %err, "failed to drop test schema");
        }
    }
}

/// Creates an isolated schema and a repository bound to it.
///
/// # Errors
///
/// Returns an error if no test database is configured, or if the schema,
/// pool or table cannot be created.
pub async fn setup_repository() -> Result<(TestSchema, PostgresTodoRepository), BoxError> {
    let url = std::env::var(DATABASE_URL_ENV)
        .map_err(|err| format!("{DATABASE_URL_ENV} must name a test database: {err}"))?;
    let name = format!("todox_test_{}", Uuid::new_v4().simple());

    let create_url = url.clone();
    let create_name = name.clone();
    tokio::task::spawn_blocking(move || -> Result<(), BoxError> {
        let mut conn = PgConnection::establish(&create_url)?;
        conn.batch_execute(&format!("CREATE SCHEMA {create_name}"))?;
        Ok(())
    })
    .await??;
    let schema = TestSchema {
        url: url.clone(),
        name: name.clone(),
    };

    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(2)
            .connection_customizer(Box::new(SearchPath(name)))
            .build(ConnectionManager::<PgConnection>::new(url))
    })
    .await??;
    let repository = PostgresTodoRepository::new(pool);
    repository.ensure_schema().await?;

    Ok((schema, repository))
}

/// Inserts a todo with the given title and status.
///
/// # Errors
///
/// Returns an error if the title is invalid or the insert fails.
pub async fn insert_todo(
    repository: &PostgresTodoRepository,
    title: &str,
    status: bool,
) -> Result<Todo, BoxError> {
    let content = TodoContent::new(TodoTitle::new(title)?).with_status(status);
    Ok(repository.insert(&content).await?)
}
