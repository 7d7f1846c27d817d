//! Todo endpoints.
//!
//! | Method | Path          | Success                 |
//! |--------|---------------|-------------------------|
//! | POST   | `/todos`      | 201 `{"todo": {...}}`   |
//! | GET    | `/todos`      | 200 `{"todos": [...]}`  |
//! | PUT    | `/todos/{id}` | 201 `{"todo": {...}}`   |
//! | DELETE | `/todos/{id}` | 200 `{"message": ...}`  |

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{post, put},
};
use mockable::Clock;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::extractors::{JsonBody, QueryParams, TodoIdPath};
use super::responses::{MessageResponse, TodoEnvelope, TodoListEnvelope, TodoResponse};
use crate::todo::{
    domain::{TodoDomainError, TodoListParams},
    ports::TodoRepository,
    services::{TodoInput, TodoLifecycleService},
};

/// Acknowledgement returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Todo deleted successfully";

/// Builds the todo router around an injected service.
#[must_use]
pub fn router<R, C>(service: TodoLifecycleService<R, C>) -> Router
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/todos", post(create_todo::<R, C>).get(list_todos::<R, C>))
        .route(
            "/todos/{id}",
            put(update_todo::<R, C>).delete(delete_todo::<R, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// POST /todos - create a todo
async fn create_todo<R, C>(
    State(service): State<TodoLifecycleService<R, C>>,
    JsonBody(input): JsonBody<TodoInput>,
) -> Result<(StatusCode, Json<TodoEnvelope>), ApiError>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    let todo = service
        .create(input)
        .await
        .map_err(ApiError::lifecycle("Failed to create todo"))?;

    Ok((
        StatusCode::CREATED,
        Json(TodoEnvelope {
            todo: TodoResponse::from(&todo),
        }),
    ))
}

/// GET /todos - list todos with optional filters and pagination
async fn list_todos<R, C>(
    State(service): State<TodoLifecycleService<R, C>>,
    QueryParams(pairs): QueryParams<Vec<(String, String)>>,
) -> Result<Json<TodoListEnvelope>, ApiError>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    let params = TodoListParams::from_pairs(pairs);
    let todos = service
        .list(&params)
        .await
        .map_err(ApiError::lifecycle("Failed to fetch todos"))?;

    Ok(Json(TodoListEnvelope {
        todos: todos.iter().map(TodoResponse::from).collect(),
    }))
}

/// PUT /todos/{id} - replace a todo's title, description and status
///
/// The body is decoded here but judged by the service, so an unknown id
/// wins over a malformed payload.
async fn update_todo<R, C>(
    State(service): State<TodoLifecycleService<R, C>>,
    TodoIdPath(id): TodoIdPath,
    body: Bytes,
) -> Result<(StatusCode, Json<TodoEnvelope>), ApiError>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    let input = Json::<TodoInput>::from_bytes(&body)
        .map(|Json(decoded)| decoded)
        .map_err(|rejection| TodoDomainError::MalformedBody(rejection.body_text()));

    let todo = service
        .update(id, input)
        .await
        .map_err(ApiError::lifecycle("Failed to update todo"))?;

    Ok((
        StatusCode::CREATED,
        Json(TodoEnvelope {
            todo: TodoResponse::from(&todo),
        }),
    ))
}

/// DELETE /todos/{id} - delete a todo, succeeding for unknown ids
async fn delete_todo<R, C>(
    State(service): State<TodoLifecycleService<R, C>>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    service
        .delete(id)
        .await
        .map_err(ApiError::lifecycle("Failed to delete todo"))?;

    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_owned(),
    }))
}
