//! JSON response shapes.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::todo::domain::Todo;

/// Wire representation of a todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Todo title.
    pub title: String,
    /// Todo description.
    pub description: String,
    /// Completion status.
    pub status: bool,
    /// Creation timestamp in RFC 3339 with second precision.
    pub created_date: String,
}

impl From<&Todo> for TodoResponse {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().value(),
            title: todo.title().to_owned(),
            description: todo.description().to_owned(),
            status: todo.status(),
            created_date: todo
                .created_date()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// `{"todo": {...}}` body returned by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoEnvelope {
    /// The created or updated todo.
    pub todo: TodoResponse,
}

/// `{"todos": [...]}` body returned by list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListEnvelope {
    /// The selected page of todos, most recent first.
    pub todos: Vec<TodoResponse>,
}

/// `{"message": "..."}` acknowledgement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable acknowledgement.
    pub message: String,
}

/// `{"error": "..."}` failure body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub error: String,
}
