//! API error type with JSON rendering.
//!
//! Every failure is returned as `{"error": message}` with a status code
//! matching its category.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use super::responses::ErrorResponse;
use crate::todo::{domain::TodoId, ports::TodoRepositoryError, services::TodoLifecycleError};

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input (400).
    #[error("{0}")]
    Validation(String),

    /// Referenced todo does not exist (404).
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// Storage failure (500). The cause is logged, not returned.
    #[error("{context}: {source}")]
    Storage {
        /// Operation-specific message returned to the caller.
        context: &'static str,
        /// Underlying repository failure.
        source: TodoRepositoryError,
    },
}

impl ApiError {
    /// Returns a mapper from service errors that labels storage failures
    /// with `context`.
    #[must_use]
    pub fn lifecycle(context: &'static str) -> impl FnOnce(TodoLifecycleError) -> Self {
        move |err| match err {
            TodoLifecycleError::Domain(domain) => Self::Validation(domain.to_string()),
            TodoLifecycleError::Repository(TodoRepositoryError::NotFound(id)) => Self::NotFound(id),
            TodoLifecycleError::Repository(source) => Self::Storage { context, source },
        }
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(message) => message,
            Self::NotFound(_) => "Todo not found".to_owned(),
            Self::Storage { context, source } => {
                let request_id = Uuid::new_v4();
                error!(%request_id, error = %source, "{context}");
                context.to_owned()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
