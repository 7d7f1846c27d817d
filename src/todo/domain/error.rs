//! Error types for todo domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The request did not carry a title.
    #[error("title is required")]
    MissingTitle,

    /// The title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The title exceeds the persisted column width.
    #[error("title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// The request body is not a well-formed todo payload.
    #[error("{0}")]
    MalformedBody(String),

    /// The todo identifier is not an integer.
    #[error("invalid todo ID: {0}")]
    InvalidId(String),

    /// The `pageSize` query parameter is not a positive integer.
    #[error("invalid pageSize parameter: {0}")]
    InvalidPageSize(String),

    /// The `page` query parameter is not a positive integer.
    #[error("invalid page parameter: {0}")]
    InvalidPage(String),
}
