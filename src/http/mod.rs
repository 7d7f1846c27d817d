//! HTTP edge of the todo service.
//!
//! Axum router exposing the four todo endpoints, JSON error responses,
//! request tracing and a server loop with graceful shutdown.

pub mod error;
pub mod extractors;
pub mod responses;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::router;
pub use server::{ServerError, serve};
