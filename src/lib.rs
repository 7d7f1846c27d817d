//! Todox: a todo REST API backed by `PostgreSQL`.
//!
//! # Architecture
//!
//! The `todo` module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//! - **Services**: Orchestration over the ports
//!
//! # Modules
//!
//! - [`todo`]: Todo records, list queries and their persistence
//! - [`http`]: Axum routes, extractors and JSON error rendering
//! - [`config`]: Environment-driven configuration
//! - [`telemetry`]: Logging setup
//! - [`app`]: Startup wiring

pub mod app;
pub mod config;
pub mod http;
pub mod telemetry;
pub mod todo;
