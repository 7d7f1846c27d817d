//! Todo item management for todox.
//!
//! This module covers the whole todo lifecycle: creation, filtered and
//! paginated listing, in-place updates and hard deletion. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
