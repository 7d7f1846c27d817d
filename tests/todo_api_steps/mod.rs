//! Step definitions for todo API scenarios.

pub mod given;
pub mod then;
pub mod when;
