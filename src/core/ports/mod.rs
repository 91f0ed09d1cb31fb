//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the query logic and the
//! data sources records are loaded from.
//!
//! Implementations live in the `adapters` module.

mod repository;

pub use repository::Repository;
