//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod repository;

pub use repository::{Repository, RepositoryError, RepositoryResult};
