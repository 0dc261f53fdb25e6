//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Repository implementations (in-memory, flat file)

pub mod repositories;

// Re-export for convenience
pub use repositories::{open, open_flat_files, open_in_memory, FlatFileRepository, InMemoryRepository};
