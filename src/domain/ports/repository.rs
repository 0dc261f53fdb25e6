//! Repository port - uniform CRUD over a keyed collection
//!
//! Semantics shared by every backend:
//! - `create` inserts when the id is absent and is a no-op otherwise (never an upsert)
//! - `update` replaces by id and is a no-op when the id is absent
//! - `delete` removes when present and is a no-op otherwise
//! - `get_all` returns a snapshot

use std::path::PathBuf;

use crate::domain::entities::{EntityId, HasId};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage failures
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait Repository<T: HasId> {
    fn create(&self, entity: T) -> RepositoryResult<()>;

    fn get(&self, id: EntityId) -> RepositoryResult<Option<T>>;

    fn update(&self, entity: T) -> RepositoryResult<()>;

    fn delete(&self, id: EntityId) -> RepositoryResult<()>;

    fn get_all(&self) -> RepositoryResult<Vec<T>>;

    /// Next free id: highest existing id plus one, or 1 when empty.
    fn next_id(&self) -> RepositoryResult<EntityId> {
        let max = self.get_all()?.iter().map(|e| e.id()).max().unwrap_or(0);
        Ok(max + 1)
    }
}
