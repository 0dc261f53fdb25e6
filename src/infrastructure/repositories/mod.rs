//! Repository Implementations
//!
//! Concrete implementations of the `Repository` port, plus constructors
//! that assemble a full [`Repositories`] set for one backend.

mod flat_file;
mod memory;

pub use flat_file::FlatFileRepository;
pub use memory::InMemoryRepository;

use crate::application::Repositories;
use crate::config::{Backend, StorageConfig};

/// Every collection held in process memory.
pub fn open_in_memory() -> Repositories {
    Repositories {
        users: Box::new(InMemoryRepository::new()),
        admins: Box::new(InMemoryRepository::new()),
        signs: Box::new(InMemoryRepository::new()),
        traits: Box::new(InMemoryRepository::new()),
        quotes: Box::new(InMemoryRepository::new()),
    }
}

/// Every collection in its own flat file under `storage.data_dir`.
pub fn open_flat_files(storage: &StorageConfig) -> Repositories {
    Repositories {
        users: Box::new(FlatFileRepository::new(storage.users_path())),
        admins: Box::new(FlatFileRepository::new(storage.admins_path())),
        signs: Box::new(FlatFileRepository::new(storage.signs_path())),
        traits: Box::new(FlatFileRepository::new(storage.traits_path())),
        quotes: Box::new(FlatFileRepository::new(storage.quotes_path())),
    }
}

/// Open the backend selected by configuration.
pub fn open(storage: &StorageConfig) -> Repositories {
    log::debug!(
        "opening {} storage in {}",
        storage.backend,
        storage.data_dir.display()
    );
    match storage.backend {
        Backend::File => open_flat_files(storage),
        Backend::Memory => open_in_memory(),
    }
}
