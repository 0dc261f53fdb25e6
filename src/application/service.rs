//! Service facade
//!
//! Owns the repositories and hands out short-lived use cases that borrow them.

use crate::config::Config;
use crate::infrastructure::repositories;

use super::{AccountsUseCase, CatalogUseCase, FriendsUseCase, ProfileUseCase, Repositories};

pub struct StarMatchService {
    repos: Repositories,
}

impl StarMatchService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// A service with nothing persisted.
    pub fn in_memory() -> Self {
        Self::new(repositories::open_in_memory())
    }

    /// A service over the backend selected by `config.storage`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(repositories::open(&config.storage))
    }

    pub fn accounts(&self) -> AccountsUseCase<'_> {
        AccountsUseCase::new(self.repos.users.as_ref(), self.repos.admins.as_ref())
    }

    pub fn catalog(&self) -> CatalogUseCase<'_> {
        CatalogUseCase::new(
            self.repos.signs.as_ref(),
            self.repos.traits.as_ref(),
            self.repos.quotes.as_ref(),
        )
    }

    pub fn friends(&self) -> FriendsUseCase<'_> {
        FriendsUseCase::new(self.repos.users.as_ref())
    }

    pub fn profile(&self) -> ProfileUseCase<'_> {
        ProfileUseCase::new(
            self.repos.users.as_ref(),
            self.repos.signs.as_ref(),
            self.repos.quotes.as_ref(),
        )
    }

    pub fn repositories(&self) -> &Repositories {
        &self.repos
    }
}
