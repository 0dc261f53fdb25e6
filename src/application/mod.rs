//! Application Layer
//!
//! Use cases that orchestrate repositories and domain services.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Is the boundary consumed by the CLI
//!
//! ## Use Cases
//!
//! - `AccountsUseCase` - Login, sign-up, partial updates, removal
//! - `CatalogUseCase` - Signs, traits and quotes, plus default seeding
//! - `FriendsUseCase` - Friend edges with repair-on-read
//! - `ProfileUseCase` - Natal chart, traits, quote of the day, compatibility
//!
//! `StarMatchService` bundles the repositories and hands out the use cases.

pub mod accounts;
pub mod catalog;
pub mod friends;
pub mod profile;
mod repositories;
mod service;

pub use accounts::{AccountsUseCase, AdminUpdate, NewUser, UserUpdate};
pub use catalog::{CatalogUseCase, SeedReport};
pub use friends::FriendsUseCase;
pub use profile::{Compatibility, ProfileUseCase};
pub use repositories::Repositories;
pub use service::StarMatchService;

use crate::domain::entities::FIELD_SEPARATOR;
use crate::error::{StarMatchError, StarMatchResult};

/// Free-text fields are stored unescaped, so the separator is rejected up front.
pub(crate) fn ensure_storable(field: &str, value: &str) -> StarMatchResult<()> {
    if value.contains(FIELD_SEPARATOR) || value.contains(['\n', '\r']) {
        return Err(StarMatchError::InvalidInput(format!(
            "{field} must not contain '{FIELD_SEPARATOR}' or line breaks"
        )));
    }
    Ok(())
}

/// Trimmed copy of `value` once it is known to be storable.
pub(crate) fn storable_text(field: &str, value: &str) -> StarMatchResult<String> {
    ensure_storable(field, value)?;
    Ok(value.trim().to_string())
}

/// Partial-update rule: `None` or blank keeps the current value, anything
/// else is stored trimmed.
pub(crate) fn replace_unless_blank(current: &mut String, value: Option<String>) {
    if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        *current = value.to_string();
    }
}
