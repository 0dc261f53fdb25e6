//! Domain Entities
//!
//! Records with a stable integer identity.
//! - `User` - an account with a birth profile and a friend list
//! - `Admin` - an administrator account
//! - `StarSign` - a sign catalog entry (element + traits)
//! - `Trait` - a personality trait tied to an element
//! - `Quote` - a quote tied to an element
//!
//! Every entity implements [`Record`], the flat-line serialization contract
//! used by the file backend.

mod admin;
mod personality_trait;
mod quote;
mod record;
mod star_sign;
mod user;

pub use admin::Admin;
pub use personality_trait::Trait;
pub use quote::Quote;
pub use record::{EntityId, HasId, Record, RecordError, FIELD_SEPARATOR};
pub use star_sign::StarSign;
pub use user::User;
