//! StarMatch - natal charts, friend graphs and compatibility scores
//!
//! StarMatch keeps users, admins and an astrological sign catalog in
//! swappable repositories (in-memory or flat files), derives a three-placement
//! natal chart from each user's birth date and time, and scores pairs of
//! mutual friends against each other.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{Repositories, StarMatchService};
pub use config::{Backend, Config, StorageConfig};
pub use domain::entities::{Admin, EntityId, HasId, Quote, Record, StarSign, Trait, User};
pub use domain::value_objects::{BirthProfile, Element, NatalChart, Planet, ZodiacSign};
pub use error::{StarMatchError, StarMatchResult};
