//! Value Objects
//!
//! Immutable types without identity.

mod birth_profile;
mod element;
mod natal_chart;
mod zodiac;

pub use birth_profile::{format_birth_time, parse_birth_time, BirthProfile};
pub use element::{Element, ParseElementError};
pub use natal_chart::{NatalChart, Placement, Planet, UnresolvedPlacement};
pub use zodiac::ZodiacSign;
