//! Domain Services
//!
//! Stateless, deterministic functions over domain types.

pub mod astrology;
pub mod catalog;
pub mod compatibility;
pub mod friends;

pub use astrology::{moon_sign, natal_chart, rising_sign, sun_sign};
pub use compatibility::{compatibility_score, element_compatible, name_hash, pair_score};
pub use friends::{are_mutual_friends, resolve_friends};
