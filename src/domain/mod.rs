//! Domain Layer
//!
//! Pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Persisted records (User, Admin, StarSign, Trait, Quote) and
//!   the line serialization contract they implement
//! - `value_objects/` - Immutable value types (Element, ZodiacSign, BirthProfile, NatalChart)
//! - `services/` - Astrology, compatibility and friend resolution
//! - `policies/` - Business rules (email acceptance)
//! - `ports/` - Repository interface implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and deterministic
//! 3. **Ports & Adapters** - All persistence goes through the `Repository` port

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
