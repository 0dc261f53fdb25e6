//! Domain Policies
//!
//! Business rules applied before anything is persisted.

mod email_policy;

pub use email_policy::{is_valid_email, EMAIL_PATTERN};
