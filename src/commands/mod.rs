//! Command handlers
//!
//! Each handler resolves the acting user (when it needs one), calls a single
//! use case and prints the result as text or JSON.

pub mod accounts;
pub mod friends;
pub mod profile;

use anyhow::{bail, Result};
use serde::Serialize;

use starmatch::{StarMatchService, User};

use crate::cli::Credentials;

/// Resolve `credentials` to the stored user or fail the command.
pub(crate) fn authenticate(service: &StarMatchService, credentials: &Credentials) -> Result<User> {
    match service
        .accounts()
        .authenticate_user(&credentials.email, &credentials.password)?
    {
        Some(user) => Ok(user),
        None => bail!("invalid email or password"),
    }
}

pub(crate) fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
