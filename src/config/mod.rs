//! Configuration module for StarMatch
//!
//! Configuration hierarchy:
//! 1. Environment variables (STARMATCH_*) (highest priority)
//! 2. Explicit `--config` path
//! 3. Working-directory config (`./starmatch.toml`)
//! 4. User config (`<config dir>/starmatch/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, discover, load_with_warnings, with_env_overrides, ConfigWarning,
};
pub use types::{Backend, Config, StorageConfig, StorageFiles};
