//! Configuration type definitions

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StarMatchResult;

use super::loader;

/// Which repository implementation backs every collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One flat file per collection, rewritten on every mutation
    #[default]
    File,
    /// Process-local maps; nothing survives exit
    Memory,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "files" | "flat-file" => Ok(Backend::File),
            "memory" | "in-memory" | "mem" => Ok(Backend::Memory),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::File => write!(f, "file"),
            Backend::Memory => write!(f, "memory"),
        }
    }
}

/// File names inside `data_dir`, one per collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageFiles {
    pub users: String,
    pub admins: String,
    pub signs: String,
    pub traits: String,
    pub quotes: String,
}

impl Default for StorageFiles {
    fn default() -> Self {
        Self {
            users: "users.txt".to_string(),
            admins: "admins.txt".to_string(),
            signs: "signs.txt".to_string(),
            traits: "traits.txt".to_string(),
            quotes: "quotes.txt".to_string(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: Backend,

    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub files: StorageFiles,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            data_dir: default_data_dir(),
            files: StorageFiles::default(),
        }
    }
}

impl StorageConfig {
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.users)
    }

    pub fn admins_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.admins)
    }

    pub fn signs_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.signs)
    }

    pub fn traits_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.traits)
    }

    pub fn quotes_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.quotes)
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StarMatchResult<Self> {
        let (config, warnings) = loader::load_with_warnings(path)?;
        for warning in &warnings {
            log::warn!("{warning}");
        }
        Ok(config)
    }
}
