//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StarMatchError, StarMatchResult};

use super::types::{Backend, Config};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "starmatch.toml";

/// Non-fatal configuration warning (unknown key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StarMatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| StarMatchError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StarMatchError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|dotted| {
            let (parent, key) = dotted.rsplit_once('.').unwrap_or(("", dotted.as_str()));
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: find_line_number(&content, key),
                suggestion: suggest_key(parent, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for this process.
///
/// An explicit path must exist and parse; the implicit locations are
/// skipped when absent. Environment overrides are applied last.
pub fn discover(explicit: Option<&Path>) -> StarMatchResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [
        Some(PathBuf::from(LOCAL_CONFIG_FILE)),
        dirs::config_dir().map(|d| d.join("starmatch/config.toml")),
    ];
    for path in candidates.into_iter().flatten() {
        if path.exists() {
            log::debug!("loading config from {}", path.display());
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (STARMATCH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // STARMATCH_BACKEND
    if let Some(value) = lookup("STARMATCH_BACKEND") {
        match value.parse::<Backend>() {
            Ok(backend) => config.storage.backend = backend,
            Err(e) => log::warn!("ignoring STARMATCH_BACKEND: {e}"),
        }
    }

    // STARMATCH_DATA_DIR
    if let Some(dir) = lookup("STARMATCH_DATA_DIR") {
        if !dir.trim().is_empty() {
            config.storage.data_dir = PathBuf::from(dir);
        }
    }

    config
}

/// Keys accepted inside the table at `parent` (dotted path, "" for the root).
fn known_keys(parent: &str) -> &'static [&'static str] {
    match parent {
        "" => &["storage"],
        "storage" => &["backend", "data_dir", "files"],
        "storage.files" => &["users", "admins", "signs", "traits", "quotes"],
        _ => &[],
    }
}

/// First line that assigns `key` or opens a table ending in `key`.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            let assigns = line
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            let opens = line
                .strip_prefix('[')
                .and_then(|header| header.split(']').next())
                .is_some_and(|header| header.trim().rsplit('.').next() == Some(key));
            assigns || opens
        })
        .map(|i| i + 1)
}

/// Closest known key in the same table, if it is at most two edits away.
fn suggest_key(parent: &str, unknown: &str) -> Option<String> {
    known_keys(parent)
        .iter()
        .map(|candidate| (edit_distance(unknown, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min()
        .map(|(_, candidate)| candidate.to_string())
}

/// Levenshtein distance over chars, one rolling row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_distance_counts_single_edits() {
        assert_eq!(edit_distance("backend", "backend"), 0);
        assert_eq!(edit_distance("bakend", "backend"), 1);
        assert_eq!(edit_distance("data-dir", "data_dir"), 1);
        assert_eq!(edit_distance("", "signs"), 5);
    }

    #[test]
    fn suggestions_come_from_the_same_table() {
        assert_eq!(suggest_key("storage", "bakend").as_deref(), Some("backend"));
        assert_eq!(suggest_key("storage.files", "user").as_deref(), Some("users"));
        assert_eq!(suggest_key("", "storge").as_deref(), Some("storage"));
        assert_eq!(suggest_key("storage", "users"), None);
    }

    #[test]
    fn line_lookup_matches_keys_not_substrings() {
        let content = "# set the backend below\n[storage]\nbackend = \"file\"\n[storage.files]\n";
        assert_eq!(find_line_number(content, "backend"), Some(3));
        assert_eq!(find_line_number(content, "files"), Some(4));
        assert_eq!(find_line_number(content, "quotes"), None);
    }
}
