//! Identity and line serialization contract
//!
//! Each entity renders itself as one comma-separated line and rebuilds itself
//! from the split fields. Fields are not escaped, so free text must not
//! contain the separator.

use std::str::FromStr;

/// Integer identity, unique within one collection
pub type EntityId = u32;

/// Separator between fields of a record line
pub const FIELD_SEPARATOR: char = ',';

/// Identity capability shared by every persisted entity
pub trait HasId {
    fn id(&self) -> EntityId;
}

/// Flat-line serialization for one entity type
pub trait Record: HasId + Sized {
    /// Entity name used in log lines and error messages
    const KIND: &'static str;

    /// Render the entity as one line (no trailing newline).
    fn to_line(&self) -> String;

    /// Rebuild the entity from a line split on [`FIELD_SEPARATOR`].
    ///
    /// Text fields are taken verbatim, so `from_fields` of a split `to_line`
    /// gives back an equal entity. Only ids, elements, dates and times
    /// tolerate surrounding whitespace.
    fn from_fields(fields: &[&str]) -> Result<Self, RecordError>;
}

/// A line whose fields cannot be decoded into an entity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("expected at least {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },

    #[error("field '{field}' has invalid value '{value}'")]
    InvalidField { field: &'static str, value: String },
}

pub(crate) fn require_fields(fields: &[&str], expected: usize) -> Result<(), RecordError> {
    if fields.len() < expected {
        return Err(RecordError::MissingFields {
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

pub(crate) fn parse_field<T: FromStr>(
    fields: &[&str],
    index: usize,
    field: &'static str,
) -> Result<T, RecordError> {
    let raw = fields.get(index).copied().unwrap_or_default();
    raw.trim().parse().map_err(|_| RecordError::InvalidField {
        field,
        value: raw.to_string(),
    })
}

/// Trailing fields from `start`, verbatim. Empty entries are kept so that
/// `join_line` reproduces the same line.
pub(crate) fn trailing_list(fields: &[&str], start: usize) -> Vec<String> {
    fields.iter().skip(start).map(|f| f.to_string()).collect()
}

/// Join fields with the separator; list items become trailing fields.
pub(crate) fn join_line(fields: &[String], list: &[String]) -> String {
    fields
        .iter()
        .chain(list.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(&FIELD_SEPARATOR.to_string())
}
