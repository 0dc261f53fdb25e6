//! Element value object - the four classical elements
//!
//! Signs, traits and quotes are all classified by element.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Air, Element::Earth];

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Air => "Air",
            Element::Earth => "Earth",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element name outside Fire / Water / Air / Earth
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element '{0}' (expected Fire, Water, Air or Earth)")]
pub struct ParseElementError(pub String);

impl FromStr for Element {
    type Err = ParseElementError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Element::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseElementError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("fire".parse::<Element>(), Ok(Element::Fire));
        assert_eq!(" WATER ".parse::<Element>(), Ok(Element::Water));
        assert_eq!("Air".parse::<Element>(), Ok(Element::Air));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "Aether".parse::<Element>().unwrap_err();
        assert_eq!(err, ParseElementError("Aether".to_string()));
        assert!(err.to_string().contains("Aether"));
    }

    #[test]
    fn display_round_trips() {
        for element in Element::ALL {
            assert_eq!(element.to_string().parse::<Element>(), Ok(element));
        }
    }
}
