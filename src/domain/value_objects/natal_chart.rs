//! Natal chart value object
//!
//! A chart is exactly three placements in the order Sun, Moon, Rising.
//! Each placement carries the computed zodiac sign and, when the catalog
//! has an entry with that name, the catalog record (element and traits).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Element, ZodiacSign};
use crate::domain::entities::StarSign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Rising,
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Planet::Sun => write!(f, "Sun"),
            Planet::Moon => write!(f, "Moon"),
            Planet::Rising => write!(f, "Rising"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub planet: Planet,
    pub sign: ZodiacSign,
    /// Catalog entry for `sign`; `None` means the sign is unknown to the catalog.
    pub star_sign: Option<StarSign>,
}

impl Placement {
    pub fn new(planet: Planet, sign: ZodiacSign, star_sign: Option<StarSign>) -> Self {
        Self {
            planet,
            sign,
            star_sign,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.star_sign.is_none()
    }

    pub fn element(&self) -> Option<Element> {
        self.star_sign.as_ref().map(|s| s.element)
    }

    /// The catalog record, or an error naming the unresolved sign.
    pub fn resolved(&self) -> Result<&StarSign, UnresolvedPlacement> {
        self.star_sign.as_ref().ok_or(UnresolvedPlacement {
            planet: self.planet,
            sign: self.sign,
        })
    }
}

/// A placement whose sign has no catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{planet} sign {sign} is missing from the sign catalog")]
pub struct UnresolvedPlacement {
    pub planet: Planet,
    pub sign: ZodiacSign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    placements: [Placement; 3],
}

impl NatalChart {
    pub fn new(sun: Placement, moon: Placement, rising: Placement) -> Self {
        Self {
            placements: [sun, moon, rising],
        }
    }

    pub fn sun(&self) -> &Placement {
        &self.placements[0]
    }

    pub fn moon(&self) -> &Placement {
        &self.placements[1]
    }

    pub fn rising(&self) -> &Placement {
        &self.placements[2]
    }

    /// Sun, Moon, Rising - always in that order.
    pub fn placements(&self) -> &[Placement; 3] {
        &self.placements
    }
}
