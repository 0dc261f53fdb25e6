//! Trait entity - a personality trait tied to an element
//!
//! Line format: `id,element,name`

use serde::{Deserialize, Serialize};

use super::record::{join_line, parse_field, require_fields};
use super::{EntityId, HasId, Record, RecordError};
use crate::domain::value_objects::Element;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub id: EntityId,
    pub element: Element,
    pub name: String,
}

impl Trait {
    pub fn new(id: EntityId, element: Element, name: impl Into<String>) -> Self {
        Self {
            id,
            element,
            name: name.into(),
        }
    }
}

impl HasId for Trait {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Record for Trait {
    const KIND: &'static str = "trait";

    fn to_line(&self) -> String {
        join_line(
            &[
                self.id.to_string(),
                self.element.to_string(),
                self.name.clone(),
            ],
            &[],
        )
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        require_fields(fields, 3)?;
        Ok(Trait::new(
            parse_field(fields, 0, "id")?,
            parse_field(fields, 1, "element")?,
            fields[2],
        ))
    }
}
