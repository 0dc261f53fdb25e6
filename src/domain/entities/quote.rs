//! Quote entity
//!
//! Line format: `id,element,text`. The text must not contain commas.

use serde::{Deserialize, Serialize};

use super::record::{join_line, parse_field, require_fields};
use super::{EntityId, HasId, Record, RecordError};
use crate::domain::value_objects::Element;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: EntityId,
    pub element: Element,
    pub text: String,
}

impl Quote {
    pub fn new(id: EntityId, element: Element, text: impl Into<String>) -> Self {
        Self {
            id,
            element,
            text: text.into(),
        }
    }
}

impl HasId for Quote {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Record for Quote {
    const KIND: &'static str = "quote";

    fn to_line(&self) -> String {
        join_line(
            &[
                self.id.to_string(),
                self.element.to_string(),
                self.text.clone(),
            ],
            &[],
        )
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        require_fields(fields, 3)?;
        Ok(Quote::new(
            parse_field(fields, 0, "id")?,
            parse_field(fields, 1, "element")?,
            fields[2],
        ))
    }
}
