//! StarSign entity - one entry of the sign catalog
//!
//! Line format: `id,name,element[,trait...]`

use serde::{Deserialize, Serialize};

use super::record::{join_line, parse_field, require_fields, trailing_list};
use super::{EntityId, HasId, Record, RecordError};
use crate::domain::value_objects::Element;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarSign {
    pub id: EntityId,
    pub name: String,
    pub element: Element,
    pub traits: Vec<String>,
}

impl StarSign {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        element: Element,
        traits: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            element,
            traits,
        }
    }
}

impl HasId for StarSign {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Record for StarSign {
    const KIND: &'static str = "star sign";

    fn to_line(&self) -> String {
        join_line(
            &[
                self.id.to_string(),
                self.name.clone(),
                self.element.to_string(),
            ],
            &self.traits,
        )
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        require_fields(fields, 3)?;
        Ok(StarSign::new(
            parse_field(fields, 0, "id")?,
            fields[1],
            parse_field(fields, 2, "element")?,
            trailing_list(fields, 3),
        ))
    }
}
