//! Admin entity
//!
//! Line format: `id,name,email,password`

use serde::{Deserialize, Serialize};

use super::record::{join_line, parse_field, require_fields};
use super::{EntityId, HasId, Record, RecordError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Admin {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl HasId for Admin {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Record for Admin {
    const KIND: &'static str = "admin";

    fn to_line(&self) -> String {
        join_line(
            &[
                self.id.to_string(),
                self.name.clone(),
                self.email.clone(),
                self.password.clone(),
            ],
            &[],
        )
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        require_fields(fields, 4)?;
        Ok(Admin::new(
            parse_field(fields, 0, "id")?,
            fields[1],
            fields[2],
            fields[3],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_line_round_trip() {
        let admin = Admin::new(3, "Root", "root@example.com", "hunter2");
        let line = admin.to_line();
        assert_eq!(line, "3,Root,root@example.com,hunter2");
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(Admin::from_fields(&fields).unwrap(), admin);
    }
}
