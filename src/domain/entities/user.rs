//! User entity
//!
//! Line format: `id,name,email,password,birthDate,birthTime,birthPlace[,friendEmail...]`
//!
//! The friend list is stored as emails only. Resolving them into users is
//! done on demand against the full user set (see `domain::services::friends`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{join_line, parse_field, require_fields, trailing_list};
use super::{EntityId, HasId, Record, RecordError};
use crate::domain::value_objects::{format_birth_time, parse_birth_time, BirthProfile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub birth: BirthProfile,
    friend_emails: Vec<String>,
}

impl User {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        birth: BirthProfile,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            birth,
            friend_emails: Vec::new(),
        }
    }

    /// Persisted friend identifiers, in the order they were added
    pub fn friend_emails(&self) -> &[String] {
        &self.friend_emails
    }

    pub fn lists_friend(&self, email: &str) -> bool {
        self.friend_emails.iter().any(|e| e == email)
    }

    /// Append `email` unless already listed. Returns whether it was added.
    pub fn add_friend_email(&mut self, email: &str) -> bool {
        if self.lists_friend(email) {
            return false;
        }
        self.friend_emails.push(email.to_string());
        true
    }

    /// Drop every occurrence of `email`. Returns whether anything was removed.
    pub fn remove_friend_email(&mut self, email: &str) -> bool {
        let before = self.friend_emails.len();
        self.friend_emails.retain(|e| e != email);
        self.friend_emails.len() != before
    }

    /// Rewrite `old` to `new` in the friend list (account email change).
    pub fn rename_friend_email(&mut self, old: &str, new: &str) -> bool {
        let mut renamed = false;
        for email in self.friend_emails.iter_mut().filter(|e| *e == old) {
            *email = new.to_string();
            renamed = true;
        }
        if renamed {
            let mut seen = Vec::with_capacity(self.friend_emails.len());
            self.friend_emails.retain(|e| {
                if seen.contains(e) {
                    false
                } else {
                    seen.push(e.clone());
                    true
                }
            });
        }
        renamed
    }
}

impl HasId for User {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Record for User {
    const KIND: &'static str = "user";

    fn to_line(&self) -> String {
        join_line(
            &[
                self.id.to_string(),
                self.name.clone(),
                self.email.clone(),
                self.password.clone(),
                self.birth.date.format("%Y-%m-%d").to_string(),
                format_birth_time(self.birth.time),
                self.birth.place.clone(),
            ],
            &self.friend_emails,
        )
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        require_fields(fields, 7)?;
        let date = NaiveDate::parse_from_str(fields[4].trim(), "%Y-%m-%d").map_err(|_| {
            RecordError::InvalidField {
                field: "birthDate",
                value: fields[4].to_string(),
            }
        })?;
        let time = parse_birth_time(fields[5]).ok_or_else(|| RecordError::InvalidField {
            field: "birthTime",
            value: fields[5].to_string(),
        })?;

        let mut user = User::new(
            parse_field(fields, 0, "id")?,
            fields[1],
            fields[2],
            fields[3],
            BirthProfile::new(date, time, fields[6]),
        );
        for email in trailing_list(fields, 7) {
            user.add_friend_email(&email);
        }
        Ok(user)
    }
}
