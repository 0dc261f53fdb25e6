//! Accounts Use Case
//!
//! Login validation, sign-up, partial updates and removal for users and admins.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::entities::{Admin, EntityId, User};
use crate::domain::policies::is_valid_email;
use crate::domain::ports::Repository;
use crate::domain::value_objects::BirthProfile;
use crate::error::{StarMatchError, StarMatchResult};

use super::{ensure_storable, replace_unless_blank, storable_text};

/// Sign-up request
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub birth: BirthProfile,
}

/// Partial user update. `None` or blank text leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_time: Option<NaiveTime>,
    pub birth_place: Option<String>,
}

/// Partial admin update. `None` or blank text leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct AdminUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct AccountsUseCase<'a> {
    users: &'a dyn Repository<User>,
    admins: &'a dyn Repository<Admin>,
}

impl<'a> AccountsUseCase<'a> {
    pub fn new(users: &'a dyn Repository<User>, admins: &'a dyn Repository<Admin>) -> Self {
        Self { users, admins }
    }

    /// The user whose email and password both match exactly.
    pub fn authenticate_user(&self, email: &str, password: &str) -> StarMatchResult<Option<User>> {
        Ok(self
            .users
            .get_all()?
            .into_iter()
            .find(|u| u.email == email && u.password == password))
    }

    pub fn validate_user_login(&self, email: &str, password: &str) -> StarMatchResult<bool> {
        Ok(self.authenticate_user(email, password)?.is_some())
    }

    pub fn validate_admin_login(&self, email: &str, password: &str) -> StarMatchResult<bool> {
        Ok(self
            .admins
            .get_all()?
            .iter()
            .any(|a| a.email == email && a.password == password))
    }

    /// Register a user. Text fields are stored trimmed; the password is
    /// stored exactly as given.
    pub fn sign_up_user(&self, new: NewUser) -> StarMatchResult<User> {
        let email = new.email.trim();
        check_email(email)?;
        let name = storable_text("name", &new.name)?;
        ensure_storable("password", &new.password)?;
        let place = storable_text("birth place", &new.birth.place)?;
        if self.find_user_by_email(email)?.is_some() {
            return Err(StarMatchError::EmailTaken(email.to_string()));
        }

        let user = User::new(
            self.users.next_id()?,
            name,
            email,
            new.password,
            BirthProfile::new(new.birth.date, new.birth.time, place),
        );
        self.users.create(user.clone())?;
        log::info!("signed up user {} ({})", user.id, user.email);
        Ok(user)
    }

    pub fn create_admin(&self, name: &str, email: &str, password: &str) -> StarMatchResult<Admin> {
        let email = email.trim();
        check_email(email)?;
        let name = storable_text("name", name)?;
        ensure_storable("password", password)?;
        if self.admins.get_all()?.iter().any(|a| a.email == email) {
            return Err(StarMatchError::EmailTaken(email.to_string()));
        }

        let admin = Admin::new(self.admins.next_id()?, name, email, password);
        self.admins.create(admin.clone())?;
        log::info!("created admin {} ({})", admin.id, admin.email);
        Ok(admin)
    }

    /// Apply a partial update. An email change is carried into every other
    /// user's friend list so existing edges keep resolving.
    pub fn update_user(&self, id: EntityId, changes: UserUpdate) -> StarMatchResult<User> {
        let mut user = self.user(id)?;
        let old_email = user.email.clone();

        if let Some(email) = non_blank(&changes.email) {
            check_email(email)?;
            if email != old_email && self.find_user_by_email(email)?.is_some() {
                return Err(StarMatchError::EmailTaken(email.to_string()));
            }
        }
        for (field, value) in [
            ("name", &changes.name),
            ("password", &changes.password),
            ("birth place", &changes.birth_place),
        ] {
            if let Some(value) = value {
                ensure_storable(field, value)?;
            }
        }

        replace_unless_blank(&mut user.name, changes.name);
        replace_unless_blank(&mut user.email, changes.email);
        replace_password(&mut user.password, changes.password);
        replace_unless_blank(&mut user.birth.place, changes.birth_place);
        if let Some(date) = changes.birth_date {
            user.birth.date = date;
        }
        if let Some(time) = changes.birth_time {
            user.birth.time = time;
        }

        if user.email != old_email {
            for mut other in self.users.get_all()? {
                if other.id != user.id && other.rename_friend_email(&old_email, &user.email) {
                    self.users.update(other)?;
                }
            }
            log::info!("user {} changed email {} -> {}", user.id, old_email, user.email);
        }

        self.users.update(user.clone())?;
        Ok(user)
    }

    pub fn update_admin(&self, id: EntityId, changes: AdminUpdate) -> StarMatchResult<Admin> {
        let mut admin = self
            .admins
            .get(id)?
            .ok_or_else(|| StarMatchError::not_found("admin", id))?;

        if let Some(email) = non_blank(&changes.email) {
            check_email(email)?;
            let taken = self
                .admins
                .get_all()?
                .iter()
                .any(|a| a.id != admin.id && a.email == email);
            if taken {
                return Err(StarMatchError::EmailTaken(email.to_string()));
            }
        }
        for (field, value) in [("name", &changes.name), ("password", &changes.password)] {
            if let Some(value) = value {
                ensure_storable(field, value)?;
            }
        }

        replace_unless_blank(&mut admin.name, changes.name);
        replace_unless_blank(&mut admin.email, changes.email);
        replace_password(&mut admin.password, changes.password);
        self.admins.update(admin.clone())?;
        Ok(admin)
    }

    /// Delete a user and strip their email from every other friend list.
    pub fn remove_user(&self, id: EntityId) -> StarMatchResult<()> {
        let user = self.user(id)?;
        for mut other in self.users.get_all()? {
            if other.id != id && other.remove_friend_email(&user.email) {
                self.users.update(other)?;
            }
        }
        self.users.delete(id)?;
        log::info!("removed user {} ({})", id, user.email);
        Ok(())
    }

    pub fn remove_admin(&self, id: EntityId) -> StarMatchResult<()> {
        self.admins.delete(id)?;
        Ok(())
    }

    pub fn users(&self) -> StarMatchResult<Vec<User>> {
        Ok(self.users.get_all()?)
    }

    pub fn admins(&self) -> StarMatchResult<Vec<Admin>> {
        Ok(self.admins.get_all()?)
    }

    pub fn user(&self, id: EntityId) -> StarMatchResult<User> {
        self.users
            .get(id)?
            .ok_or_else(|| StarMatchError::not_found("user", id))
    }

    pub fn user_by_email(&self, email: &str) -> StarMatchResult<User> {
        self.find_user_by_email(email)?
            .ok_or_else(|| StarMatchError::not_found("user", email))
    }

    /// Every user except the one with `email`.
    pub fn users_except(&self, email: &str) -> StarMatchResult<Vec<User>> {
        Ok(self
            .users
            .get_all()?
            .into_iter()
            .filter(|u| u.email != email)
            .collect())
    }

    fn find_user_by_email(&self, email: &str) -> StarMatchResult<Option<User>> {
        Ok(self.users.get_all()?.into_iter().find(|u| u.email == email))
    }
}

fn check_email(email: &str) -> StarMatchResult<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(StarMatchError::InvalidEmail(email.to_string()))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Like `replace_unless_blank`, but a password is kept byte for byte.
fn replace_password(current: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        *current = value;
    }
}
