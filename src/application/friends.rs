//! Friends Use Case
//!
//! Friend edges are the owner's list of emails. Adding writes only the
//! owner; removing clears both directions. Reads resolve against the
//! current user set, so edges to deleted accounts simply disappear.

use crate::domain::entities::User;
use crate::domain::ports::Repository;
use crate::domain::services::resolve_friends;
use crate::error::{StarMatchError, StarMatchResult};

pub struct FriendsUseCase<'a> {
    users: &'a dyn Repository<User>,
}

impl<'a> FriendsUseCase<'a> {
    pub fn new(users: &'a dyn Repository<User>) -> Self {
        Self { users }
    }

    /// Add `friend_email` to `user`'s list. Adding an already-listed
    /// friend is a no-op.
    pub fn add_friend(&self, user: &User, friend_email: &str) -> StarMatchResult<User> {
        let everyone = self.users.get_all()?;
        let mut owner = current(user, &everyone)?;
        if friend_email == owner.email {
            return Err(StarMatchError::InvalidInput(
                "cannot add yourself as a friend".into(),
            ));
        }
        if !everyone.iter().any(|u| u.email == friend_email) {
            return Err(StarMatchError::not_found("user", friend_email));
        }

        if owner.add_friend_email(friend_email) {
            self.users.update(owner.clone())?;
            log::info!("{} added friend {}", owner.email, friend_email);
        }
        Ok(owner)
    }

    /// Remove the edge in both directions and persist both users.
    pub fn remove_friend(&self, user: &User, friend_email: &str) -> StarMatchResult<User> {
        let everyone = self.users.get_all()?;
        let mut owner = current(user, &everyone)?;
        let mut friend = everyone
            .iter()
            .find(|u| u.email == friend_email)
            .cloned()
            .ok_or_else(|| StarMatchError::not_found("user", friend_email))?;

        if owner.remove_friend_email(&friend.email) {
            self.users.update(owner.clone())?;
        }
        if friend.remove_friend_email(&owner.email) {
            self.users.update(friend)?;
        }
        log::info!("{} removed friend {}", owner.email, friend_email);
        Ok(owner)
    }

    /// The user's friends as stored now, in list order.
    pub fn friends(&self, user: &User) -> StarMatchResult<Vec<User>> {
        let everyone = self.users.get_all()?;
        let owner = current(user, &everyone)?;
        Ok(resolve_friends(&owner, &everyone))
    }
}

/// Reload `user` from the snapshot so stale copies never overwrite newer edges.
fn current(user: &User, everyone: &[User]) -> StarMatchResult<User> {
    everyone
        .iter()
        .find(|u| u.id == user.id)
        .cloned()
        .ok_or_else(|| StarMatchError::not_found("user", user.id))
}
