//! Friend resolution
//!
//! A user's friend emails are the only persisted form of a relationship.
//! Resolution maps them onto the current user set; emails with no matching
//! user are skipped, and the reverse edge is never assumed.

use crate::domain::entities::User;

/// Resolve `user`'s friend emails against `everyone`, preserving list order.
pub fn resolve_friends(user: &User, everyone: &[User]) -> Vec<User> {
    user.friend_emails()
        .iter()
        .filter_map(|email| {
            let found = everyone.iter().find(|u| &u.email == email);
            if found.is_none() {
                log::debug!("{}: dropping unresolved friend {}", user.email, email);
            }
            found.cloned()
        })
        .collect()
}

/// Whether each user's resolved friend list contains the other.
pub fn are_mutual_friends(a: &User, b: &User, everyone: &[User]) -> bool {
    let lists = |owner: &User, other: &User| {
        owner.lists_friend(&other.email) && everyone.iter().any(|u| u.email == other.email)
    };
    lists(a, b) && lists(b, a)
}
