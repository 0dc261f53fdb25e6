//! Profile Use Case
//!
//! Read accessors over derived data: natal chart, Sun-sign traits, the
//! quote of the day and pairwise compatibility.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::entities::{EntityId, Quote, StarSign, User};
use crate::domain::ports::Repository;
use crate::domain::services::{are_mutual_friends, compatibility_score, natal_chart};
use crate::domain::value_objects::NatalChart;
use crate::error::{StarMatchError, StarMatchResult};

/// Score between a user and one of their friends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    pub user_id: EntityId,
    pub friend_id: EntityId,
    pub score: i64,
}

pub struct ProfileUseCase<'a> {
    users: &'a dyn Repository<User>,
    signs: &'a dyn Repository<StarSign>,
    quotes: &'a dyn Repository<Quote>,
}

impl<'a> ProfileUseCase<'a> {
    pub fn new(
        users: &'a dyn Repository<User>,
        signs: &'a dyn Repository<StarSign>,
        quotes: &'a dyn Repository<Quote>,
    ) -> Self {
        Self {
            users,
            signs,
            quotes,
        }
    }

    pub fn natal_chart(&self, user: &User) -> StarMatchResult<NatalChart> {
        let catalog = self.signs.get_all()?;
        Ok(natal_chart(&user.birth, &catalog))
    }

    /// Traits of the user's Sun sign, in catalog order.
    pub fn personality_traits(&self, user: &User) -> StarMatchResult<Vec<String>> {
        let chart = self.natal_chart(user)?;
        Ok(chart.sun().resolved()?.traits.clone())
    }

    /// A quote sharing the Sun sign's element. The pick rotates with the
    /// day of year, so the same user gets the same quote all day.
    pub fn personalized_quote(&self, user: &User, on: NaiveDate) -> StarMatchResult<Quote> {
        let chart = self.natal_chart(user)?;
        let element = chart.sun().resolved()?.element;
        let mut matching: Vec<Quote> = self
            .quotes
            .get_all()?
            .into_iter()
            .filter(|q| q.element == element)
            .collect();
        if matching.is_empty() {
            return Err(StarMatchError::not_found("quote", element));
        }
        let pick = on.ordinal0() as usize % matching.len();
        Ok(matching.swap_remove(pick))
    }

    /// Score `user` against the friend registered under `friend_email`.
    /// Both users must list each other.
    pub fn compatibility(&self, user: &User, friend_email: &str) -> StarMatchResult<Compatibility> {
        let everyone = self.users.get_all()?;
        let owner = everyone
            .iter()
            .find(|u| u.id == user.id)
            .ok_or_else(|| StarMatchError::not_found("user", user.id))?;
        let friend = everyone
            .iter()
            .find(|u| u.email == friend_email)
            .ok_or_else(|| StarMatchError::not_found("user", friend_email))?;
        if !are_mutual_friends(owner, friend, &everyone) {
            return Err(StarMatchError::NotAFriend {
                email: friend_email.to_string(),
            });
        }

        let catalog = self.signs.get_all()?;
        let score = compatibility_score(
            &natal_chart(&owner.birth, &catalog),
            &natal_chart(&friend.birth, &catalog),
        )?;
        log::debug!("compatibility {} ~ {} = {}", owner.email, friend.email, score);
        Ok(Compatibility {
            user_id: owner.id,
            friend_id: friend.id,
            score,
        })
    }
}
