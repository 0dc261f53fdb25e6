//! The full set of repositories the application works against

use crate::domain::entities::{Admin, Quote, StarSign, Trait, User};
use crate::domain::ports::Repository;

/// One repository per collection. All five share a backend in practice,
/// but nothing here requires it.
pub struct Repositories {
    pub users: Box<dyn Repository<User>>,
    pub admins: Box<dyn Repository<Admin>>,
    pub signs: Box<dyn Repository<StarSign>>,
    pub traits: Box<dyn Repository<Trait>>,
    pub quotes: Box<dyn Repository<Quote>>,
}
