//! Catalog Use Case
//!
//! Star signs, personality traits and quotes. Admin-facing edits plus
//! `seed`, which installs the default catalog into empty collections.

use serde::Serialize;

use crate::domain::entities::{EntityId, Quote, StarSign, Trait};
use crate::domain::ports::Repository;
use crate::domain::services::catalog::{default_quotes, default_star_signs};
use crate::domain::value_objects::Element;
use crate::error::{StarMatchError, StarMatchResult};

use super::{ensure_storable, replace_unless_blank, storable_text};

/// What `seed` wrote, per collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub signs: usize,
    pub traits: usize,
    pub quotes: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.signs == 0 && self.traits == 0 && self.quotes == 0
    }
}

pub struct CatalogUseCase<'a> {
    signs: &'a dyn Repository<StarSign>,
    traits: &'a dyn Repository<Trait>,
    quotes: &'a dyn Repository<Quote>,
}

impl<'a> CatalogUseCase<'a> {
    pub fn new(
        signs: &'a dyn Repository<StarSign>,
        traits: &'a dyn Repository<Trait>,
        quotes: &'a dyn Repository<Quote>,
    ) -> Self {
        Self {
            signs,
            traits,
            quotes,
        }
    }

    pub fn signs(&self) -> StarMatchResult<Vec<StarSign>> {
        Ok(self.signs.get_all()?)
    }

    /// Parse `element` (case-insensitive) and store a new quote.
    pub fn create_quote(&self, text: &str, element: &str) -> StarMatchResult<Quote> {
        let element: Element = element.parse()?;
        let text = storable_text("quote", text)?;
        if text.is_empty() {
            return Err(StarMatchError::InvalidInput("quote text is empty".into()));
        }
        let quote = Quote::new(self.quotes.next_id()?, element, text);
        self.quotes.create(quote.clone())?;
        Ok(quote)
    }

    /// Replace the text of a quote. Blank text keeps the current one.
    pub fn update_quote(&self, id: EntityId, text: Option<String>) -> StarMatchResult<Quote> {
        let mut quote = self
            .quotes
            .get(id)?
            .ok_or_else(|| StarMatchError::not_found("quote", id))?;
        if let Some(text) = &text {
            ensure_storable("quote", text)?;
        }
        replace_unless_blank(&mut quote.text, text);
        self.quotes.update(quote.clone())?;
        Ok(quote)
    }

    pub fn remove_quote(&self, id: EntityId) -> StarMatchResult<()> {
        self.quotes.delete(id)?;
        Ok(())
    }

    pub fn quotes(&self) -> StarMatchResult<Vec<Quote>> {
        Ok(self.quotes.get_all()?)
    }

    pub fn create_trait(&self, name: &str, element: Element) -> StarMatchResult<Trait> {
        let name = storable_text("trait", name)?;
        if name.is_empty() {
            return Err(StarMatchError::InvalidInput("trait name is empty".into()));
        }
        let item = Trait::new(self.traits.next_id()?, element, name);
        self.traits.create(item.clone())?;
        Ok(item)
    }

    pub fn update_trait(
        &self,
        id: EntityId,
        name: Option<String>,
        element: Option<Element>,
    ) -> StarMatchResult<Trait> {
        let mut item = self
            .traits
            .get(id)?
            .ok_or_else(|| StarMatchError::not_found("trait", id))?;
        if let Some(name) = &name {
            ensure_storable("trait", name)?;
        }
        replace_unless_blank(&mut item.name, name);
        if let Some(element) = element {
            item.element = element;
        }
        self.traits.update(item.clone())?;
        Ok(item)
    }

    pub fn remove_trait(&self, id: EntityId) -> StarMatchResult<()> {
        self.traits.delete(id)?;
        Ok(())
    }

    pub fn traits(&self) -> StarMatchResult<Vec<Trait>> {
        Ok(self.traits.get_all()?)
    }

    /// Install the default catalog. Collections that already hold records
    /// are left untouched, so running this twice is harmless.
    pub fn seed(&self) -> StarMatchResult<SeedReport> {
        let mut report = SeedReport::default();

        if self.signs.get_all()?.is_empty() {
            for sign in default_star_signs() {
                self.signs.create(sign)?;
                report.signs += 1;
            }
        }

        if self.traits.get_all()?.is_empty() {
            let mut next_id: EntityId = 1;
            for sign in default_star_signs() {
                for name in &sign.traits {
                    self.traits.create(Trait::new(next_id, sign.element, name))?;
                    next_id += 1;
                    report.traits += 1;
                }
            }
        }

        if self.quotes.get_all()?.is_empty() {
            for quote in default_quotes() {
                self.quotes.create(quote)?;
                report.quotes += 1;
            }
        }

        log::info!(
            "seeded {} signs, {} traits, {} quotes",
            report.signs,
            report.traits,
            report.quotes
        );
        Ok(report)
    }
}
