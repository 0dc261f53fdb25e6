//! In-memory Repository
//!
//! An id-keyed map; nothing survives the process.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::entities::{EntityId, HasId};
use crate::domain::ports::{Repository, RepositoryResult};

/// Map-backed repository. `get_all` returns entities in id order.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    entries: RefCell<HashMap<EntityId, T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HasId + Clone> Repository<T> for InMemoryRepository<T> {
    fn create(&self, entity: T) -> RepositoryResult<()> {
        self.entries
            .borrow_mut()
            .entry(entity.id())
            .or_insert(entity);
        Ok(())
    }

    fn get(&self, id: EntityId) -> RepositoryResult<Option<T>> {
        Ok(self.entries.borrow().get(&id).cloned())
    }

    fn update(&self, entity: T) -> RepositoryResult<()> {
        if let Some(existing) = self.entries.borrow_mut().get_mut(&entity.id()) {
            *existing = entity;
        }
        Ok(())
    }

    fn delete(&self, id: EntityId) -> RepositoryResult<()> {
        self.entries.borrow_mut().remove(&id);
        Ok(())
    }

    fn get_all(&self) -> RepositoryResult<Vec<T>> {
        let mut all: Vec<T> = self.entries.borrow().values().cloned().collect();
        all.sort_by_key(|e| e.id());
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Quote;
    use crate::domain::value_objects::Element;

    #[test]
    fn create_is_not_an_upsert() {
        let repo = InMemoryRepository::new();
        repo.create(Quote::new(1, Element::Fire, "first")).unwrap();
        repo.create(Quote::new(1, Element::Air, "second")).unwrap();
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(1).unwrap().unwrap().text, "first");
    }

    #[test]
    fn update_replaces_existing_only() {
        let repo = InMemoryRepository::new();
        repo.create(Quote::new(1, Element::Fire, "first")).unwrap();
        repo.update(Quote::new(1, Element::Fire, "edited")).unwrap();
        repo.update(Quote::new(2, Element::Fire, "phantom")).unwrap();
        assert_eq!(repo.get(1).unwrap().unwrap().text, "edited");
        assert_eq!(repo.get(2).unwrap(), None);
    }

    #[test]
    fn delete_missing_is_noop() {
        let repo: InMemoryRepository<Quote> = InMemoryRepository::new();
        repo.delete(42).unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn get_all_returns_every_entity() {
        let repo = InMemoryRepository::new();
        for id in 1..=3 {
            repo.create(Quote::new(id, Element::Earth, format!("q{id}")))
                .unwrap();
        }
        let mut ids: Vec<_> = repo.get_all().unwrap().iter().map(|q| q.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(repo.next_id().unwrap(), 4);
    }
}
