use std::collections::HashSet;

use crate::models::Entity;

/// Insertion-ordered collection of one entity kind.
///
/// Order is significant: it is the default display order for every
/// projection built on top of the store.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    items: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection. Total: duplicate ids are kept and logged.
    pub fn load(&mut self, entities: Vec<T>) {
        {
            let mut seen = HashSet::with_capacity(entities.len());
            for entity in &entities {
                if !seen.insert(entity.id()) {
                    tracing::warn!(kind = T::KIND, id = entity.id(), "duplicate id loaded into store");
                }
            }
        }
        tracing::info!(kind = T::KIND, count = entities.len(), "entity collection loaded");
        self.items = entities;
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// First entity with this id, in insertion order.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
