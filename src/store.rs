//! Ordered in-memory collection backing a [`ResourceActor`](crate::actor_framework::ResourceActor).
//!
//! Records keep their insertion order and are located by a linear scan.
//! The store is owned by a single actor task, so it needs no locking of its own.

use crate::actor_framework::{Entity, FrameworkError};

pub struct EntityStore<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Appends a record. Id uniqueness is the caller's job.
    pub fn insert(&mut self, item: T) -> &T {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn find(&self, id: &T::Id) -> Result<&T, FrameworkError> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    pub fn find_mut(&mut self, id: &T::Id) -> Result<&mut T, FrameworkError> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    /// Merges `patch` into the located record through [`Entity::on_update`].
    pub fn update(&mut self, id: &T::Id, patch: T::Patch) -> Result<&T, FrameworkError> {
        let item = self.find_mut(id)?;
        item.on_update(patch).map_err(FrameworkError::Rejected)?;
        Ok(item)
    }

    pub fn remove(&mut self, id: &T::Id) -> Result<T, FrameworkError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }
}
