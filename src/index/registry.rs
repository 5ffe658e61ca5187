//! Entity registry: the single owner of every live entity record.
//!
//! Every `EntityId` handed out elsewhere (in an in-neighbor set, in a
//! leaders set) is a non-owning reference into this map. Resolving one
//! back to its [`Entity`] always goes through [`EntityRegistry::get`] /
//! [`EntityRegistry::get_mut`]; nothing outside the registry ever owns an
//! `Entity` directly.

use std::collections::HashMap;
use std::collections::hash_map;

use super::entity::Entity;
use super::ids::EntityId;

/// Owns every live entity, keyed by its identifier bytes.
///
/// A plain `HashMap` is sufficient: the reference implementation's
/// fixed-size chained hash table with a custom mixing function is an
/// implementation detail the contract does not require (`O(1)` average
/// add/find/remove is all that's specified).
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: HashMap<EntityId, Entity>,
}

impl EntityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures an entity with the given id exists, creating one with an
    /// empty relation map if it did not. No-op if already present.
    ///
    /// Returns the canonical `EntityId` for `id`, the same `Rc` clone
    /// used as the registry's own key, so further references share the
    /// one allocation.
    pub fn add(&mut self, id: &[u8]) -> EntityId {
        if let Some((key, _)) = self.entities.get_key_value(id) {
            return key.clone();
        }
        let key = EntityId::from(id);
        self.entities.insert(key.clone(), Entity::new());
        key
    }

    /// Resolves `id` to its canonical handle, if the entity is live.
    #[must_use]
    pub fn find(&self, id: &[u8]) -> Option<EntityId> {
        self.entities.get_key_value(id).map(|(key, _)| key.clone())
    }

    /// Borrows the entity named by `id`, if live.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Mutably borrows the entity named by `id`, if live.
    pub fn get_mut(&mut self, id: &EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Removes the entity named by `id`.
    ///
    /// Callers must have already severed every reference to it from other
    /// entities' in-neighbor sets and from every type's leaders set before
    /// calling this; see `Engine::delent`.
    pub fn remove(&mut self, id: &[u8]) -> Option<Entity> {
        self.entities.remove(id)
    }

    /// Iterates over every live entity and its id, in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, EntityId, Entity> {
        self.entities.iter()
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the registry currently holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
