//! Per-entity relation map: for a live entity, the in-neighbor set of
//! each relation type for which it is currently a target.

use std::collections::{BTreeSet, HashMap};

use super::ids::{EntityId, TypeName};

/// A live entity and the relations that currently point at it.
///
/// `rel_in[t]` is the in-neighbor set for relation type `t`: the ordered
/// set of entities `x` such that `(x, self, t)` is a live relation. The
/// number of distinct relation types observed in practice is small, so a
/// plain `HashMap` is used rather than an ordered container. Per-entity
/// iteration order over types is never observed (only the global
/// relation-type table's order is, see [`crate::index::types`]).
#[derive(Debug, Default)]
pub struct Entity {
    rel_in: HashMap<TypeName, BTreeSet<EntityId>>,
}

impl Entity {
    /// Creates an entity with no incoming relations of any type.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the in-neighbor set for `t`, creating an empty one if this
    /// entity has never had a relation of that type.
    pub fn get_or_create(&mut self, t: &TypeName) -> &mut BTreeSet<EntityId> {
        self.rel_in.entry(t.clone()).or_default()
    }

    /// Returns the in-neighbor set for `t`, if one has ever been created.
    ///
    /// An entry can exist and be empty (all relations of that type were
    /// removed). The index does not garbage-collect empty in-neighbor
    /// sets between commands, since nothing external can observe the
    /// difference between "absent" and "empty".
    pub fn get(&self, t: &[u8]) -> Option<&BTreeSet<EntityId>> {
        self.rel_in.get(t)
    }

    /// Mutable access to the in-neighbor set for `t`, if present.
    pub fn get_mut(&mut self, t: &[u8]) -> Option<&mut BTreeSet<EntityId>> {
        self.rel_in.get_mut(t)
    }

    /// Removes the entire relation-type entry for `t`, if present.
    ///
    /// Used by `delent` to drop every incoming relation to the entity
    /// being removed in one step, rather than clearing the set member by
    /// member.
    pub fn drop_type(&mut self, t: &[u8]) {
        self.rel_in.remove(t);
    }

    /// In-degree of this entity for relation type `t`, or `0` if it has
    /// never had a relation of that type.
    #[must_use]
    pub fn in_degree(&self, t: &[u8]) -> usize {
        self.rel_in.get(t).map_or(0, BTreeSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> EntityId {
        EntityId::from(s.as_bytes())
    }

    #[test]
    fn absent_type_has_zero_in_degree() {
        let e = Entity::new();
        assert_eq!(e.in_degree(b"friend"), 0);
        assert!(e.get(b"friend").is_none());
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let mut e = Entity::new();
        let t: TypeName = id("friend");
        e.get_or_create(&t).insert(id("a"));
        e.get_or_create(&t).insert(id("b"));
        assert_eq!(e.in_degree(b"friend"), 2);
    }

    #[test]
    fn drop_type_removes_only_that_type() {
        let mut e = Entity::new();
        let friend: TypeName = id("friend");
        let enemy: TypeName = id("enemy");
        e.get_or_create(&friend).insert(id("a"));
        e.get_or_create(&enemy).insert(id("b"));
        e.drop_type(b"friend");
        assert_eq!(e.in_degree(b"friend"), 0);
        assert_eq!(e.in_degree(b"enemy"), 1);
    }
}
