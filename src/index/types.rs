//! Relation-type table: one descriptor per relation type that has ever
//! been observed, keyed so the table can be walked in lexicographic order.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::collections::BTreeSet;

use super::ids::{EntityId, TypeName};

/// Tracks the current maximum in-degree for one relation type, and the set
/// of entities currently achieving it.
///
/// `leaders` is never empty while the descriptor exists in the owning
/// [`RelationTypeTable`]. A descriptor whose maximum drops back to `0` (no
/// live relation of that type remains) is removed from the table entirely
/// rather than kept around empty: absence of an entry means no relation of
/// that type has ever been observed, or all such relations have since been
/// removed.
#[derive(Debug, Default)]
pub struct TypeDescriptor {
    /// Highest in-degree any entity currently has for this relation type.
    pub current_max: usize,
    /// Every entity whose in-degree for this type equals `current_max`.
    pub leaders: BTreeSet<EntityId>,
}

/// Relation-type table, ordered lexicographically by type name.
///
/// A `BTreeMap` gives the `report` command its required iteration order
/// directly, without a separate sort step.
#[derive(Debug, Default)]
pub struct RelationTypeTable {
    types: BTreeMap<TypeName, TypeDescriptor>,
}

impl RelationTypeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical name and descriptor for `t`, creating an empty
    /// descriptor (max `0`, no leaders) if `t` has never been observed.
    pub fn get_or_create(&mut self, t: &[u8]) -> TypeName {
        if let Some((key, _)) = self.types.get_key_value(t) {
            return key.clone();
        }
        let key = TypeName::from(t);
        self.types.insert(key.clone(), TypeDescriptor::default());
        key
    }

    /// Borrows the descriptor for `t`, if that type has ever been observed.
    #[must_use]
    pub fn get(&self, t: &[u8]) -> Option<&TypeDescriptor> {
        self.types.get(t)
    }

    /// Mutably borrows the descriptor for `t`, if it exists.
    pub fn get_mut(&mut self, t: &[u8]) -> Option<&mut TypeDescriptor> {
        self.types.get_mut(t)
    }

    /// Removes the descriptor for `t` entirely, used once its maximum has
    /// dropped to `0`.
    pub fn drop(&mut self, t: &[u8]) {
        self.types.remove(t);
    }

    /// Iterates over every tracked type in lexicographic order.
    pub fn iter(&self) -> btree_map::Iter<'_, TypeName, TypeDescriptor> {
        self.types.iter()
    }

    /// Every relation type currently tracked, in lexicographic order.
    pub fn type_names(&self) -> impl Iterator<Item = &TypeName> {
        self.types.keys()
    }

    /// Whether no relation type currently has a nonzero maximum.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
