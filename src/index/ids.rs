//! Shared identifier type for entities and relation types.
//!
//! Both entity identifiers and relation-type names are arbitrary byte
//! strings (`addent "a"`, `addrel "from" "to" "friend"`). The index stores
//! the same identifier in many places at once (an entity's own registry
//! entry, any number of in-neighbor sets, at most one leaders set per type),
//! so a cheap, shareable handle is used everywhere instead of copying the
//! bytes per occurrence.

use std::borrow::Borrow;
use std::rc::Rc;

/// A reference-counted, immutable byte string used as both entity id and
/// relation-type name.
///
/// Cloning is a reference-count bump, not a byte copy. Ordering and
/// equality delegate to the underlying `[u8]`, which gives the strictly
/// lexicographic, byte-unsigned ordering the report format requires.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes(Rc<[u8]>);

impl Bytes {
    /// Returns the identifier as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Bytes {
    fn from(value: &[u8]) -> Self {
        Self(Rc::from(value))
    }
}

impl std::ops::Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for Bytes {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

/// Identifier of a live (or formerly live) entity.
///
/// An `EntityId` found in an in-neighbor set or a leaders set is a
/// non-owning reference: the entity it names may since have been removed
/// by `delent`, in which case it is the engine's responsibility to have
/// already scrubbed every set that held it (see [`crate::index::engine`]).
pub type EntityId = Bytes;

/// Name of a relation type, shared between a type descriptor's key in the
/// relation-type table and the matching key in each entity's relation map.
pub type TypeName = Bytes;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_lexicographically_by_byte_value() {
        let a = Bytes::from(b"a".as_slice());
        let b = Bytes::from(b"b".as_slice());
        let aa = Bytes::from(b"aa".as_slice());
        assert!(a < b);
        assert!(a < aa);
        assert!(aa < b);
    }

    #[test]
    fn clone_is_cheap_and_equal() {
        let a = Bytes::from(b"shared".as_slice());
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), b"shared");
    }
}
