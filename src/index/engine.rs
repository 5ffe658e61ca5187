//! Incremental maximum in-degree index: the five state transitions that
//! drive the whole system, plus the `report` emitter (its output half
//! lives here since it only ever reads engine state).

use std::cmp::Ordering;
use std::io::{self, Write};

use tracing::trace;

use super::ids::{EntityId, TypeName};
use super::registry::EntityRegistry;
use super::types::RelationTypeTable;

/// Owns every live entity and the current per-type leader state, and
/// applies the five commands while preserving the invariants:
///
/// - P1: every tracked type's `current_max` equals the true maximum
///   in-degree among live entities for that type, and is at least `1`.
/// - P2: an entity is in a type's leaders set iff its in-degree for that
///   type equals the type's `current_max`.
#[derive(Debug, Default)]
pub struct Engine {
    registry: EntityRegistry,
    types: RelationTypeTable,
}

impl Engine {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `addent(id)`: registers `id` as live if it is not already. No-op on
    /// an already-live id. Cannot affect any type descriptor.
    pub fn addent(&mut self, id: &[u8]) {
        self.registry.add(id);
        trace!(entities = self.registry.len(), "addent");
    }

    /// `delent(id)`: removes `id` and every relation that names it as
    /// source or target, recomputing every affected type's leader state.
    ///
    /// No-op if `id` is not live. The sweep touches every live type once
    /// and every live entity's in-neighbor set for that type, which is the
    /// linear cost the design accepts in exchange for not maintaining
    /// back-edges, which is acceptable since `delent` is rare relative to
    /// `addrel`.
    pub fn delent(&mut self, id: &[u8]) {
        let Some(e) = self.registry.find(id) else {
            return;
        };

        let live_types: Vec<TypeName> = self.types.type_names().cloned().collect();
        for t in &live_types {
            for other_id in self.live_entity_ids() {
                if other_id == e {
                    continue;
                }
                if let Some(entity) = self.registry.get_mut(&other_id)
                    && let Some(set) = entity.get_mut(t)
                {
                    set.remove(&e);
                }
            }
            if let Some(target) = self.registry.get_mut(&e) {
                target.drop_type(t);
            }
            self.recompute(t);
        }

        self.registry.remove(id);
        trace!(entities = self.registry.len(), "delent");
    }

    /// `addrel(from, to, type)`: records that `from` points at `to` with
    /// relation `type`. No-op if either endpoint is unknown or the triple
    /// already exists. Self-relations (`from == to`) are permitted.
    #[allow(clippy::expect_used)]
    pub fn addrel(&mut self, from: &[u8], to: &[u8], rel_type: &[u8]) {
        let Some(from_id) = self.registry.find(from) else {
            return;
        };
        let Some(to_id) = self.registry.find(to) else {
            return;
        };

        let type_name = self.types.get_or_create(rel_type);
        let to_entity = self
            .registry
            .get_mut(&to_id)
            .expect("to_id was just resolved via find");
        let set = to_entity.get_or_create(&type_name);
        if !set.insert(from_id) {
            return;
        }
        let k = set.len();

        let descriptor = self
            .types
            .get_mut(type_name.as_bytes())
            .expect("descriptor was just created by get_or_create");
        match k.cmp(&descriptor.current_max) {
            Ordering::Equal => {
                descriptor.leaders.insert(to_id);
            }
            Ordering::Greater => {
                descriptor.leaders.clear();
                descriptor.current_max = k;
                descriptor.leaders.insert(to_id);
            }
            Ordering::Less => {}
        }
        trace!(k, ?rel_type, "addrel");
    }

    /// `delrel(from, to, type)`: removes the relation `from -> to` of the
    /// given type, if it exists, and restores leader consistency.
    #[allow(clippy::expect_used)]
    pub fn delrel(&mut self, from: &[u8], to: &[u8], rel_type: &[u8]) {
        let Some(from_id) = self.registry.find(from) else {
            return;
        };
        let Some(to_id) = self.registry.find(to) else {
            return;
        };
        let Some(current_max) = self.types.get(rel_type).map(|d| d.current_max) else {
            return;
        };

        let Some(to_entity) = self.registry.get_mut(&to_id) else {
            return;
        };
        let Some(set) = to_entity.get_mut(rel_type) else {
            return;
        };
        if !set.remove(&from_id) {
            return;
        }
        let k_old = set.len() + 1;

        if k_old != current_max {
            return;
        }

        let descriptor = self
            .types
            .get_mut(rel_type)
            .expect("descriptor resolved above still exists");
        if descriptor.leaders.len() > 1 {
            descriptor.leaders.remove(&to_id);
        } else {
            self.recompute(rel_type);
        }
        trace!(?rel_type, "delrel");
    }

    /// `report()`: writes the current leader state for every tracked type,
    /// in ascending type-name order, each with its leaders in ascending id
    /// order, to `out`.
    ///
    /// Writes raw bytes rather than validated UTF-8 text, since identifiers
    /// are opaque byte strings. Reproduces the reference format verbatim,
    /// including the trailing space before the final newline.
    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        if self.types.is_empty() {
            out.write_all(b"none\n")?;
            return Ok(());
        }
        for (type_name, descriptor) in self.types.iter() {
            write_quoted(out, type_name.as_bytes())?;
            for leader in &descriptor.leaders {
                write_quoted(out, leader.as_bytes())?;
            }
            write!(out, "{}; ", descriptor.current_max)?;
        }
        out.write_all(b"\n")
    }

    /// Global recompute for type `t`: rebuilds `current_max` and `leaders`
    /// from scratch by scanning every live entity's in-degree for `t`, then
    /// drops the descriptor if the result is `0`.
    ///
    /// Invoked when an incremental update cannot locally determine the new
    /// leader set: `delrel` dethroning the sole leader, or `delent` after
    /// any live type's in-neighbor sets may have shrunk.
    fn recompute(&mut self, t: &[u8]) {
        let mut current_max = 0usize;
        let mut leaders = std::collections::BTreeSet::new();

        for (id, entity) in self.registry.iter() {
            let c = entity.in_degree(t);
            if c == 0 {
                continue;
            }
            match c.cmp(&current_max) {
                Ordering::Greater => {
                    leaders.clear();
                    current_max = c;
                    leaders.insert(id.clone());
                }
                Ordering::Equal => {
                    leaders.insert(id.clone());
                }
                Ordering::Less => {}
            }
        }

        if current_max == 0 {
            self.types.drop(t);
        } else if let Some(descriptor) = self.types.get_mut(t) {
            descriptor.current_max = current_max;
            descriptor.leaders = leaders;
        }
        trace!(?t, current_max, "recompute");
    }

    fn live_entity_ids(&self) -> Vec<EntityId> {
        self.registry.iter().map(|(id, _)| id.clone()).collect()
    }
}

fn write_quoted(out: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    out.write_all(b"\"")?;
    out.write_all(bytes)?;
    out.write_all(b"\" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_string(e: &Engine) -> String {
        let mut buf = Vec::new();
        e.report(&mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("test fixtures use ASCII identifiers")
    }

    #[test]
    fn report_on_empty_index_is_none() {
        let e = Engine::new();
        assert_eq!(report_string(&e), "none\n");
    }

    #[test]
    fn addrel_tracks_single_leader() {
        let mut e = Engine::new();
        e.addent(b"a");
        e.addent(b"b");
        e.addrel(b"a", b"b", b"friend");
        assert_eq!(report_string(&e), "\"friend\" \"b\" 1; \n");
    }

    #[test]
    fn addrel_on_unknown_entity_is_noop() {
        let mut e = Engine::new();
        e.addent(b"a");
        e.addrel(b"a", b"ghost", b"friend");
        assert_eq!(report_string(&e), "none\n");
    }

    #[test]
    fn addrel_is_idempotent_on_repeat() {
        let mut e = Engine::new();
        e.addent(b"a");
        e.addent(b"b");
        e.addrel(b"a", b"b", b"friend");
        let first = report_string(&e);
        e.addrel(b"a", b"b", b"friend");
        assert_eq!(report_string(&e), first);
    }

    #[test]
    fn tie_produces_multiple_leaders_in_order() {
        let mut e = Engine::new();
        for id in [b"a".as_slice(), b"b", b"c", b"d"] {
            e.addent(id);
        }
        e.addrel(b"a", b"c", b"friend");
        e.addrel(b"b", b"d", b"friend");
        assert_eq!(report_string(&e), "\"friend\" \"c\" \"d\" 1; \n");
    }

    #[test]
    fn delrel_restores_prestate() {
        let mut e = Engine::new();
        e.addent(b"a");
        e.addent(b"b");
        let before = report_string(&e);
        e.addrel(b"a", b"b", b"friend");
        e.delrel(b"a", b"b", b"friend");
        assert_eq!(report_string(&e), before);
    }

    #[test]
    fn delrel_dethroning_sole_leader_promotes_next() {
        let mut e = Engine::new();
        for id in [b"a".as_slice(), b"b", b"c", b"d"] {
            e.addent(id);
        }
        e.addrel(b"a", b"c", b"friend");
        e.addrel(b"a", b"d", b"friend");
        e.addrel(b"b", b"d", b"friend");
        assert_eq!(report_string(&e), "\"friend\" \"d\" 2; \n");
        e.delrel(b"b", b"d", b"friend");
        assert_eq!(report_string(&e), "\"friend\" \"c\" \"d\" 1; \n");
    }

    #[test]
    fn delent_removes_type_once_no_relations_remain() {
        let mut e = Engine::new();
        e.addent(b"a");
        e.addent(b"b");
        e.addrel(b"a", b"b", b"friend");
        e.delent(b"b");
        assert_eq!(report_string(&e), "none\n");
    }

    #[test]
    fn delent_as_source_drops_outgoing_relation() {
        let mut e = Engine::new();
        e.addent(b"a");
        e.addent(b"b");
        e.addent(b"c");
        e.addrel(b"a", b"c", b"friend");
        e.addrel(b"b", b"c", b"friend");
        e.delent(b"a");
        assert_eq!(report_string(&e), "\"friend\" \"c\" 1; \n");
    }

    #[test]
    fn self_relation_is_permitted() {
        let mut e = Engine::new();
        e.addent(b"a");
        e.addrel(b"a", b"a", b"self");
        assert_eq!(report_string(&e), "\"self\" \"a\" 1; \n");
    }
}
