//! In-memory incremental maximum in-degree index.
//!
//! This module is organized after the six components of the contract it
//! implements: an ordered set primitive ([`ids`]), the entity registry
//! ([`registry`]), each entity's own relation map ([`entity`]), the
//! relation-type table ([`types`]), and the incremental update/report
//! logic that ties them together ([`engine`]).

pub mod engine;
pub mod entity;
pub mod ids;
pub mod registry;
pub mod types;

pub use engine::Engine;
pub use ids::{Bytes, EntityId, TypeName};
