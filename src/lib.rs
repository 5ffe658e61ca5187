//! # relindex
//!
//! An in-memory, incremental maximum in-degree index over named entities
//! and typed directed relations between them.
//!
//! Entities and relation types are arbitrary byte strings. A small set of
//! commands read from stdin (`addent`, `delent`, `addrel`, `delrel`,
//! `report`) mutate the index; `report` emits, for every relation type
//! currently in use, the entities with the highest in-degree of that type
//! and what that in-degree is. The index is maintained incrementally:
//! most commands update leader state in constant time, falling back to a
//! full recompute only when the sole leader for a type is dethroned or an
//! entity is removed.
//!
//! ## Example
//!
//! ```rust
//! use relindex::index::Engine;
//!
//! let mut engine = Engine::new();
//! engine.addent(b"alice");
//! engine.addent(b"bob");
//! engine.addrel(b"alice", b"bob", b"friend");
//!
//! let mut report = Vec::new();
//! engine.report(&mut report).unwrap();
//! assert_eq!(report, b"\"friend\" \"bob\" 1; \n");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod observability;

pub use error::{Error, Result};
pub use index::Engine;
