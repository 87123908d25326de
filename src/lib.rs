//! Entity Scaffold - infer CRUD entity models from sample JSON
//!
//! Facade over [`entity_scaffold_core`]. Code generators depend on this crate
//! and walk the [`Entity`] list returned by [`parse_schema`].

pub use entity_scaffold_core::*;
