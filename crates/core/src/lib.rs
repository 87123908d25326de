//! Entity Scaffold Core - schema inference for CRUD scaffolding
//!
//! Turns a small JSON description of entities into the typed model code
//! generators consume:
//! - Naming derivation (case styles, pluralization, display labels)
//! - Type inference into paired backend/frontend type vocabularies
//! - Entity assembly (identity detection, type discriminators, display views)
//! - Schema parsing with shape validation
//!
//! ## Example
//!
//! ```rust
//! use entity_scaffold_core::parse_schema;
//!
//! let entities = parse_schema(r#"{"product": {"name": "Sample", "price": 99.99}}"#)?;
//! let product = &entities[0];
//!
//! assert_eq!(product.name(), "Product");
//! assert_eq!(product.identity_property_name(), "Id");
//! assert_eq!(product.plural_kebab_name(), "products");
//! # Ok::<(), entity_scaffold_core::SchemaError>(())
//! ```

pub mod inference;
pub mod model;
pub mod naming;
pub mod parser;

// Re-export commonly used types
pub use inference::{BackendType, FrontendType, InferenceConfig, TypeDescriptor, TypeInferrer};
pub use model::{Entity, EntitySummary, Property};
pub use naming::NameVariants;
pub use parser::{SchemaError, SchemaParser, parse_schema};
