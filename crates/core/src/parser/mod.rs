//! Schema parsing: JSON text to an ordered list of entities
//!
//! A schema is a JSON object whose members are entities. Each member's key
//! is the entity name and its value is a sample object whose fields become
//! the entity's properties:
//!
//! ```json
//! {
//!   "product": { "productId": "", "name": "Sample", "price": 99.99 },
//!   "category": { "name": "Tools", "tags": ["a", "b"] }
//! }
//! ```
//!
//! Entities are returned in document order. Parsing fails fast: malformed
//! JSON or a wrongly shaped member aborts the whole parse.

mod error;

use serde_json::Value;
use tracing::info;

use crate::inference::{InferenceConfig, value_type_name};
use crate::model::Entity;

pub use error::SchemaError;

/// Parses entity schemas
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaParser {
    config: InferenceConfig,
}

impl SchemaParser {
    /// Create a new parser with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new parser with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Parse schema text into entities
    ///
    /// An empty root object yields an empty list.
    pub fn parse(&self, json: &str) -> Result<Vec<Entity>, SchemaError> {
        let value: Value = serde_json::from_str(json)?;
        self.parse_value(&value)
    }

    /// Build entities from an already parsed schema document
    pub fn parse_value(&self, value: &Value) -> Result<Vec<Entity>, SchemaError> {
        let Value::Object(root) = value else {
            return Err(SchemaError::InvalidRoot {
                found: value_type_name(value),
            });
        };

        let entities = root
            .iter()
            .map(|(key, member)| match member {
                Value::Object(fields) => Ok(Entity::from_members_with(key, fields, &self.config)),
                other => Err(SchemaError::InvalidEntity {
                    key: key.clone(),
                    found: value_type_name(other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("Parsed {} entities from schema", entities.len());
        Ok(entities)
    }
}

/// Parse schema text with the default configuration
pub fn parse_schema(json: &str) -> Result<Vec<Entity>, SchemaError> {
    SchemaParser::new().parse(json)
}
