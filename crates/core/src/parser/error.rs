//! Error types for schema parsing

use thiserror::Error;

/// Errors that can occur while parsing an entity schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The text is not valid JSON
    #[error("JSON parsing error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },

    /// The root value is not an object
    #[error("Invalid schema: root must be an object, found {found}")]
    InvalidRoot { found: &'static str },

    /// A top-level member is not an object
    #[error("Invalid schema: entity '{key}' must be an object, found {found}")]
    InvalidEntity { key: String, found: &'static str },
}

impl SchemaError {
    /// Whether the JSON was well-formed but had the wrong shape
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            SchemaError::InvalidRoot { .. } | SchemaError::InvalidEntity { .. }
        )
    }

    /// The offending entity key, for member-level shape errors
    pub fn key(&self) -> Option<&str> {
        match self {
            SchemaError::InvalidEntity { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Parse {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }
}
