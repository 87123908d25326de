//! CLI error types

use entity_scaffold_core::SchemaError;
use thiserror::Error;

/// Errors reported by `scaffold` commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file: {0}")]
    FileReadError(String),

    #[error("Failed to write file: {0}")]
    FileWriteError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    SchemaError(#[from] SchemaError),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Schema defines no entities: {0}")]
    NoEntities(String),
}
