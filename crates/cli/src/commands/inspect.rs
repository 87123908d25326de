//! CLI command for inspecting the entity model of a schema file

use std::path::{Path, PathBuf};

use entity_scaffold_core::{Entity, InferenceConfig, SchemaParser};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::{OutputFormat, format_entities};

/// Arguments for the `inspect` command
pub struct InspectArgs {
    /// Path to the JSON schema file
    pub schema: PathBuf,
    /// Output format
    pub format: OutputFormat,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// Optional TOML configuration file
    pub config: Option<PathBuf>,
    /// Disable date/time and UUID detection
    pub no_formats: bool,
}

/// Contents of a `scaffold.toml` configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub inference: InferenceConfig,
}

/// Load the inference configuration, falling back to defaults
pub fn load_config(path: Option<&Path>) -> Result<InferenceConfig, CliError> {
    let Some(path) = path else {
        return Ok(InferenceConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let config: ScaffoldConfig = toml::from_str(&content)
        .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;

    debug!("Loaded configuration from {}", path.display());
    Ok(config.inference)
}

/// Parse the schema file named by the arguments
pub fn parse_schema_file(args: &InspectArgs) -> Result<Vec<Entity>, CliError> {
    let mut config = load_config(args.config.as_deref())?;
    if args.no_formats {
        config.detect_formats = false;
    }

    let content = std::fs::read_to_string(&args.schema)
        .map_err(|e| CliError::FileReadError(format!("{}: {}", args.schema.display(), e)))?;

    let entities = SchemaParser::with_config(config).parse(&content)?;
    if entities.is_empty() {
        return Err(CliError::NoEntities(args.schema.display().to_string()));
    }

    Ok(entities)
}

/// Handle the `inspect` command
pub fn handle_inspect(args: &InspectArgs) -> Result<(), CliError> {
    let entities = parse_schema_file(args)?;
    let output_str = format_entities(&entities, args.format)?;

    if let Some(ref output_path) = args.output {
        std::fs::write(output_path, &output_str)
            .map_err(|e| CliError::FileWriteError(format!("{}: {}", output_path.display(), e)))?;
        info!(
            "Wrote {} entities to {}",
            entities.len(),
            output_path.display()
        );
    } else {
        println!("{}", output_str);
    }

    Ok(())
}
