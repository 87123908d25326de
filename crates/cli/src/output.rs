//! Output formatting for CLI

use std::str::FromStr;

use entity_scaffold_core::{Entity, EntitySummary, NameVariants};

use crate::error::CliError;

/// Output format for `scaffold inspect`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "table" | "text" => Ok(OutputFormat::Table),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown output format '{}'. Use: json, yaml, or table",
                other
            ))),
        }
    }
}

/// Render entities in the requested format
pub fn format_entities(entities: &[Entity], format: OutputFormat) -> Result<String, CliError> {
    let summaries: Vec<EntitySummary> = entities.iter().map(Entity::summary).collect();

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&summaries)
            .map_err(|e| CliError::SerializationError(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(&summaries)
            .map_err(|e| CliError::SerializationError(e.to_string())),
        OutputFormat::Table => Ok(format_table(entities)),
    }
}

/// Format entities as a readable table
pub fn format_table(entities: &[Entity]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Parsed {} entit(ies):\n", entities.len()));
    for entity in entities {
        output.push_str(&format!(
            "\n{} ({}) /{}  icon: {}\n",
            entity.name(),
            entity.display_name_plural(),
            entity.plural_kebab_name(),
            entity.icon()
        ));
        output.push_str(&format!("  Identity: {}\n", entity.identity_property_name()));
        if entity.use_type_discriminator() {
            output.push_str("  Type discriminator: yes\n");
        }

        let name_width = entity
            .properties()
            .iter()
            .map(|p| p.pascal_name().len())
            .max()
            .unwrap_or(0);
        let backend_width = entity
            .properties()
            .iter()
            .map(|p| p.backend_type().type_name().len())
            .max()
            .unwrap_or(0);

        for property in entity.properties() {
            let mut flags = Vec::new();
            if property.is_identity() {
                flags.push("identity");
            }
            if property.is_nullable() {
                flags.push("nullable");
            }
            if property.is_collection() {
                flags.push("collection");
            }
            if property.is_object() {
                flags.push("object");
            }

            let line = format!(
                "  {:<name_width$}  {:<backend_width$}  {}  {}",
                property.pascal_name(),
                property.backend_type().type_name(),
                property.frontend_type().type_name(),
                flags.join(", "),
            );
            output.push_str(line.trim_end());
            output.push('\n');
        }

        let display: Vec<&str> = entity
            .display_properties()
            .iter()
            .map(|p| p.pascal_name())
            .collect();
        output.push_str(&format!("  Display: {}\n", display.join(", ")));
    }

    output
}

/// Format every naming variant of a word
pub fn format_names(names: &NameVariants) -> String {
    [
        ("PascalCase", &names.pascal),
        ("camelCase", &names.camel),
        ("kebab-case", &names.kebab),
        ("snake_case", &names.snake),
        ("Plural", &names.plural),
        ("Singular", &names.singular),
        ("Title", &names.title),
        ("Humanized", &names.humanized),
    ]
    .iter()
    .map(|(label, value)| format!("{:<11} {}\n", label, value))
    .collect()
}
