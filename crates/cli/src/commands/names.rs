//! CLI command for previewing the naming variants of a word

use entity_scaffold_core::NameVariants;

use crate::error::CliError;
use crate::output::format_names;

/// Render the naming variants of `word`
pub fn render_names(word: &str) -> Result<String, CliError> {
    if word.trim().is_empty() {
        return Err(CliError::InvalidArgument(
            "Word must not be empty".to_string(),
        ));
    }
    Ok(format_names(&NameVariants::new(word)))
}

/// Handle the `names` command
pub fn handle_names(word: &str) -> Result<(), CliError> {
    print!("{}", render_names(word)?);
    Ok(())
}
