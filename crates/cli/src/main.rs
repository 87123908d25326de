//! scaffold: inspect the entity model inferred from a sample-data schema

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::inspect::{InspectArgs, handle_inspect};
use commands::names::handle_names;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Infer CRUD entity models from sample JSON", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a schema file and print the inferred entities
    Inspect {
        /// Path to the JSON schema file
        schema: PathBuf,

        /// Output format (json, yaml, table)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Output file path (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML configuration file with an [inference] table
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Treat date/time and UUID strings as plain strings
        #[arg(long)]
        no_formats: bool,
    },

    /// Print every naming variant derived from a word
    Names {
        /// Word or identifier to derive names from
        word: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inspect {
            schema,
            format,
            output,
            config,
            no_formats,
        } => handle_inspect(&InspectArgs {
            schema,
            format,
            output,
            config,
            no_formats,
        })?,
        Commands::Names { word } => handle_names(&word)?,
    }

    Ok(())
}
