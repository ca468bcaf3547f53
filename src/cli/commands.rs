use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::document::SwaggerDocument;
use crate::logging::{init_logging, LogConfig};
use crate::manifest::registry_from_file;

/// Command-line interface for openapi-paths
#[derive(Parser)]
#[command(name = "openapi-paths")]
#[command(about = "Assemble Swagger 2.0 documents from declarative manifests", long_about = None)]
pub struct Cli {
    /// Log at debug level regardless of OAPI_PATHS_LOG_LEVEL
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the document described by a manifest
    Build {
        /// Manifest file (YAML, JSON or TOML)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output serialization
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Apply a manifest and report the first rejected declaration
    Check {
        /// Manifest file (YAML, JSON or TOML)
        #[arg(short, long)]
        manifest: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Serialize a document in the requested format.
pub fn render(document: &SwaggerDocument, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(document).context("Failed to render JSON")?
        }
        OutputFormat::Yaml => serde_yaml::to_string(document).context("Failed to render YAML")?,
    };
    Ok(rendered)
}

fn build(manifest: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let registry = registry_from_file(manifest)?;
    let document = registry.document()?;
    let rendered = render(&document, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                output = %path.display(),
                paths_count = document.paths.len(),
                "Document written"
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn check(manifest: &Path) -> Result<()> {
    let registry = registry_from_file(manifest)?;
    let paths = registry.build_paths();
    println!(
        "{}: {} declared paths, {} rendered",
        manifest.display(),
        registry.paths().len(),
        paths.len()
    );
    Ok(())
}

/// Execute an already parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Build {
            manifest,
            format,
            output,
        } => build(manifest, *format, output.as_deref()),
        Commands::Check { manifest } => check(manifest),
    }
}

/// Parse `std::env::args`, set up logging and run.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let mut config = LogConfig::from_env();
    if cli.verbose {
        config = config.with_level("debug");
    }
    init_logging(&config)?;
    run(&cli)
}
