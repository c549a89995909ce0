//! Connector Kit CLI
//!
//! Usage:
//!   connector-kit [OPTIONS] <COMMAND>
//!
//! Commands:
//!   resolve    Resolve a template from a catalog into a connector
//!   summarize  Preview the connector a template would produce
//!   templates  List template ids in a catalog
//!   tags       Aggregate the tags of one or more listing files

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use connector_kit::model::ConnectorSettings;
use connector_kit::{
    to_toml, CatalogError, ConnectorGenerator, GeneratorError, TagFinder, TagListing,
    TemplateMetadataDerivation, TemplateRegistry,
};

#[derive(Parser)]
#[command(name = "connector-kit")]
#[command(about = "Resolve connector templates and aggregate tags")]
struct Cli {
    /// Log resolution steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a template into a connector
    Resolve(ResolveArgs),
    /// Preview name, description and properties without resolving
    Summarize(ResolveArgs),
    /// List template ids in a catalog
    Templates {
        /// Template catalog (TOML format)
        #[arg(short, long)]
        catalog: PathBuf,
    },
    /// Aggregate tags across listing files
    Tags {
        /// Listing files (TOML format)
        #[arg(required = true)]
        listings: Vec<PathBuf>,
    },
}

#[derive(Args)]
struct ResolveArgs {
    /// Template catalog (TOML format)
    #[arg(short, long)]
    catalog: PathBuf,

    /// Template id to resolve
    #[arg(short, long)]
    template: String,

    /// Settings file (TOML format)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Connector name, overrides the settings file
    #[arg(long)]
    name: Option<String>,

    /// Connector description, overrides the settings file
    #[arg(long)]
    description: Option<String>,

    /// Configured property as key=value, may be repeated
    #[arg(long = "set", value_name = "KEY=VALUE")]
    properties: Vec<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error("invalid property assignment '{0}', expected KEY=VALUE")]
    InvalidAssignment(String),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(output) => {
            print!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "connector_kit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Resolve(args) => {
            let (registry, settings) = load_request(&args)?;
            let generator = ConnectorGenerator::new(TemplateMetadataDerivation);
            let connector = generator.resolve_registered(&registry, &args.template, &settings)?;
            Ok(to_toml(&connector)?)
        }
        Command::Summarize(args) => {
            let (registry, settings) = load_request(&args)?;
            let generator = ConnectorGenerator::new(TemplateMetadataDerivation);
            let summary = generator.summarize_registered(&registry, &args.template, &settings)?;
            Ok(to_toml(&summary)?)
        }
        Command::Templates { catalog } => {
            let registry = TemplateRegistry::from_file(&catalog)?;
            let mut output = String::new();
            for id in registry.ids() {
                output.push_str(id);
                output.push('\n');
            }
            Ok(output)
        }
        Command::Tags { listings } => {
            let mut finder = TagFinder::new();
            for path in &listings {
                let listing = TagListing::from_file(path)?;
                finder.extend_from(&listing.integrations);
                finder.extend_from(&listing.connections);
            }
            Ok(to_toml(&finder.result())?)
        }
    }
}

/// Load the catalog and build settings from the file and command line overrides
fn load_request(args: &ResolveArgs) -> Result<(TemplateRegistry, ConnectorSettings), CliError> {
    let registry = TemplateRegistry::from_file(&args.catalog)?;

    let mut settings = match &args.settings {
        Some(path) => ConnectorSettings::from_file(path)?,
        None => ConnectorSettings::new(),
    };
    if let Some(name) = &args.name {
        settings = settings.with_name(name.clone());
    }
    if let Some(description) = &args.description {
        settings = settings.with_description(description.clone());
    }
    for assignment in &args.properties {
        let (key, value) = assignment
            .split_once('=')
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| CliError::InvalidAssignment(assignment.clone()))?;
        settings = settings.put_configured_property(key, value);
    }

    Ok((registry, settings))
}
