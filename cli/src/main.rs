use std::path::PathBuf;

use clap::{Parser, Subcommand};
use placements::RegistryError;
use serde::Serialize;
use viewer::config::ConfigError;
use viewer::geometry::NaturalSize;

mod load;
mod report;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid locations file: {0}")]
    Locations(serde_json::Error),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no natural size for page index {0}; pass --width and --height or set expected_page_sizes in the config")]
    MissingSize(usize),
    #[error("natural size must be positive, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("unknown location `{0}` (names match exactly, including case)")]
    UnknownLocation(String),
}

#[derive(Parser, Debug)]
#[command(name = "campus-map", about = "Inspect the campus map position registry")]
struct Cli {
    /// Registry JSON file; the builtin campus table when omitted.
    #[arg(long, env = "CAMPUS_MAP_REGISTRY")]
    registry: Option<PathBuf>,

    /// Viewer config JSON file.
    #[arg(long, env = "CAMPUS_MAP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the registry and config for invalid entries.
    Validate,
    /// Overlay rectangles for a page, in natural image pixels.
    Page {
        /// 0-based page index.
        index: usize,
        #[arg(long, requires = "height")]
        width: Option<f64>,
        #[arg(long, requires = "width")]
        height: Option<f64>,
        /// JSON array of `{ "id", "name" }` locations that have 360° views.
        #[arg(long)]
        locations: Option<PathBuf>,
    },
    /// Metadata and placements of one location.
    Lookup {
        name: String,
        /// Only the placement on this 0-based page index.
        #[arg(long)]
        page: Option<usize>,
    },
    /// Print the registry as JSON.
    Export,
    /// Page numbers in use and how many locations each carries.
    Pages,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let registry = load::registry(cli.registry.as_deref())?;

    match cli.command {
        Command::Validate => {
            let config = load::config(cli.config.as_deref())?;
            config.validate()?;
            tracing::info!(
                entries = registry.len(),
                pages = ?registry.page_numbers(),
                "registry and config are valid"
            );
            println!("ok");
            Ok(())
        }
        Command::Page { index, width, height, locations } => {
            let config = load::config(cli.config.as_deref())?;
            let size = natural_size(&config, index, width, height)?;
            let locations = load::locations(locations.as_deref(), &registry)?;
            print_json(&report::page(&registry, &config, &locations, index, size))
        }
        Command::Lookup { name, page } => {
            let found = report::lookup(&registry, &name, page).ok_or_else(|| CliError::UnknownLocation(name.clone()))?;
            print_json(&found)
        }
        Command::Export => {
            println!("{}", registry.to_json_pretty()?);
            Ok(())
        }
        Command::Pages => print_json(&report::pages(&registry)),
    }
}

/// The explicit size, else the configured expected size for the page.
fn natural_size(
    config: &viewer::config::ViewerConfig,
    index: usize,
    width: Option<f64>,
    height: Option<f64>,
) -> Result<NaturalSize, CliError> {
    let size = match (width, height) {
        (Some(width), Some(height)) => NaturalSize::new(width, height),
        _ => config.expected_size(index).ok_or(CliError::MissingSize(index))?,
    };
    if !size.is_measurable() {
        return Err(CliError::InvalidSize { width: size.width, height: size.height });
    }
    Ok(size)
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
