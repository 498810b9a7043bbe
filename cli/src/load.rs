//! Reading the registry, viewer config and location list from disk.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::fs;
use std::path::Path;

use placements::Registry;
use viewer::config::ViewerConfig;
use viewer::overlay::{KnownLocation, map_only_slug};

use crate::CliError;

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io { path: path.display().to_string(), source })
}

/// The registry at `path`, or the builtin table when no path is given.
pub fn registry(path: Option<&Path>) -> Result<Registry, CliError> {
    let Some(path) = path else {
        let registry = Registry::builtin();
        registry.validate()?;
        return Ok(registry);
    };
    let registry = Registry::from_json(&read(path)?)?;
    tracing::debug!(path = %path.display(), entries = registry.len(), "loaded registry");
    Ok(registry)
}

pub fn config(path: Option<&Path>) -> Result<ViewerConfig, CliError> {
    match path {
        Some(path) => Ok(ViewerConfig::from_json(&read(path)?)?),
        None => Ok(ViewerConfig::default()),
    }
}

/// Known locations from a JSON array of `{ "id", "name" }` records.
///
/// Without a file every non-map-only registry entry counts as known, with its
/// name slug as id.
pub fn locations(path: Option<&Path>, registry: &Registry) -> Result<Vec<KnownLocation>, CliError> {
    if let Some(path) = path {
        return serde_json::from_str(&read(path)?).map_err(CliError::Locations);
    }
    Ok(registry
        .entries()
        .iter()
        .filter(|entry| !entry.is_map_only)
        .map(|entry| KnownLocation::new(map_only_slug(&entry.location_name), entry.location_name.as_ref()))
        .collect())
}
