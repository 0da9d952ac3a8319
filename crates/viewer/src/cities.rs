//! City list loading for the route viewer.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Bundled list used when no city file is given.
pub const DEFAULT_CITIES: &str = include_str!("../assets/villes.json");

/// Parses a JSON array of city names.
///
/// Names are trimmed; blank and repeated names are rejected.
pub fn parse_cities(content: &str) -> Result<Vec<String>> {
    let raw: Vec<String> =
        serde_json::from_str(content).context("city list must be a JSON array of strings")?;

    let mut seen = HashSet::new();
    let mut cities = Vec::with_capacity(raw.len());
    for (i, name) in raw.into_iter().enumerate() {
        let name = name.trim().to_owned();
        if name.is_empty() {
            bail!("city #{} has an empty name", i + 1);
        }
        if !seen.insert(name.clone()) {
            bail!("city {name:?} is listed more than once");
        }
        cities.push(name);
    }
    Ok(cities)
}

pub fn load_cities(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read city list {}", path.display()))?;
    parse_cities(&content).with_context(|| format!("invalid city list {}", path.display()))
}
