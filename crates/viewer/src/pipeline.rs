//! Generate, solve and lay out one route query.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use rand::Rng;
use rand::seq::IndexedRandom;
use routeviz_graph::{GeneratorConfig, Graph, Route, generate, shortest_path};
use routeviz_layout::{CircularLayout, LayoutResult, Renderer};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Settings for every stage, loadable from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub layout: CircularLayout,
    pub render: Renderer,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }
}

pub struct Outcome {
    pub graph: Graph,
    pub start: String,
    pub end: String,
    pub route: Route,
    pub layout: LayoutResult,
}

/// Picks a random start, then redraws the end until it differs.
pub fn pick_endpoints<'a, R: Rng>(names: &'a [String], rng: &mut R) -> Result<(&'a str, &'a str)> {
    ensure!(
        names.len() >= 2,
        "need at least 2 cities to pick a route, got {}",
        names.len()
    );
    let start = names.choose(rng).context("empty city list")?;
    loop {
        let end = names.choose(rng).context("empty city list")?;
        if end != start {
            return Ok((start, end));
        }
    }
}

/// Runs generate, solve and layout.
///
/// Fixed endpoints are checked against `names` before anything is generated.
pub fn run<R: Rng>(
    names: &[String],
    config: &Config,
    endpoints: Option<(String, String)>,
    rng: &mut R,
) -> Result<Outcome> {
    if let Some((start, end)) = &endpoints {
        for name in [start, end] {
            if !names.contains(name) {
                bail!("{name:?} is not in the city list");
            }
        }
        ensure!(start != end, "start and end must differ, both are {start:?}");
    }

    let graph = generate(names, &config.generator, rng).context("failed to generate graph")?;

    let (start, end) = match endpoints {
        Some(pair) => pair,
        None => {
            let (start, end) = pick_endpoints(names, rng)?;
            (start.to_owned(), end.to_owned())
        }
    };

    let route = shortest_path(&graph, &start, &end)?;
    info!(
        %start,
        %end,
        distance = %route.distance,
        hops = route.path.len().saturating_sub(1),
        "solved route"
    );

    let layout = config.layout.layout_graph(&graph)?;

    Ok(Outcome {
        graph,
        start,
        end,
        route,
        layout,
    })
}
