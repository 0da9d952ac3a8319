mod cities;
mod pipeline;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use routeviz_graph::DistanceTable;
use routeviz_layout::CircularLayout;
use tracing::info;

use crate::pipeline::Config;

/// Margin kept between the circle and the canvas edge when the radius is derived.
const RADIUS_MARGIN: f64 = 80.0;

#[derive(Parser, Debug)]
#[command(name = "routeviz", version)]
#[command(about = "Random road network between cities, its shortest route and a picture of both")]
struct Args {
    /// JSON array of city names. Defaults to the bundled French cities.
    #[arg(long)]
    cities: Option<PathBuf>,

    /// JSON settings file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of roads to generate.
    #[arg(long)]
    edges: Option<usize>,

    #[arg(long)]
    min_weight: Option<u32>,

    #[arg(long)]
    max_weight: Option<u32>,

    /// Seed for a reproducible network and endpoint pick.
    #[arg(long)]
    seed: Option<u64>,

    /// Start city. Picked at random when omitted.
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// End city. Picked at random when omitted.
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<f64>,

    /// Circle radius. Derived from the canvas when only its size changes.
    #[arg(long)]
    radius: Option<f64>,

    /// Write the rendered network as PNG.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Write the rendered network as SVG.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write a standalone HTML report with the route, table and image.
    #[arg(long)]
    html: Option<PathBuf>,

    /// Print the distance table after the route.
    #[arg(long)]
    table: bool,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        let generator = &mut config.generator;
        if let Some(edges) = self.edges {
            generator.edge_count = edges;
        }
        if let Some(min) = self.min_weight {
            generator.min_weight = min;
        }
        if let Some(max) = self.max_weight {
            generator.max_weight = max;
        }

        if self.width.is_some() || self.height.is_some() {
            let width = self.width.unwrap_or(config.layout.width);
            let height = self.height.unwrap_or(config.layout.height);
            config.layout = CircularLayout::fitted(width, height, RADIUS_MARGIN);
        }
        if let Some(radius) = self.radius {
            config.layout.radius = radius;
        }

        Ok(config)
    }

    fn endpoints(&self) -> Option<(String, String)> {
        Some((self.from.clone()?, self.to.clone()?))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("routeviz=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config()?;

    let names = match &args.cities {
        Some(path) => cities::load_cities(path)?,
        None => cities::parse_cities(cities::DEFAULT_CITIES).context("bundled city list")?,
    };

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, cities = names.len(), edges = config.generator.edge_count, "generating network");
    let mut rng = StdRng::seed_from_u64(seed);

    let outcome = pipeline::run(&names, &config, args.endpoints(), &mut rng)?;

    println!("Path between {} & {}", outcome.start, outcome.end);
    print!("{}", report::path_details(&outcome.graph, &outcome.route)?);

    let table = DistanceTable::from_graph(&outcome.graph);
    if args.table {
        println!();
        print!("{}", report::distance_table_text(&table)?);
    }

    let renderer = &config.render;
    let route = Some(&outcome.route);

    if let Some(path) = &args.svg {
        let svg = renderer.render_svg(&outcome.graph, &outcome.layout, route)?;
        write_output(path, svg.as_bytes())?;
    }

    if args.png.is_some() || args.html.is_some() {
        let png = renderer
            .render_png(&outcome.graph, &outcome.layout, route)
            .context("failed to render network")?;

        if let Some(path) = &args.png {
            write_output(path, &png)?;
        }
        if let Some(path) = &args.html {
            let html = report::html_report(
                &outcome.graph,
                &outcome.route,
                &outcome.start,
                &outcome.end,
                &png,
            )?;
            write_output(path, html.as_bytes())?;
        }
    }

    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
