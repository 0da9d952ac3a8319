//! Weighted undirected road graphs over named nodes.
//!
//! The crate covers the computational half of the route viewer: building a
//! random simple graph ([`generate`]), finding shortest routes over it
//! ([`shortest_path`], [`single_source`]) and tabulating direct distances
//! ([`DistanceTable`]). Rendering lives in `routeviz-layout`.

mod dijkstra;
mod error;
mod generate;
mod graph;
mod table;

pub use dijkstra::{Distance, Leg, Route, ShortestPaths, shortest_path, single_source};
pub use error::GraphError;
pub use generate::{GeneratorConfig, SamplingStrategy, generate, max_edge_count};
pub use graph::{Edge, Graph};
pub use table::DistanceTable;
