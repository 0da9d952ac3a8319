use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{Graph, GraphError};

/// What to do once rejection sampling has used up its attempt budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingStrategy {
    /// Draw the missing edges from the explicit list of unconnected pairs.
    #[default]
    Fallback,
    /// Give up with [`GraphError::EdgeCountUnsatisfiable`].
    RejectionOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub edge_count: usize,
    pub min_weight: u32,
    pub max_weight: u32,
    /// Rejection-sampling attempts allowed per requested edge.
    pub attempts_per_edge: usize,
    pub strategy: SamplingStrategy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            edge_count: 30,
            min_weight: 10,
            max_weight: 100,
            attempts_per_edge: 32,
            strategy: SamplingStrategy::Fallback,
        }
    }
}

impl GeneratorConfig {
    fn attempt_budget(&self) -> usize {
        self.edge_count
            .saturating_mul(self.attempts_per_edge)
            .max(64)
    }
}

/// Largest number of edges a simple undirected graph on `nodes` nodes can have.
pub fn max_edge_count(nodes: usize) -> usize {
    nodes * nodes.saturating_sub(1) / 2
}

/// Builds a random simple graph with exactly `config.edge_count` edges.
///
/// Pairs are drawn uniformly with replacement and kept when they are distinct
/// and not yet connected. Weights are uniform in
/// `min_weight..=max_weight`. The result may be disconnected.
pub fn generate<S, R>(names: &[S], config: &GeneratorConfig, rng: &mut R) -> Result<Graph, GraphError>
where
    S: AsRef<str>,
    R: Rng,
{
    if names.len() < 2 {
        return Err(GraphError::TooFewNodes(names.len()));
    }
    if config.min_weight == 0 || config.min_weight > config.max_weight {
        return Err(GraphError::InvalidWeightRange {
            min: config.min_weight,
            max: config.max_weight,
        });
    }
    let max = max_edge_count(names.len());
    if config.edge_count > max {
        return Err(GraphError::TooManyEdges {
            requested: config.edge_count,
            nodes: names.len(),
            max,
        });
    }

    let mut graph = Graph::new(names)?;
    let n = names.len();
    let budget = config.attempt_budget();
    let mut placed = 0;
    let mut attempts = 0;

    while placed < config.edge_count && attempts < budget {
        attempts += 1;
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        let weight = rng.random_range(config.min_weight..=config.max_weight);
        if graph.connect(a, b, weight) {
            trace!(a = graph.name_of(a), b = graph.name_of(b), weight, "placed edge");
            placed += 1;
        }
    }

    if placed < config.edge_count {
        match config.strategy {
            SamplingStrategy::RejectionOnly => {
                return Err(GraphError::EdgeCountUnsatisfiable {
                    requested: config.edge_count,
                    placed,
                    attempts,
                });
            }
            SamplingStrategy::Fallback => {
                warn!(
                    placed,
                    requested = config.edge_count,
                    attempts,
                    "rejection sampling stalled, drawing from unconnected pairs"
                );
                let mut open: Vec<(usize, usize)> = (0..n)
                    .flat_map(|a| ((a + 1)..n).map(move |b| (a, b)))
                    .filter(|&(a, b)| !graph.are_adjacent(a, b))
                    .collect();
                open.shuffle(rng);
                for (a, b) in open.into_iter().take(config.edge_count - placed) {
                    let weight = rng.random_range(config.min_weight..=config.max_weight);
                    graph.connect(a, b, weight);
                    placed += 1;
                }
            }
        }
    }

    debug!(
        nodes = n,
        edges = graph.edge_count(),
        attempts,
        "generated graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const CITIES: [&str; 8] = [
        "Paris", "Lyon", "Marseille", "Lille", "Nantes", "Rennes", "Nice", "Brest",
    ];

    #[test]
    fn test_generates_requested_edge_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = GeneratorConfig {
            edge_count: 12,
            ..Default::default()
        };
        let graph = generate(&CITIES, &config, &mut rng).unwrap();

        assert_eq!(graph.node_count(), CITIES.len());
        assert_eq!(graph.edge_count(), 12);

        let mut seen = HashSet::new();
        for edge in graph.edges() {
            assert_ne!(edge.source, edge.target);
            assert!((10..=100).contains(&edge.weight));
            assert!(seen.insert((edge.source.clone(), edge.target.clone())));
            assert_eq!(graph.weight(&edge.target, &edge.source), Some(edge.weight));
        }
    }

    #[test]
    fn test_complete_graph_terminates() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GeneratorConfig {
            edge_count: max_edge_count(CITIES.len()),
            attempts_per_edge: 1,
            ..Default::default()
        };
        let graph = generate(&CITIES, &config, &mut rng).unwrap();
        assert_eq!(graph.edge_count(), 28);
    }

    #[test]
    fn test_rejection_only_reports_stall() {
        let mut rng = StdRng::seed_from_u64(3);
        let names: Vec<String> = (0..20).map(|i| format!("N{i}")).collect();
        let config = GeneratorConfig {
            edge_count: max_edge_count(names.len()),
            attempts_per_edge: 0,
            strategy: SamplingStrategy::RejectionOnly,
            ..Default::default()
        };
        // budget floors at 64 attempts, fewer than the 190 pairs needed
        match generate(&names, &config, &mut rng) {
            Err(GraphError::EdgeCountUnsatisfiable {
                requested,
                placed,
                attempts,
            }) => {
                assert_eq!(requested, 190);
                assert!(placed <= 64);
                assert_eq!(attempts, 64);
            }
            other => panic!("expected stall, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        let mut rng = StdRng::seed_from_u64(0);

        let err = generate(&["Solo"], &GeneratorConfig::default(), &mut rng).unwrap_err();
        assert_eq!(err, GraphError::TooFewNodes(1));

        let config = GeneratorConfig {
            edge_count: 2,
            ..Default::default()
        };
        let err = generate(&["A", "B"], &config, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GraphError::TooManyEdges {
                requested: 2,
                nodes: 2,
                max: 1,
            }
        );

        let config = GeneratorConfig {
            edge_count: 1,
            min_weight: 50,
            max_weight: 10,
            ..Default::default()
        };
        assert!(matches!(
            generate(&["A", "B"], &config, &mut rng),
            Err(GraphError::InvalidWeightRange { min: 50, max: 10 })
        ));

        let config = GeneratorConfig {
            edge_count: 1,
            min_weight: 0,
            ..Default::default()
        };
        assert!(matches!(
            generate(&["A", "B"], &config, &mut rng),
            Err(GraphError::InvalidWeightRange { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_graph() {
        let config = GeneratorConfig {
            edge_count: 10,
            ..Default::default()
        };
        let a = generate(&CITIES, &config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&CITIES, &config, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
    }

    #[test]
    fn test_max_edge_count() {
        assert_eq!(max_edge_count(0), 0);
        assert_eq!(max_edge_count(1), 0);
        assert_eq!(max_edge_count(2), 1);
        assert_eq!(max_edge_count(20), 190);
    }
}
