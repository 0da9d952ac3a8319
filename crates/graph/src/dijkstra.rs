use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{Graph, GraphError};

/// Total weight of a route, or `Unreachable` when no route exists.
///
/// Orders every finite distance before `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl From<Option<u64>> for Distance {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// One hop of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Leg<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub weight: u32,
}

/// Result of a shortest-path query: the node sequence and its total weight.
///
/// An empty `path` always comes with [`Distance::Unreachable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: Vec<String>,
    pub distance: Distance,
}

impl Route {
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: Distance::Unreachable,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Consecutive hops with their weights looked up in `graph`.
    pub fn legs<'a>(&'a self, graph: &'a Graph) -> impl Iterator<Item = Leg<'a>> + 'a {
        self.path.windows(2).filter_map(move |pair| {
            let weight = graph.weight(&pair[0], &pair[1])?;
            Some(Leg {
                from: &pair[0],
                to: &pair[1],
                weight,
            })
        })
    }

    /// Whether the route travels the edge between `a` and `b`, in either
    /// direction.
    pub fn uses_edge(&self, a: &str, b: &str) -> bool {
        self.path
            .windows(2)
            .any(|pair| (pair[0] == a && pair[1] == b) || (pair[0] == b && pair[1] == a))
    }
}

/// Settled distances and predecessors from one source node.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g Graph,
    source: usize,
    dist: Vec<Option<u64>>,
    prev: Vec<Option<usize>>,
}

impl<'g> ShortestPaths<'g> {
    pub fn source(&self) -> &'g str {
        self.graph.name_of(self.source)
    }

    pub fn distance_to(&self, name: &str) -> Result<Distance, GraphError> {
        let target = require(self.graph, name)?;
        Ok(self.dist[target].into())
    }

    /// Walks the predecessor chain back from `name`.
    ///
    /// A chain that does not end at the source yields
    /// [`Route::unreachable`].
    pub fn route_to(&self, name: &str) -> Result<Route, GraphError> {
        let target = require(self.graph, name)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(p) = self.prev[current] {
            path.push(p);
            current = p;
            if path.len() > self.prev.len() {
                break;
            }
        }

        if current != self.source {
            return Ok(Route::unreachable());
        }
        let Some(distance) = self.dist[target] else {
            return Ok(Route::unreachable());
        };

        path.reverse();
        Ok(Route {
            path: path
                .into_iter()
                .map(|ix| self.graph.name_of(ix).to_owned())
                .collect(),
            distance: Distance::Finite(distance),
        })
    }
}

/// Runs Dijkstra from `start` over every node reachable from it.
///
/// The next node to settle is the unsettled one with the smallest tentative
/// distance; ties go to the node that comes first in node order. The search
/// stops as soon as every remaining node is at infinite distance.
pub fn single_source<'g>(graph: &'g Graph, start: &str) -> Result<ShortestPaths<'g>, GraphError> {
    let source = require(graph, start)?;
    let n = graph.node_count();

    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut unsettled = vec![true; n];
    dist[source] = Some(0);

    let mut settled = 0;
    while settled < n {
        let mut current: Option<(usize, u64)> = None;
        for (ix, d) in dist.iter().enumerate() {
            if !unsettled[ix] {
                continue;
            }
            if let Some(d) = *d {
                if current.is_none_or(|(_, best)| d < best) {
                    current = Some((ix, d));
                }
            }
        }
        let Some((u, du)) = current else {
            trace!(remaining = n - settled, "remaining nodes are unreachable");
            break;
        };

        for (v, weight) in graph.neighbor_indices(u) {
            let candidate = du + u64::from(weight);
            if dist[v].is_none_or(|dv| candidate < dv) {
                dist[v] = Some(candidate);
                prev[v] = Some(u);
            }
        }

        unsettled[u] = false;
        settled += 1;
    }

    debug!(source = start, settled, nodes = n, "shortest paths computed");
    Ok(ShortestPaths {
        graph,
        source,
        dist,
        prev,
    })
}

/// Shortest route from `start` to `end`.
///
/// Both names must be nodes of `graph` and must differ. When `end` lies in a
/// different component the route is empty and its distance unreachable.
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Result<Route, GraphError> {
    require(graph, start)?;
    require(graph, end)?;
    if start == end {
        return Err(GraphError::SameEndpoints(start.to_owned()));
    }
    single_source(graph, start)?.route_to(end)
}

fn require(graph: &Graph, name: &str) -> Result<usize, GraphError> {
    graph
        .index_of(name)
        .ok_or_else(|| GraphError::UnknownNode(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeneratorConfig, generate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn diamond() -> Graph {
        Graph::from_edges(
            &["A", "B", "C", "D"],
            &[("A", "B", 10), ("B", "C", 5), ("A", "C", 20), ("C", "D", 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        let route = shortest_path(&diamond(), "A", "D").unwrap();
        assert_eq!(route.path, ["A", "B", "C", "D"]);
        assert_eq!(route.distance, Distance::Finite(16));
    }

    #[test]
    fn test_disconnected_is_unreachable() {
        let graph = Graph::new(["X", "Y"]).unwrap();
        let route = shortest_path(&graph, "X", "Y").unwrap();
        assert!(route.is_empty());
        assert_eq!(route.distance, Distance::Unreachable);
    }

    #[test]
    fn test_tie_goes_to_earlier_node() {
        // S -> A -> T and S -> B -> T both cost 2
        let graph = Graph::from_edges(
            &["S", "A", "B", "T"],
            &[("S", "B", 1), ("S", "A", 1), ("B", "T", 1), ("A", "T", 1)],
        )
        .unwrap();
        let route = shortest_path(&graph, "S", "T").unwrap();
        assert_eq!(route.path, ["S", "A", "T"]);
        assert_eq!(route.distance, Distance::Finite(2));
    }

    #[test]
    fn test_rejects_bad_endpoints() {
        let graph = diamond();
        assert_eq!(
            shortest_path(&graph, "A", "Z").unwrap_err(),
            GraphError::UnknownNode("Z".into())
        );
        assert_eq!(
            shortest_path(&graph, "Q", "A").unwrap_err(),
            GraphError::UnknownNode("Q".into())
        );
        assert_eq!(
            shortest_path(&graph, "B", "B").unwrap_err(),
            GraphError::SameEndpoints("B".into())
        );
    }

    #[test]
    fn test_single_source_distances() {
        let graph = Graph::from_edges(
            &["A", "B", "C", "D", "E"],
            &[("A", "B", 3), ("B", "C", 4), ("D", "E", 1)],
        )
        .unwrap();
        let tree = single_source(&graph, "A").unwrap();
        assert_eq!(tree.source(), "A");
        assert_eq!(tree.distance_to("A").unwrap(), Distance::Finite(0));
        assert_eq!(tree.distance_to("C").unwrap(), Distance::Finite(7));
        assert_eq!(tree.distance_to("E").unwrap(), Distance::Unreachable);
        assert_eq!(tree.route_to("E").unwrap(), Route::unreachable());
        assert_eq!(tree.route_to("C").unwrap().path, ["A", "B", "C"]);
    }

    #[test]
    fn test_legs_sum_to_distance() {
        let graph = diamond();
        let route = shortest_path(&graph, "D", "A").unwrap();
        let legs: Vec<Leg> = route.legs(&graph).collect();
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[0], Leg { from: "D", to: "C", weight: 1 });
        let total: u64 = legs.iter().map(|l| u64::from(l.weight)).sum();
        assert_eq!(Distance::Finite(total), route.distance);
        assert!(route.uses_edge("B", "C"));
        assert!(route.uses_edge("C", "B"));
        assert!(!route.uses_edge("A", "C"));
    }

    #[test]
    fn test_distance_display_and_order() {
        assert_eq!(Distance::Finite(42).to_string(), "42");
        assert_eq!(Distance::Unreachable.to_string(), "unreachable");
        assert!(Distance::Finite(u64::MAX) < Distance::Unreachable);
        assert_eq!(Distance::from(None), Distance::Unreachable);
        assert_eq!(Distance::Finite(5).finite(), Some(5));
        assert!(!Distance::Unreachable.is_reachable());
    }

    #[test]
    fn test_matches_petgraph_dijkstra() {
        let names: Vec<String> = (0..12).map(|i| format!("C{i}")).collect();
        for seed in 0..20 {
            let config = GeneratorConfig {
                edge_count: 14,
                min_weight: 1,
                max_weight: 30,
                ..Default::default()
            };
            let graph = generate(&names, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
            let inner = graph.as_petgraph();
            let start = inner.node_indices().next().unwrap();
            let expected =
                petgraph::algo::dijkstra(inner, start, None, |e| u64::from(*e.weight()));

            let tree = single_source(&graph, &names[0]).unwrap();
            for (ix, name) in names.iter().enumerate() {
                let oracle = expected
                    .get(&petgraph::graph::NodeIndex::new(ix))
                    .copied();
                assert_eq!(tree.distance_to(name).unwrap(), Distance::from(oracle));
            }
        }
    }
}
