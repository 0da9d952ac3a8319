use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::GraphError;

/// An undirected weighted edge.
///
/// `source` is always the endpoint that comes first in node order, so an edge
/// has exactly one representation no matter how it was inserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Simple undirected graph over uniquely named nodes.
///
/// Node order is the order the names were supplied in. Every consumer
/// (solver tie-breaks, layout, distance table) iterates in that order.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraph<String, u32>,
    index: HashMap<String, NodeIndex>,
}

impl Graph {
    /// Creates a graph with the given nodes and no edges.
    pub fn new<I, S>(names: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = UnGraph::new_undirected();
        let mut index = HashMap::new();

        for name in names {
            let name = name.as_ref();
            if name.is_empty() {
                return Err(GraphError::EmptyName);
            }
            if index.contains_key(name) {
                return Err(GraphError::DuplicateNode(name.to_owned()));
            }
            let ix = inner.add_node(name.to_owned());
            index.insert(name.to_owned(), ix);
        }

        Ok(Self { inner, index })
    }

    /// Builds a graph from an explicit edge list.
    ///
    /// Rejects self-loops, zero weights and repeated pairs (in either
    /// direction).
    pub fn from_edges<S: AsRef<str>>(
        names: &[S],
        edges: &[(&str, &str, u32)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(names)?;

        for &(a, b, weight) in edges {
            let source = graph.require(a)?;
            let target = graph.require(b)?;
            if source == target {
                return Err(GraphError::SelfLoop(a.to_owned()));
            }
            if weight == 0 {
                return Err(GraphError::ZeroWeight(a.to_owned(), b.to_owned()));
            }
            if !graph.connect(source, target, weight) {
                return Err(GraphError::DuplicateEdge(a.to_owned(), b.to_owned()));
            }
        }

        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Node names in node order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.node_weights().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Weight of the edge between `a` and `b`, in either direction.
    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        let a = *self.index.get(a)?;
        let b = *self.index.get(b)?;
        self.inner
            .find_edge(a, b)
            .and_then(|e| self.inner.edge_weight(e))
            .copied()
    }

    /// Neighbors of `name` with the connecting edge weights. Empty for
    /// unknown names.
    pub fn neighbors(&self, name: &str) -> Vec<(&str, u32)> {
        let Some(&ix) = self.index.get(name) else {
            return Vec::new();
        };
        self.neighbor_indices(ix.index())
            .map(|(other, weight)| (self.name_of(other), weight))
            .collect()
    }

    /// Every edge exactly once, endpoints in node order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.inner.edge_references().map(|e| {
            let (a, b) = if e.source() <= e.target() {
                (e.source(), e.target())
            } else {
                (e.target(), e.source())
            };
            Edge {
                source: self.inner[a].clone(),
                target: self.inner[b].clone(),
                weight: *e.weight(),
            }
        })
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|ix| ix.index())
    }

    pub(crate) fn name_of(&self, ix: usize) -> &str {
        &self.inner[NodeIndex::new(ix)]
    }

    pub(crate) fn neighbor_indices(&self, ix: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        let node = NodeIndex::new(ix);
        self.inner.edges(node).map(move |e| {
            let other = if e.source() == node {
                e.target()
            } else {
                e.source()
            };
            (other.index(), *e.weight())
        })
    }

    pub(crate) fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.inner
            .find_edge(NodeIndex::new(a), NodeIndex::new(b))
            .is_some()
    }

    /// Adds an edge unless it would be a self-loop or a duplicate. Returns
    /// whether the edge was added.
    pub(crate) fn connect(&mut self, a: usize, b: usize, weight: u32) -> bool {
        if a == b || self.are_adjacent(a, b) {
            return false;
        }
        self.inner
            .add_edge(NodeIndex::new(a), NodeIndex::new(b), weight);
        true
    }

    #[cfg(test)]
    pub(crate) fn as_petgraph(&self) -> &UnGraph<String, u32> {
        &self.inner
    }

    fn require(&self, name: &str) -> Result<usize, GraphError> {
        self.index_of(name)
            .ok_or_else(|| GraphError::UnknownNode(name.to_owned()))
    }
}
