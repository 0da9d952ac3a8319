//! Draw list built from a graph, its layout and an optional highlighted route.

use std::collections::{HashMap, HashSet};

use routeviz_graph::{Graph, Route};
use tracing::debug;

use crate::error::RenderError;
use crate::types::*;

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStroke {
    pub source: String,
    pub target: String,
    pub from: Position,
    pub to: Position,
    pub weight: u32,
    pub on_route: bool,
}

impl EdgeStroke {
    /// Where the weight label is centred.
    pub fn label_position(&self) -> Position {
        self.from.midpoint(&self.to)
    }

    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeMarker {
    pub id: String,
    pub position: Position,
    pub on_route: bool,
}

/// Everything the renderer draws, in paint order.
///
/// Route strokes come after all other strokes so the highlight is never
/// covered.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub edges: Vec<EdgeStroke>,
    pub nodes: Vec<NodeMarker>,
}

impl Scene {
    pub fn build(
        graph: &Graph,
        layout: &LayoutResult,
        route: Option<&Route>,
    ) -> Result<Self, RenderError> {
        let positions: HashMap<&str, Position> = layout
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), n.position))
            .collect();
        let locate = |id: &str| {
            positions
                .get(id)
                .copied()
                .ok_or_else(|| RenderError::MissingPosition(id.to_owned()))
        };
        let on_route = |id: &str| route.is_some_and(|r| r.path.iter().any(|p| p == id));

        let mut nodes = Vec::with_capacity(graph.node_count());
        for id in graph.nodes() {
            nodes.push(NodeMarker {
                id: id.to_owned(),
                position: locate(id)?,
                on_route: on_route(id),
            });
        }

        let mut drawn = HashSet::new();
        let mut edges = Vec::with_capacity(graph.edge_count());
        for edge in graph.edges() {
            let key = if edge.source <= edge.target {
                (edge.source.clone(), edge.target.clone())
            } else {
                (edge.target.clone(), edge.source.clone())
            };
            if !drawn.insert(key) {
                continue;
            }
            edges.push(EdgeStroke {
                from: locate(&edge.source)?,
                to: locate(&edge.target)?,
                weight: edge.weight,
                on_route: route.is_some_and(|r| r.uses_edge(&edge.source, &edge.target)),
                source: edge.source,
                target: edge.target,
            });
        }
        edges.sort_by_key(|e| e.on_route);

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            highlighted = edges.iter().filter(|e| e.on_route).count(),
            "built scene"
        );
        Ok(Self {
            width: layout.canvas_width,
            height: layout.canvas_height,
            edges,
            nodes,
        })
    }

    /// Number of strokes joining `a` and `b`.
    pub fn strokes_between(&self, a: &str, b: &str) -> usize {
        self.edges.iter().filter(|e| e.connects(a, b)).count()
    }

    pub fn route_edges(&self) -> impl Iterator<Item = &EdgeStroke> + '_ {
        self.edges.iter().filter(|e| e.on_route)
    }
}
