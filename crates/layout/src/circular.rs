use std::collections::HashSet;
use std::f64::consts::TAU;

use routeviz_graph::Graph;
use tracing::{debug, warn};

use crate::error::LayoutError;
use crate::types::*;

impl CircularLayout {
    /// Places `ids` on the circle in sequence order.
    ///
    /// Node `i` of `n` sits at angle `2πi/n`, measured from the positive x
    /// axis, so the first node is always directly right of the centre.
    pub fn layout<S: AsRef<str>>(&self, ids: &[S]) -> Result<LayoutResult, LayoutError> {
        self.validate()?;

        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id.as_ref()) {
                return Err(LayoutError::DuplicateNode(id.as_ref().to_owned()));
            }
        }

        if self.radius > self.width.min(self.height) / 2.0 {
            warn!(
                radius = self.radius,
                width = self.width,
                height = self.height,
                "circle extends past the canvas"
            );
        }

        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        let step = TAU / ids.len().max(1) as f64;

        let nodes = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let angle = step * i as f64;
                PlacedNode {
                    id: id.as_ref().to_owned(),
                    position: Position {
                        x: cx + self.radius * angle.cos(),
                        y: cy + self.radius * angle.sin(),
                    },
                }
            })
            .collect::<Vec<_>>();

        debug!(nodes = nodes.len(), radius = self.radius, "circular layout");
        Ok(LayoutResult {
            nodes,
            canvas_width: self.width,
            canvas_height: self.height,
        })
    }

    /// Lays out the nodes of `graph` in node order.
    pub fn layout_graph(&self, graph: &Graph) -> Result<LayoutResult, LayoutError> {
        let ids: Vec<&str> = graph.nodes().collect();
        self.layout(&ids)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        let canvas_ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        if !canvas_ok {
            return Err(LayoutError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(LayoutError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}
