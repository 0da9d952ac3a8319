use routeviz_graph::{Graph, Route};
use serde::{Deserialize, Serialize};

use crate::draw::scene_to_svg;
use crate::error::RenderError;
use crate::raster::svg_to_png;
use crate::scene::Scene;
use crate::style::RenderStyle;
use crate::types::LayoutResult;

/// Turns a laid-out graph into an image, optionally highlighting a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Renderer {
    pub style: RenderStyle,
    /// Pixel density of the PNG relative to the layout canvas.
    pub scale: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            style: RenderStyle::default(),
            scale: 1.0,
        }
    }
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    pub fn scene(
        &self,
        graph: &Graph,
        layout: &LayoutResult,
        route: Option<&Route>,
    ) -> Result<Scene, RenderError> {
        Scene::build(graph, layout, route)
    }

    pub fn render_svg(
        &self,
        graph: &Graph,
        layout: &LayoutResult,
        route: Option<&Route>,
    ) -> Result<String, RenderError> {
        let scene = self.scene(graph, layout, route)?;
        Ok(scene_to_svg(&scene, &self.style))
    }

    /// PNG bytes for the graph. An empty route draws no highlight.
    pub fn render_png(
        &self,
        graph: &Graph,
        layout: &LayoutResult,
        route: Option<&Route>,
    ) -> Result<Vec<u8>, RenderError> {
        let svg = self.render_svg(graph, layout, route)?;
        svg_to_png(&svg, &self.style.font_family, self.scale)
    }
}
