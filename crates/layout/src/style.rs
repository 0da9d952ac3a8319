use serde::{Deserialize, Serialize};

use crate::types::Size;

/// Colours and dimensions used when drawing a [`Scene`](crate::Scene).
///
/// Colours are any SVG paint value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub background: String,
    pub edge_color: String,
    pub route_color: String,
    pub node_color: String,
    pub text_color: String,
    pub edge_width: f64,
    pub route_width: f64,
    pub node_radius: f64,
    pub font_family: String,
    pub node_font_size: f64,
    pub weight_font_size: f64,
    /// Backdrop behind each weight label.
    pub label_patch: Size,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: "rgb(255,255,255)".into(),
            edge_color: "rgb(150,150,150)".into(),
            route_color: "rgb(255,0,0)".into(),
            node_color: "rgb(30,30,30)".into(),
            text_color: "rgb(30,30,30)".into(),
            edge_width: 1.0,
            route_width: 3.0,
            node_radius: 6.0,
            font_family: "DejaVu Sans".into(),
            node_font_size: 14.0,
            weight_font_size: 11.0,
            label_patch: Size {
                width: 20.0,
                height: 14.0,
            },
        }
    }
}
