use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn distance(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn midpoint(&self, other: &Position) -> Position {
        Position {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    pub id: String,
    pub position: Position,
}

/// Positions for a set of nodes on a canvas, in the order they were laid out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub nodes: Vec<PlacedNode>,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl LayoutResult {
    pub fn position_of(&self, id: &str) -> Option<Position> {
        self.nodes
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.position)
    }

    pub fn center(&self) -> Position {
        Position {
            x: self.canvas_width / 2.0,
            y: self.canvas_height / 2.0,
        }
    }
}

/// Places nodes evenly on a circle centred in the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircularLayout {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

impl Default for CircularLayout {
    fn default() -> Self {
        Self::fitted(1000.0, 800.0, 80.0)
    }
}

impl CircularLayout {
    /// Canvas of `width` x `height` with the circle inset by `margin` from
    /// the nearer canvas edge.
    pub fn fitted(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            radius: width.min(height) / 2.0 - margin,
        }
    }
}
