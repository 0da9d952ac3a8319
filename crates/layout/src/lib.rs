//! Circular layout and rendering for route graphs.
//!
//! [`CircularLayout`] assigns every node a point on a circle, [`Scene`] turns
//! a graph plus its layout into a draw list, and [`Renderer`] encodes that
//! list as SVG and PNG.

mod circular;
mod draw;
mod error;
mod raster;
mod render;
mod scene;
mod style;
mod types;

pub use draw::scene_to_svg;
pub use error::{LayoutError, RenderError};
pub use raster::svg_to_png;
pub use render::Renderer;
pub use scene::{EdgeStroke, NodeMarker, Scene};
pub use style::RenderStyle;
pub use types::*;
