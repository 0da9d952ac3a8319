#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("canvas must be finite and positive, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("duplicate node id: {0:?}")]
    DuplicateNode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("node {0:?} has no layout position")]
    MissingPosition(String),

    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f32),

    #[error("failed to parse generated SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("failed to allocate {width}x{height} surface")]
    Surface { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(String),
}
