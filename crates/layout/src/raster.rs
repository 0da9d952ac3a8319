use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use tracing::debug;

use crate::error::RenderError;

/// Rasterizes an SVG document and encodes the pixels as PNG.
///
/// `scale` multiplies the document's intrinsic size.
pub fn svg_to_png(svg: &str, font_family: &str, scale: f32) -> Result<Vec<u8>, RenderError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(RenderError::InvalidScale(scale));
    }

    let mut options = usvg::Options::default();
    options.font_family = font_family.to_owned();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)?;
    let size = tree.size().to_int_size();
    let width = (size.width() as f32 * scale).ceil().max(1.0) as u32;
    let height = (size.height() as f32 * scale).ceil().max(1.0) as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Surface { width, height })?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|err| RenderError::Encode(err.to_string()))?;
    debug!(width, height, bytes = png.len(), "encoded png");
    Ok(png)
}
