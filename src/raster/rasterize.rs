use crate::foundation::core::BinaryGrid;
use crate::foundation::error::{StrokeGridError, StrokeGridResult};
use crate::raster::path::VectorPath;

/// Parse SVG bytes into a `usvg` tree.
///
/// This is the decode step of the pipeline; failures are scoped to the record being processed.
pub fn decode_svg(bytes: &[u8]) -> StrokeGridResult<usvg::Tree> {
    let opts = usvg::Options::default();
    usvg::Tree::from_data(bytes, &opts)
        .map_err(|e| StrokeGridError::record_decode(format!("parse svg tree: {e}")))
}

/// Classify RGBA8 pixels: `1` where alpha is exactly zero, `0` everywhere else.
///
/// Untouched canvas therefore reads as `1` and stroked pixels as `0`.
pub fn classify_alpha(rgba: &[u8], width: u32, height: u32) -> StrokeGridResult<BinaryGrid> {
    let expected = (width as usize) * (height as usize) * 4;
    if rgba.len() != expected {
        return Err(StrokeGridError::record_decode(format!(
            "pixel buffer has {} bytes, expected {expected} for {width}x{height}",
            rgba.len()
        )));
    }

    let mut grid = BinaryGrid::filled(width, height, 0);
    for (i, px) in rgba.chunks_exact(4).enumerate() {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        grid.set(x, y, px[3] == 0);
    }
    Ok(grid)
}

/// Render a vector path into a `side x side` alpha-classified grid.
///
/// The path's source canvas is scaled down uniformly onto a transparent pixmap.
#[tracing::instrument(level = "trace", skip(path), fields(subpaths = path.subpaths().len()))]
pub fn rasterize_path(path: &VectorPath, side: u32) -> StrokeGridResult<BinaryGrid> {
    let tree = decode_svg(path.to_svg_document().as_bytes())?;
    let canvas = tree.size();
    if canvas.width() <= 0.0 || canvas.height() <= 0.0 {
        return Err(StrokeGridError::record_decode("svg canvas is empty"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(side, side)
        .ok_or_else(|| StrokeGridError::record_decode(format!("no {side}x{side} pixmap")))?;
    let scale = resvg::tiny_skia::Transform::from_scale(
        side as f32 / canvas.width(),
        side as f32 / canvas.height(),
    );
    resvg::render(&tree, scale, &mut pixmap.as_mut());

    classify_alpha(pixmap.data(), side, side)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rasterize.rs"]
mod tests;
