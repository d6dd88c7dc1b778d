use rand::Rng;

use crate::augment::composite::composite;
use crate::augment::padding::{PaddingRange, PaddingSpec};
use crate::drawing::model::Drawing;
use crate::foundation::core::{BinaryGrid, GRID_SIDE};
use crate::foundation::error::StrokeGridResult;
use crate::raster::path::VectorPath;
use crate::raster::rasterize::rasterize_path;

/// Strokes -> path -> raster -> random padding -> 64x64 grid.
///
/// The only randomness comes from `rng`, so a seeded generator gives reproducible output.
pub fn rasterize_drawing<R: Rng + ?Sized>(
    drawing: &Drawing,
    range: PaddingRange,
    rng: &mut R,
) -> StrokeGridResult<BinaryGrid> {
    let padding = PaddingSpec::random(range, rng);
    rasterize_drawing_with_padding(drawing, &padding)
}

/// Same as [`rasterize_drawing`] with a fixed padding spec.
pub fn rasterize_drawing_with_padding(
    drawing: &Drawing,
    padding: &PaddingSpec,
) -> StrokeGridResult<BinaryGrid> {
    let path = VectorPath::from_drawing(drawing);
    let raster = rasterize_path(&path, GRID_SIDE)?;
    Ok(composite(&raster, padding, GRID_SIDE))
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/drawing.rs"]
mod tests;
