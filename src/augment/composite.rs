use image::{Rgba, RgbaImage, imageops::sample_bilinear};

use crate::augment::padding::PaddingSpec;
use crate::foundation::core::BinaryGrid;

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Mean-of-RGB level above which a resampled pixel binarizes to `1`.
pub const BRIGHTNESS_THRESHOLD: u16 = 127;

/// Surround `grid` with margins filled with `1`, placing it at `(left, top)`.
pub fn pad_grid(grid: &BinaryGrid, padding: &PaddingSpec) -> BinaryGrid {
    let width = grid.width() + padding.left + padding.right;
    let height = grid.height() + padding.top + padding.bottom;
    let mut out = BinaryGrid::filled(width, height, 1);
    for (y, row) in grid.rows().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            out.set(
                padding.left + x as u32,
                padding.top + y as u32,
                cell == 1,
            );
        }
    }
    out
}

/// Opaque image where `1` cells are black and `0` cells are white.
pub fn grid_to_image(grid: &BinaryGrid) -> RgbaImage {
    RgbaImage::from_fn(grid.width(), grid.height(), |x, y| {
        if grid.get(x, y) == 1 { INK } else { PAPER }
    })
}

/// Resample to `side x side` with one bilinear lookup at each output pixel centre.
///
/// Unlike an area filter this does not average a whole source footprint, so a
/// one pixel stroke survives a 4:1 reduction whenever a sample lands near it.
/// A no-op copy when the size already matches.
pub fn resample(img: &RgbaImage, side: u32) -> RgbaImage {
    if img.dimensions() == (side, side) {
        return img.clone();
    }
    let step = 1.0 / side as f32;
    RgbaImage::from_fn(side, side, |x, y| {
        let u = (x as f32 + 0.5) * step;
        let v = (y as f32 + 0.5) * step;
        sample_bilinear(img, u, v).unwrap_or(INK)
    })
}

/// `1` where the mean of R, G and B exceeds [`BRIGHTNESS_THRESHOLD`], else `0`.
pub fn binarize_image(img: &RgbaImage) -> BinaryGrid {
    let mut grid = BinaryGrid::filled(img.width(), img.height(), 0);
    for (x, y, px) in img.enumerate_pixels() {
        let sum = u16::from(px[0]) + u16::from(px[1]) + u16::from(px[2]);
        // sum / 3 > T without losing the fractional part.
        grid.set(x, y, sum > BRIGHTNESS_THRESHOLD * 3);
    }
    grid
}

/// Pad, render, shrink back to `side x side` and re-binarize.
#[tracing::instrument(level = "trace", skip(grid))]
pub fn composite(grid: &BinaryGrid, padding: &PaddingSpec, side: u32) -> BinaryGrid {
    let padded = pad_grid(grid, padding);
    let img = grid_to_image(&padded);
    binarize_image(&resample(&img, side))
}

#[cfg(test)]
#[path = "../../tests/unit/augment/composite.rs"]
mod tests;
