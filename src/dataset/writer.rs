use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use crate::drawing::model::LabeledRecord;
use crate::foundation::core::BinaryGrid;
use crate::foundation::error::{StrokeGridError, StrokeGridResult};

/// `<output_dir>/<shard stem>.json`.
pub fn output_path_for(output_dir: &Path, shard: &Path) -> PathBuf {
    let stem = shard
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "shard".to_string());
    output_dir.join(format!("{stem}.json"))
}

/// `<output_dir>/dataset-<n>.json` for combined output.
pub fn combined_output_path(output_dir: &Path, n: usize) -> PathBuf {
    output_dir.join(format!("dataset-{n}.json"))
}

/// Write records as one compact JSON array.
pub fn write_records(path: &Path, records: &[LabeledRecord]) -> StrokeGridResult<()> {
    let f = File::create(path).map_err(|e| {
        StrokeGridError::output_write(format!("create '{}': {e}", path.display()))
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, records).map_err(|e| {
        StrokeGridError::output_write(format!("serialize '{}': {e}", path.display()))
    })?;
    w.flush()
        .map_err(|e| StrokeGridError::output_write(format!("flush '{}': {e}", path.display())))
}

/// Save a grid as a grayscale PNG: `1` cells black, `0` cells white.
pub fn write_grid_png(path: &Path, grid: &BinaryGrid) -> StrokeGridResult<()> {
    let img = image::GrayImage::from_fn(grid.width(), grid.height(), |x, y| {
        image::Luma([if grid.get(x, y) == 1 { 0 } else { 255 }])
    });
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| StrokeGridError::output_write(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/writer.rs"]
mod tests;
