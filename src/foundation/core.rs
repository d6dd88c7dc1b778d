use serde::{Deserialize, Serialize};

use crate::foundation::error::{StrokeGridError, StrokeGridResult};

/// Side length of every final pixel grid.
pub const GRID_SIDE: u32 = 64;

/// Side length of the source drawing coordinate space (the SVG viewBox).
pub const SOURCE_CANVAS: u32 = 256;

/// Row-major grid of `0`/`1` cells.
///
/// After rasterization `1` marks pixels no stroke touched. After compositing `1` marks ink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryGrid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl BinaryGrid {
    /// Create a `width x height` grid with every cell set to `value` (clamped to `0`/`1`).
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        let v = value.min(1);
        Self {
            width,
            height,
            cells: vec![v; (width as usize) * (height as usize)],
        }
    }

    /// Build a grid from rows, rejecting ragged rows and cells other than `0`/`1`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> StrokeGridResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(StrokeGridError::validation(format!(
                    "grid row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            if let Some(bad) = row.iter().find(|&&c| c > 1) {
                return Err(StrokeGridError::validation(format!(
                    "grid row {y} contains non-binary cell {bad}"
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            cells,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell value at `(x, y)`. Panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[self.index(x, y)]
    }

    pub(crate) fn set(&mut self, x: u32, y: u32, on: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = u8::from(on);
    }

    /// Row-major cell storage.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Number of cells set to `1`.
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl Serialize for BinaryGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

impl<'de> Deserialize<'de> for BinaryGrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<Vec<u8>>::deserialize(deserializer)?;
        Self::from_rows(&rows[..]).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
