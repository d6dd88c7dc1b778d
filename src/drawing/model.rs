use serde::{Deserialize, Serialize};

use crate::foundation::core::BinaryGrid;
use crate::foundation::error::{StrokeGridError, StrokeGridResult};

/// One continuous pen motion as parallel x/y coordinate lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Stroke {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Stroke {
    /// Build a stroke from parallel coordinate lists of equal length.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> StrokeGridResult<Self> {
        if xs.len() != ys.len() {
            return Err(StrokeGridError::record_decode(format!(
                "stroke has {} x-coordinates but {} y-coordinates",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(StrokeGridError::record_decode(
                "stroke contains a non-finite coordinate",
            ));
        }
        Ok(Self { xs, ys })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// `true` when the stroke has no points.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate `(x, y)` points in drawing order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

impl TryFrom<Vec<Vec<f64>>> for Stroke {
    type Error = StrokeGridError;

    fn try_from(mut arrays: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        if arrays.len() < 2 {
            return Err(StrokeGridError::record_decode(format!(
                "stroke must hold x and y arrays, got {} array(s)",
                arrays.len()
            )));
        }
        // Raw-format strokes carry a third timing array; only x/y matter here.
        arrays.truncate(2);
        let ys = arrays.pop().unwrap_or_default();
        let xs = arrays.pop().unwrap_or_default();
        Self::new(xs, ys)
    }
}

impl From<Stroke> for Vec<Vec<f64>> {
    fn from(s: Stroke) -> Self {
        vec![s.xs, s.ys]
    }
}

/// Ordered strokes making up one sketch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drawing {
    /// Strokes in pen order.
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    /// Wrap a stroke list.
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }
}

/// Decoded input record: label plus drawing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DrawingRecord {
    /// Category label.
    pub word: String,
    /// Stroke data.
    pub drawing: Drawing,
}

impl DrawingRecord {
    /// Decode one parsed NDJSON object.
    ///
    /// Any shape problem maps to [`StrokeGridError::RecordDecode`] so the caller can skip just
    /// this record.
    pub fn from_value(value: serde_json::Value) -> StrokeGridResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| StrokeGridError::record_decode(format!("malformed record: {e}")))
    }
}

/// One output entry: `{id, word, pixels}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledRecord {
    /// Shard (or chunk-local shard) index.
    pub id: u64,
    /// Category label copied from the input record.
    pub word: String,
    /// Final 64x64 grid.
    pub pixels: BinaryGrid,
}

#[cfg(test)]
#[path = "../../tests/unit/drawing/model.rs"]
mod tests;
