use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{StrokeGridError, StrokeGridResult};
use crate::foundation::math::round_u32;

/// Inclusive range the total padding is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaddingRangeDef")]
pub struct PaddingRange {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct PaddingRangeDef {
    min: u32,
    max: u32,
}

impl TryFrom<PaddingRangeDef> for PaddingRange {
    type Error = StrokeGridError;

    fn try_from(def: PaddingRangeDef) -> Result<Self, Self::Error> {
        Self::new(def.min, def.max)
    }
}

impl PaddingRange {
    /// Create a validated range with `min <= max`.
    pub fn new(min: u32, max: u32) -> StrokeGridResult<Self> {
        if min > max {
            return Err(StrokeGridError::validation(format!(
                "padding range min ({min}) must be <= max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(self) -> u32 {
        self.min
    }

    /// Upper bound.
    pub fn max(self) -> u32 {
        self.max
    }
}

impl Default for PaddingRange {
    fn default() -> Self {
        Self { min: 30, max: 85 }
    }
}

/// Per-side margins for one drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddingSpec {
    /// Rolled total; `top + bottom == left + right == total`.
    pub total: u32,
    /// Rows added above.
    pub top: u32,
    /// Rows added below.
    pub bottom: u32,
    /// Columns added left.
    pub left: u32,
    /// Columns added right.
    pub right: u32,
}

impl PaddingSpec {
    /// No padding on any side.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Roll a padding spec.
    ///
    /// The favored vertical side gets up to 10% of the total extra, the left side up to 30%.
    pub fn random<R: Rng + ?Sized>(range: PaddingRange, rng: &mut R) -> Self {
        let total = uniform_rounded(rng, f64::from(range.min), f64::from(range.max));
        let prefer_top = rng.gen_bool(0.5);
        let top_bottom_diff = uniform_rounded(rng, 0.0, f64::from(round_u32(f64::from(total) * 0.1)));
        let left_right_diff = uniform_rounded(rng, 0.0, f64::from(round_u32(f64::from(total) * 0.3)));

        let half = round_u32(f64::from(total) / 2.0);
        let favored = (half + top_bottom_diff).min(total);
        let (top, bottom) = if prefer_top {
            (favored, total - favored)
        } else {
            (total - favored, favored)
        };
        let left = (half + left_right_diff).min(total);
        let right = total - left;

        Self {
            total,
            top,
            bottom,
            left,
            right,
        }
    }
}

fn uniform_rounded<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> u32 {
    if max <= min {
        return round_u32(min);
    }
    round_u32(rng.gen_range(min..max))
}

#[cfg(test)]
#[path = "../../tests/unit/augment/padding.rs"]
mod tests;
