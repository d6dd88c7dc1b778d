use std::fmt::Write as _;

use kurbo::{BezPath, PathEl};

use crate::drawing::model::Drawing;
use crate::foundation::core::SOURCE_CANVAS;

/// Move/line commands for a drawing, one sub-path per non-empty stroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorPath {
    subpaths: Vec<BezPath>,
}

impl VectorPath {
    /// Convert strokes into independent open polylines.
    ///
    /// Strokes with no points are dropped so they never emit a dangling `M`.
    pub fn from_drawing(drawing: &Drawing) -> Self {
        let subpaths = drawing
            .strokes
            .iter()
            .filter(|s| !s.is_empty())
            .map(|stroke| {
                let mut path = BezPath::new();
                let mut points = stroke.points();
                if let Some((x, y)) = points.next() {
                    path.move_to((x, y));
                }
                for (x, y) in points {
                    path.line_to((x, y));
                }
                path
            })
            .collect();
        Self { subpaths }
    }

    /// One path per rendered stroke.
    pub fn subpaths(&self) -> &[BezPath] {
        &self.subpaths
    }

    /// `true` when no stroke produced any command.
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Total number of move/line commands across all sub-paths.
    pub fn command_count(&self) -> usize {
        self.subpaths.iter().map(|p| p.elements().len()).sum()
    }

    /// Standalone SVG document in the source coordinate space, stroked black with no fill.
    pub fn to_svg_document(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {SOURCE_CANVAS} {SOURCE_CANVAS}">"#
        );
        for path in &self.subpaths {
            svg.push_str(r#"<path d=""#);
            write_path_data(&mut svg, path);
            svg.push_str(r#"" fill="none" stroke="black"/>"#);
        }
        svg.push_str("</svg>");
        svg
    }
}

fn write_path_data(out: &mut String, path: &BezPath) {
    for (i, el) in path.elements().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // String writes are infallible.
        let _ = match el {
            PathEl::MoveTo(p) => write!(out, "M{} {}", p.x, p.y),
            PathEl::LineTo(p) => write!(out, "L{} {}", p.x, p.y),
            PathEl::QuadTo(..) | PathEl::CurveTo(..) | PathEl::ClosePath => Ok(()),
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/path.rs"]
mod tests;
