use super::path::*;
use super::error::*;
use super::element::*;
use super::super::coordinate::*;

use kurbo::{BezPath, PathEl};

use std::str::FromStr;

#[inline]
fn coord(point: kurbo::Point) -> Coord2 {
    Coord2(point.x, point.y)
}

impl From<&PathEl> for PathElement {
    fn from(element: &PathEl) -> PathElement {
        match element {
            PathEl::MoveTo(to)                  => PathElement::Move(coord(*to)),
            PathEl::LineTo(to)                  => PathElement::Line(coord(*to)),
            PathEl::QuadTo(control, to)         => PathElement::QuadraticCurve { control: coord(*control), to: coord(*to) },
            PathEl::CurveTo(cp1, cp2, to)       => PathElement::CubicCurve { control1: coord(*cp1), control2: coord(*cp2), to: coord(*to) },
            PathEl::ClosePath                   => PathElement::Close
        }
    }
}

impl From<&BezPath> for Path {
    fn from(bez_path: &BezPath) -> Path {
        bez_path.elements().iter().map(PathElement::from).collect()
    }
}

impl Path {
    ///
    /// Creates a path from an SVG path data descriptor (for example `"M 10 10 L 20 20 Z"`)
    ///
    /// Parsing is done by `kurbo`, so the full SVG path grammar is accepted: relative commands,
    /// implicitly repeated commands, smooth curves and arcs (which are converted to cubic curves).
    ///
    pub fn from_svg(descriptor: &str) -> Result<Path, PathError> {
        let bez_path    = BezPath::from_svg(descriptor)?;
        let path        = Path::from(&bez_path);

        trace!("Parsed {} elements from path descriptor", path.element_count());

        Ok(path)
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(descriptor: &str) -> Result<Path, PathError> {
        Path::from_svg(descriptor)
    }
}
