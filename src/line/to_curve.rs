use super::line::*;
use super::super::bezier::*;

///
/// Changes a line to a bezier curve
///
/// The control points are placed a third of the way along the line, so the curve traces exactly
/// the same points as the line at the same `t` values.
///
pub fn line_to_bezier<L: Line, Curve: BezierCurve>(line: &L) -> Curve {
    let (start, end)    = line.points();
    let offset          = end - start;
    let (cp1, cp2)      = (start + offset*(1.0/3.0), start + offset*(2.0/3.0));

    Curve::from_points(start, (cp1, cp2), end)
}
