use super::line::*;
use super::super::coordinate::*;

///
/// Returns the parameters `(ua, ub)` at which the (infinite) lines through two line segments cross
///
/// Returns `None` if the lines are parallel (including when either line is a single point). The
/// segments themselves only cross if both parameters are in the range 0..=1.
///
pub fn line_intersection_params<L: Line>(line1: &L, line2: &L) -> Option<(f64, f64)> {
    let line1_points = line1.points();
    let line2_points = line2.points();

    let ((x1, y1), (x2, y2)) = (line1_points.0.coords(), line1_points.1.coords());
    let ((x3, y3), (x4, y4)) = (line2_points.0.coords(), line2_points.1.coords());

    let denominator = (y4-y3)*(x2-x1) - (x4-x3)*(y2-y1);
    if denominator == 0.0 {
        return None;
    }

    let ua = ((x4-x3)*(y1-y3) - (y4-y3)*(x1-x3)) / denominator;
    let ub = ((x2-x1)*(y1-y3) - (y2-y1)*(x1-x3)) / denominator;

    Some((ua, ub))
}

///
/// Returns the point at which two line segments intersect (if they intersect)
///
/// Segments that touch at their end points are considered to intersect. Parallel segments never
/// intersect, even when they overlap.
///
pub fn line_intersects_line<L: Line>(line1: &L, line2: &L) -> Option<Coord2> {
    let (ua, ub) = line_intersection_params(line1, line2)?;

    if ua >= 0.0 && ua <= 1.0 && ub >= 0.0 && ub <= 1.0 {
        Some(line1.point_at_pos(ua))
    } else {
        None
    }
}
