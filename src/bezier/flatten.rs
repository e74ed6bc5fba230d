use super::curve::*;
use super::super::coordinate::*;

///
/// Approximates a curve with a series of straight lines
///
/// The curve is halved repeatedly until each section is within `tolerance` of its chord (or
/// `max_depth` halvings have been made). The result starts exactly at the start point of the
/// curve and ends exactly at its end point. The curve is always split at least once, so there
/// are always at least three points in the result.
///
pub fn flatten_curve<C: BezierCurve>(curve: &C, tolerance: f64, max_depth: u32) -> Vec<Coord2> {
    let mut points = vec![curve.start_point()];

    let (left, right) = curve.subdivide(0.5);
    flatten_section(&left, tolerance, 1, max_depth, &mut points);
    flatten_section(&right, tolerance, 1, max_depth, &mut points);

    trace!("Flattened curve from {:?} to {:?} into {} points", curve.start_point(), curve.end_point(), points.len());

    points
}

///
/// Adds the points for a section of a curve (excluding its start point)
///
fn flatten_section<C: BezierCurve>(curve: &C, tolerance: f64, depth: u32, max_depth: u32, points: &mut Vec<Coord2>) {
    if depth >= max_depth || curve.flatness() <= tolerance {
        points.push(curve.end_point());
    } else {
        let (left, right) = curve.subdivide(0.5);

        flatten_section(&left, tolerance, depth+1, max_depth, points);
        flatten_section(&right, tolerance, depth+1, max_depth, points);
    }
}
