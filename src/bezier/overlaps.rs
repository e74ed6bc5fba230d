use super::curve::*;
use super::super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

///
/// If two curves lie along each other, returns the t values where the shared section starts and ends
/// on `curve1` and on `curve2`
///
/// Each end of the shared section is the end of one of the curves, so the curves overlap when the ends
/// of each one are on the other, and the shared sections have the same control points.
///
pub fn overlapping_region<C1: BezierCurve, C2: BezierCurve>(curve1: &C1, curve2: &C2) -> Option<((f64, f64), (f64, f64))> {
    let mut c2_t1 = 0.0;
    let mut c2_t2 = 1.0;

    let c1_t1 = if let Some(t) = curve1.t_for_point(&curve2.start_point()) {
        t
    } else if let Some(t) = curve2.t_for_point(&curve1.start_point()) {
        // curve2 starts before curve1 does
        c2_t1 = t;
        0.0
    } else {
        return None;
    };

    let c1_t2 = if let Some(t) = curve1.t_for_point(&curve2.end_point()) {
        t
    } else if let Some(t) = curve2.t_for_point(&curve1.end_point()) {
        // curve2 ends after curve1 does
        c2_t2 = t;
        1.0
    } else {
        return None;
    };

    // Straight curves only need to be on the same line (their control points can be anywhere along it)
    let coefficients        = line_coefficients_2d(&(curve1.start_point(), curve1.end_point()));
    let (c1_cp1, c1_cp2)    = curve1.control_points();
    let (c2_cp1, c2_cp2)    = curve2.control_points();

    let is_straight         = coefficients != (0.0, 0.0, 0.0)
        && [c1_cp1, c1_cp2, curve2.start_point(), curve2.end_point(), c2_cp1, c2_cp2].iter().all(|point| is_on_line(point, coefficients));

    if is_straight {
        return Some(((c1_t1, c1_t2), (c2_t1, c2_t2)));
    }

    // Otherwise the two shared sections must match
    let (c1_cp1, c1_cp2) = section_control_points(curve1, c1_t1, c1_t2);
    let (c2_cp1, c2_cp2) = section_control_points(curve2, c2_t1, c2_t2);

    if c1_cp1.is_near_to(&c2_cp1, SMALL_DISTANCE) && c1_cp2.is_near_to(&c2_cp2, SMALL_DISTANCE) {
        Some(((c1_t1, c1_t2), (c2_t1, c2_t2)))
    } else {
        None
    }
}

#[inline]
fn is_on_line(point: &Coord2, (a, b, c): (f64, f64, f64)) -> bool {
    (a*point.0 + b*point.1 + c).abs() < SMALL_DISTANCE
}

///
/// The control points of the section of a curve running from `t1` to `t2` (which runs backwards if `t2` is before `t1`)
///
fn section_control_points<C: BezierCurve>(curve: &C, t1: f64, t2: f64) -> (Coord2, Coord2) {
    if t2 < t1 {
        let (cp2, cp1) = curve.section(t2, t1).control_points();
        (cp1, cp2)
    } else {
        curve.section(t1, t2).control_points()
    }
}
