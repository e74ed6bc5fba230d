use super::curve::*;
use super::super::consts::*;
use super::super::coordinate::*;

use roots::{find_roots_cubic, Roots};

/// Distance a point can be from a curve and still be considered to be on it
const CLOSE_ENOUGH: f64 = SMALL_DISTANCE * 50.0;

///
/// Finds the t values where the basis function for a single dimension of a curve evaluates to `p`
///
pub fn solve_basis_for_t(w1: f64, w2: f64, w3: f64, w4: f64, p: f64) -> Vec<f64> {
    // Coefficients of the cubic polynomial form of the basis function
    let d = w1-p;
    let c = 3.0*(w2-w1);
    let b = 3.0*(w3-w2)-c;
    let a = w4-w1-c-b;

    // Rounding leaves tiny higher order terms for curves that are really quadratics or straight lines
    let scale   = w1.abs().max(w2.abs()).max(w3.abs()).max(w4.abs()).max(1.0);
    let a       = if a.abs() < scale*1e-12 { 0.0 } else { a };
    let b       = if a == 0.0 && b.abs() < scale*1e-12 { 0.0 } else { b };

    let mut roots = match find_roots_cubic(a, b, c, d) {
        Roots::No(_)    => vec![],
        Roots::One(r)   => r.to_vec(),
        Roots::Two(r)   => r.to_vec(),
        Roots::Three(r) => r.to_vec(),
        Roots::Four(r)  => r.to_vec()
    };

    // Roots just outside the curve are clipped to its ends
    for root in roots.iter_mut() {
        if *root < 0.0 && *root > -0.001 { *root = 0.0 }
        if *root > 1.0 && *root < 1.001 { *root = 1.0 }
    }

    roots.retain(|root| *root >= 0.0 && *root <= 1.0);
    roots
}

///
/// Given a point that is close to or on a curve, finds the t value of that point
///
pub fn solve_curve_for_t<C: BezierCurve>(curve: &C, point: &Coord2) -> Option<f64> {
    let p1          = curve.start_point();
    let (p2, p3)    = curve.control_points();
    let p4          = curve.end_point();

    // The end points are exact
    if *point == p1 { return Some(0.0); }
    if *point == p4 { return Some(1.0); }

    // Solve each dimension in turn, and use the first t value that is close enough in both
    for (w1, w2, w3, w4, p) in [(p1.0, p2.0, p3.0, p4.0, point.0), (p1.1, p2.1, p3.1, p4.1, point.1)].iter().cloned() {
        for t in solve_basis_for_t(w1, w2, w3, w4, p) {
            if curve.point_at_pos(t).is_near_to(point, CLOSE_ENOUGH) {
                return Some(t);
            }
        }
    }

    None
}
