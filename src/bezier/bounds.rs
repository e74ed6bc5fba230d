use super::basis::*;
use super::super::geo::*;
use super::super::coordinate::*;

use roots::{find_roots_quadratic, Roots};

///
/// Finds the t values of the extremities of a curve (these are the points at which
/// the x or y value is at a minimum or maximum)
///
/// The end points are not included: only values strictly between 0 and 1 are returned.
///
pub fn find_extremities(w1: Coord2, w2: Coord2, w3: Coord2, w4: Coord2) -> Vec<f64> {
    let mut t_extremes = vec![];

    // The derivative is a quadratic function, so the extremities are the roots of that
    for (p1, p2, p3, p4) in [(w1.0, w2.0, w3.0, w4.0), (w1.1, w2.1, w3.1, w4.1)].iter().cloned() {
        // Coefficients of the derivative (divided by 3)
        let a = -p1 + p2*3.0 - p3*3.0 + p4;
        let b = (p1 - p2*2.0 + p3)*2.0;
        let c = p2 - p1;

        // Degree-elevated quadratic curves leave a leading coefficient that is only zero up to rounding
        let a = if a.abs() < 1e-12 { 0.0 } else { a };

        let roots = match find_roots_quadratic(a, b, c) {
            Roots::No(_)    => vec![],
            Roots::One(r)   => r.to_vec(),
            Roots::Two(r)   => r.to_vec(),
            Roots::Three(r) => r.to_vec(),
            Roots::Four(r)  => r.to_vec()
        };

        t_extremes.extend(roots.into_iter().filter(|t| *t > 0.0 && *t < 1.0));
    }

    t_extremes
}

///
/// Finds the upper and lower points in a cubic curve's bounding box
///
pub fn bounding_box4(w1: Coord2, w2: Coord2, w3: Coord2, w4: Coord2) -> Bounds {
    // The 't' values where this curve has extremities we need to examine
    let t_extremes = find_extremities(w1, w2, w3, w4);

    // The end points are always part of the bounds
    t_extremes.into_iter()
        .map(|t| Coord2(basis(t, w1.0, w2.0, w3.0, w4.0), basis(t, w1.1, w2.1, w3.1, w4.1)))
        .fold(Bounds::from_min_max(w1, w4), |bounds, point| bounds.including_point(point))
}
