use super::line::*;

///
/// Computes the coefficients of the equation ax+by+c=0 for a line, normalised so that a^2+b^2 = 1
///
/// With these coefficients, `a*x + b*y + c` is the signed distance of a point from the line. A line
/// whose start and end points are the same has the coefficients (0, 0, 0).
///
pub fn line_coefficients_2d<L: Line>(line: &L) -> (f64, f64, f64) {
    let (from, to)  = line.points();
    let offset      = to - from;

    if offset.0 == 0.0 && offset.1 == 0.0 {
        return (0.0, 0.0, 0.0);
    }

    // The normal to the line, scaled to unit length
    let length      = offset.magnitude();
    let (a, b)      = (-offset.1/length, offset.0/length);
    let c           = -(a*from.0 + b*from.1);

    (a, b, c)
}
