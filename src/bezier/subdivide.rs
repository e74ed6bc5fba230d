use super::super::coordinate::*;

///
/// Subdivides a cubic bezier curve at a particular point, returning the weights of
/// the two component curves
///
/// The first curve always starts at exactly `w1` and the second always ends at exactly `w4`.
///
pub fn subdivide4(t: f64, w1: Coord2, w2: Coord2, w3: Coord2, w4: Coord2) ->
    ((Coord2, Coord2, Coord2, Coord2),
    (Coord2, Coord2, Coord2, Coord2)) {
    // Weights (from de casteljau)
    let wn1 = w1.lerp(&w2, t);
    let wn2 = w2.lerp(&w3, t);
    let wn3 = w3.lerp(&w4, t);

    // Further refine the weights
    let wnn1 = wn1.lerp(&wn2, t);
    let wnn2 = wn2.lerp(&wn3, t);

    // Get the point at which the two curves join
    let p = wnn1.lerp(&wnn2, t);

    // Curves are built from the weight calculations and the final points
    ((w1, wn1, wnn1, p), (p, wnn2, wn3, w4))
}
