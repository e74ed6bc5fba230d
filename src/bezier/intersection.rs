use super::curve::*;
use super::overlaps::*;
use super::super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

/// Amount a chord intersection may lie beyond the end of a chord and still be counted (so crossings exactly at a join between two sections are not lost to rounding)
const CHORD_SLOP: f64 = 1e-9;

///
/// Finds the points where two curves intersect, using bounding box subdivision
///
/// Both curves are halved repeatedly while their bounding boxes overlap. Once a section is smaller
/// than `accuracy` (or `MAX_INTERSECTION_DEPTH` is reached) it is treated as a straight line.
///
/// Curves that lie along each other meet at every point of the shared section: only the two ends of
/// that section are reported for them.
///
/// Each intersection is passed to `visit`, which returns `false` to stop the search. The return
/// value is `false` if the search was stopped this way. Sections that are next to each other can
/// report the same intersection more than once, so callers will usually want to filter out points
/// that are very close together.
///
pub fn curve_intersects_curve<C: BezierCurve, Visit: FnMut(Coord2) -> bool>(curve1: &C, curve2: &C, accuracy: f64, visit: &mut Visit) -> bool {
    if let Some(((t1, t2), _)) = overlapping_region(curve1, curve2) {
        let start   = curve1.point_at_pos(t1);
        let end     = curve1.point_at_pos(t2);

        // Curves that only touch at an end point can still cross somewhere else
        if !start.is_near_to(&end, SMALL_DISTANCE) {
            trace!("Curves overlap between t={} and t={}", t1, t2);
            return visit(start) && visit(end);
        }
    }

    subdivide_intersections(curve1, curve2, accuracy, 0, visit)
}

///
/// Intersects two curve sections, subdividing them if necessary
///
fn subdivide_intersections<C: BezierCurve, Visit: FnMut(Coord2) -> bool>(curve1: &C, curve2: &C, accuracy: f64, depth: u32, visit: &mut Visit) -> bool {
    let bounds1 = curve1.fast_bounding_box();
    let bounds2 = curve2.fast_bounding_box();

    if !bounds1.overlaps(&bounds2) {
        // No intersections are possible
        return true;
    }

    let small1 = bounds1.diagonal() <= accuracy;
    let small2 = bounds2.diagonal() <= accuracy;

    if (small1 && small2) || depth >= MAX_INTERSECTION_DEPTH {
        // Sections this small are treated as straight lines
        if depth >= MAX_INTERSECTION_DEPTH {
            trace!("Curve intersection reached maximum depth ({}, {})", bounds1.diagonal(), bounds2.diagonal());
        }

        match chord_intersection(curve1, curve2) {
            Some(point) => visit(point),
            None        => true
        }
    } else if small1 {
        // Only the second curve needs to get smaller
        let (curve2a, curve2b) = curve2.subdivide(0.5);

        subdivide_intersections(curve1, &curve2a, accuracy, depth+1, visit)
            && subdivide_intersections(curve1, &curve2b, accuracy, depth+1, visit)
    } else if small2 {
        // Only the first curve needs to get smaller
        let (curve1a, curve1b) = curve1.subdivide(0.5);

        subdivide_intersections(&curve1a, curve2, accuracy, depth+1, visit)
            && subdivide_intersections(&curve1b, curve2, accuracy, depth+1, visit)
    } else {
        // Both curves are still too big
        let (curve1a, curve1b) = curve1.subdivide(0.5);
        let (curve2a, curve2b) = curve2.subdivide(0.5);

        subdivide_intersections(&curve1a, &curve2a, accuracy, depth+1, visit)
            && subdivide_intersections(&curve1a, &curve2b, accuracy, depth+1, visit)
            && subdivide_intersections(&curve1b, &curve2a, accuracy, depth+1, visit)
            && subdivide_intersections(&curve1b, &curve2b, accuracy, depth+1, visit)
    }
}

///
/// Intersects the lines between the start and end points of two curves
///
fn chord_intersection<C: BezierCurve>(curve1: &C, curve2: &C) -> Option<Coord2> {
    let chord1 = (curve1.start_point(), curve1.end_point());
    let chord2 = (curve2.start_point(), curve2.end_point());

    let in_range = |t: f64| t >= -CHORD_SLOP && t <= 1.0+CHORD_SLOP;

    match line_intersection_params(&chord1, &chord2) {
        Some((ua, ub)) if in_range(ua) && in_range(ub) => Some(chord1.point_at_pos(ua.max(0.0).min(1.0))),
        Some(_)                                         => None,

        None => {
            // Chords are parallel or single points: sections this small that still overlap are
            // either touching at an end point or lying along each other
            if chord1.is_point() && chord2.is_point() && chord1.0.is_near_to(&chord2.0, SMALL_DISTANCE) {
                Some(chord1.0)
            } else {
                None
            }
        }
    }
}
