use super::path::*;
use super::element::*;
use super::super::coordinate::*;

use itertools::*;

///
/// How the crossings of a ray through a path are used to decide whether a point is inside it
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FillRule {
    /// A point is inside if a ray from it crosses the path an odd number of times
    EvenOdd,

    /// A point is inside if the path winds around it a non-zero number of times
    NonZero
}

impl Default for FillRule {
    fn default() -> FillRule {
        FillRule::EvenOdd
    }
}

///
/// Returns the winding contribution of an edge for a ray cast from a point in the +x direction
///
/// Edges include their lower end point but not their upper one, so a ray passing exactly through
/// a vertex is counted once, and horizontal edges never count.
///
#[inline]
fn edge_winding(point: &Coord2, from: &Coord2, to: &Coord2) -> i32 {
    if (from.1 <= point.1) == (to.1 <= point.1) {
        // Edge is entirely above or below the ray
        return 0;
    }

    // Find where the edge crosses the ray
    let t = (point.1 - from.1) / (to.1 - from.1);
    let x = from.0 + t*(to.0 - from.0);

    if x > point.0 {
        if to.1 > from.1 { 1 } else { -1 }
    } else {
        0
    }
}

impl Path {
    ///
    /// True if the specified point is inside the region filled by this path, using the even-odd rule
    ///
    pub fn contains_point(&self, point: &Coord2) -> bool {
        self.contains_point_with_rule(point, FillRule::default())
    }

    ///
    /// True if the specified point is inside the region filled by this path
    ///
    /// Only closed contours fill a region: open contours are ignored. Curves are flattened before
    /// testing, so points within `FLATTEN_TOLERANCE` of a curved edge may be misclassified. Points
    /// exactly on an edge are always classified the same way.
    ///
    pub fn contains_point_with_rule(&self, point: &Coord2, fill_rule: FillRule) -> bool {
        // Points outside the bounds can't be inside the path
        match self.bounding_box() {
            Some(bounds) if bounds.contains_point(point)    => { }
            _                                               => { return false; }
        }

        // Sum the winding number over all of the edges of the closed contours
        let winding: i32 = self.contour_views()
            .filter(|contour| contour.is_closed())
            .flat_map(|contour| PenPosition::walk(contour.elements())
                .map(|(pen, element)| element.polyline(pen.current, pen.contour_start))
                .collect::<Vec<_>>())
            .map(|polyline| polyline.iter()
                .tuple_windows()
                .map(|(from, to)| edge_winding(point, from, to))
                .sum::<i32>())
            .sum();

        match fill_rule {
            FillRule::EvenOdd   => winding % 2 != 0,
            FillRule::NonZero   => winding != 0
        }
    }
}
