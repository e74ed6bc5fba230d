use super::path::*;
use super::element::*;
use super::super::geo::*;
use super::super::line::*;
use super::super::bezier::*;
use super::super::consts::*;
use super::super::coordinate::*;

use std::collections::HashMap;

///
/// A segment drawn by a path element
///
#[derive(Copy, Clone, Debug)]
enum Segment {
    Line(Coord2, Coord2),
    Curve(Curve)
}

impl Segment {
    ///
    /// A box containing the whole segment
    ///
    fn bounds(&self) -> Bounds {
        match self {
            Segment::Line(from, to) => Bounds::from_min_max(*from, *to),
            Segment::Curve(curve)   => curve.fast_bounding_box()
        }
    }

    ///
    /// The segment as a cubic bezier curve
    ///
    fn to_curve(&self) -> Curve {
        match self {
            Segment::Line(from, to) => line_to_bezier(&(*from, *to)),
            Segment::Curve(curve)   => *curve
        }
    }
}

///
/// Returns the segments drawn by a path, in element order
///
fn path_segments(path: &Path) -> Vec<Segment> {
    PenPosition::walk(path.elements())
        .filter_map(|(pen, element)| {
            match element {
                PathElement::Move(_)    => None,
                PathElement::Line(to)   => Some(Segment::Line(pen.current, *to)),
                PathElement::Close      => Some(Segment::Line(pen.current, pen.contour_start)),
                curve                   => curve.to_curve(pen.current).map(Segment::Curve)
            }
        })
        .collect()
}

///
/// Finds the intersections between two segments, returning false if the visitor asked to stop
///
fn segment_intersections<Visit: FnMut(Coord2) -> bool>(segment1: &Segment, segment2: &Segment, visit: &mut Visit) -> bool {
    match (segment1, segment2) {
        (Segment::Line(from1, to1), Segment::Line(from2, to2)) => {
            let line1 = (*from1, *to1);
            let line2 = (*from2, *to2);

            if let Some(point) = line_intersects_line(&line1, &line2) {
                visit(point)
            } else if line_intersection_params(&line1, &line2).is_none() {
                // Parallel lines only meet where they lie along each other
                match overlapping_region(&segment1.to_curve(), &segment2.to_curve()) {
                    Some(((t1, t2), _)) => visit(line1.point_at_pos(t1)) && visit(line1.point_at_pos(t2)),
                    None                => true
                }
            } else {
                true
            }
        }

        _ => curve_intersects_curve(&segment1.to_curve(), &segment2.to_curve(), INTERSECTION_ACCURACY, visit)
    }
}

///
/// The points found by an intersection search, grouped into cells `CLOSE_DISTANCE` across
///
struct FoundPoints {
    cells: HashMap<(i64, i64), Vec<Coord2>>
}

impl FoundPoints {
    fn new() -> FoundPoints {
        FoundPoints { cells: HashMap::new() }
    }

    #[inline]
    fn cell(point: &Coord2) -> (i64, i64) {
        ((point.0 / CLOSE_DISTANCE).floor() as i64, (point.1 / CLOSE_DISTANCE).floor() as i64)
    }

    ///
    /// Adds a point, returning false if a point within `CLOSE_DISTANCE` of it was already found
    ///
    fn insert(&mut self, point: Coord2) -> bool {
        // Any point close enough to this one is in the same cell or one of its neighbours
        let (x, y)      = Self::cell(&point);
        let is_found    = iproduct!(x.saturating_sub(1)..=x.saturating_add(1), y.saturating_sub(1)..=y.saturating_add(1))
            .filter_map(|cell| self.cells.get(&cell))
            .any(|points| points.iter().any(|existing| existing.is_near_to(&point, CLOSE_DISTANCE)));

        if !is_found {
            self.cells.entry((x, y)).or_insert_with(Vec::new).push(point);
        }

        !is_found
    }
}

impl Path {
    ///
    /// Finds the points where the segments drawn by this path cross the segments drawn by another path
    ///
    /// `visit` is called with each intersection point, and returns `true` to carry on searching or
    /// `false` to stop. Once it returns `false` no further intersections are calculated. The points
    /// are found in the same order each time for the same pair of paths, and points within
    /// `CLOSE_DISTANCE` of one that has already been found are not reported again. Where the paths
    /// share part of a segment, only the ends of the shared part are reported.
    ///
    pub fn intersections<Visit: FnMut(Coord2) -> bool>(&self, other: &Path, mut visit: Visit) {
        let segments1   = path_segments(self);
        let segments2   = path_segments(other);

        let mut found   = FoundPoints::new();
        let mut report  = |point: Coord2| {
            if found.insert(point) {
                visit(point)
            } else {
                // Already reported (usually because the point is where two segments join)
                true
            }
        };

        for segment1 in segments1.iter() {
            let bounds1 = segment1.bounds();

            for segment2 in segments2.iter() {
                if !bounds1.overlaps(&segment2.bounds()) {
                    continue;
                }

                if !segment_intersections(segment1, segment2, &mut report) {
                    debug!("Intersection search stopped by visitor");
                    return;
                }
            }
        }
    }

    ///
    /// True if any segment drawn by this path crosses a segment drawn by another path
    ///
    pub fn intersects(&self, other: &Path) -> bool {
        let mut intersects = false;

        self.intersections(other, |_point| {
            intersects = true;
            false
        });

        intersects
    }

    ///
    /// Returns all of the points where this path crosses another path
    ///
    pub fn intersection_points(&self, other: &Path) -> Vec<Coord2> {
        let mut points = vec![];

        self.intersections(other, |point| {
            points.push(point);
            true
        });

        points
    }
}
