use super::basis::*;
use super::solve::*;
use super::bounds::*;
use super::subdivide::*;

use super::super::geo::*;
use super::super::coordinate::*;

///
/// Trait implemented by things that represent a cubic bezier curve
///
pub trait BezierCurve: Sized {
    ///
    /// Creates a new bezier curve from its points
    ///
    fn from_points(start: Coord2, control_points: (Coord2, Coord2), end: Coord2) -> Self;

    ///
    /// The start point of this curve
    ///
    fn start_point(&self) -> Coord2;

    ///
    /// The end point of this curve
    ///
    fn end_point(&self) -> Coord2;

    ///
    /// The control points in this curve
    ///
    fn control_points(&self) -> (Coord2, Coord2);

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Coord2 {
        let start       = self.start_point();
        let (cp1, cp2)  = self.control_points();
        let end         = self.end_point();

        Coord2(basis(t, start.0, cp1.0, cp2.0, end.0), basis(t, start.1, cp1.1, cp2.1, end.1))
    }

    ///
    /// Given a point that is on or very close to this curve, returns its t value
    ///
    fn t_for_point(&self, point: &Coord2) -> Option<f64> {
        solve_curve_for_t(self, point)
    }

    ///
    /// Subdivides this curve into two at the specified t value
    ///
    fn subdivide(&self, t: f64) -> (Self, Self) {
        let (cp1, cp2)                              = self.control_points();
        let ((a1, a2, a3, a4), (b1, b2, b3, b4))    = subdivide4(t, self.start_point(), cp1, cp2, self.end_point());

        (Self::from_points(a1, (a2, a3), a4), Self::from_points(b1, (b2, b3), b4))
    }

    ///
    /// Returns the part of this curve between two t values (`t1` should be less than or equal to `t2`)
    ///
    fn section(&self, t1: f64, t2: f64) -> Self {
        if t1 <= 0.0 && t2 >= 1.0 {
            return Self::from_points(self.start_point(), self.control_points(), self.end_point());
        }

        let (head, _) = self.subdivide(t2);

        if t2 <= 0.0 {
            head
        } else {
            head.subdivide(t1/t2).1
        }
    }

    ///
    /// Computes the bounds of this curve from its control points
    ///
    /// This is larger than (or the same as) the true bounds of the curve, but is faster to calculate.
    ///
    fn fast_bounding_box(&self) -> Bounds {
        let (cp1, cp2) = self.control_points();

        Bounds::from_min_max(self.start_point(), self.end_point())
            .including_point(cp1)
            .including_point(cp2)
    }

    ///
    /// Computes the exact bounds of this curve
    ///
    fn bounding_box(&self) -> Bounds {
        let (cp1, cp2) = self.control_points();
        bounding_box4(self.start_point(), cp1, cp2, self.end_point())
    }

    ///
    /// Returns the largest distance between one of the control points and the line between the
    /// start and end of this curve
    ///
    /// The curve never strays further from its chord than this.
    ///
    fn flatness(&self) -> f64 {
        let (cp1, cp2)  = self.control_points();
        let start       = self.start_point();
        let end         = self.end_point();

        f64::max(distance_to_chord(cp1, start, end), distance_to_chord(cp2, start, end))
    }
}

///
/// Represents a cubic bezier curve
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Curve {
    pub start_point:    Coord2,
    pub end_point:      Coord2,
    pub control_points: (Coord2, Coord2)
}

impl BezierCurve for Curve {
    #[inline]
    fn from_points(start: Coord2, (control_point1, control_point2): (Coord2, Coord2), end: Coord2) -> Curve {
        Curve {
            start_point:    start,
            end_point:      end,
            control_points: (control_point1, control_point2)
        }
    }

    #[inline]
    fn start_point(&self) -> Coord2 {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord2 {
        self.end_point
    }

    #[inline]
    fn control_points(&self) -> (Coord2, Coord2) {
        self.control_points
    }
}

impl Curve {
    ///
    /// Creates the cubic curve that traces the same points as a quadratic curve
    ///
    pub fn from_quadratic(start: Coord2, control: Coord2, end: Coord2) -> Curve {
        let cp1 = start + (control - start)*(2.0/3.0);
        let cp2 = end + (control - end)*(2.0/3.0);

        Curve::from_points(start, (cp1, cp2), end)
    }
}

///
/// Distance from a point to the line segment between `start` and `end`
///
fn distance_to_chord(point: Coord2, start: Coord2, end: Coord2) -> f64 {
    let chord           = end - start;
    let length_squared  = chord.dot(&chord);

    if length_squared == 0.0 {
        // Start and end are the same
        point.distance_to(&start)
    } else {
        // Project onto the chord, clamping to the ends
        let t = ((point - start).dot(&chord) / length_squared).max(0.0).min(1.0);
        point.distance_to(&start.lerp(&end, t))
    }
}
