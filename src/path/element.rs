use super::super::geo::*;
use super::super::bezier::*;
use super::super::consts::*;
use super::super::coordinate::*;

///
/// A single drawing command in a path
///
/// Every element apart from `Close` carries the point that becomes the new current point.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PathElement {
    /// Starts a new contour at the specified point
    Move(Coord2),

    /// Straight line from the current point
    Line(Coord2),

    /// Quadratic bezier curve from the current point
    QuadraticCurve { control: Coord2, to: Coord2 },

    /// Cubic bezier curve from the current point
    CubicCurve { control1: Coord2, control2: Coord2, to: Coord2 },

    /// Draws a line back to the start of the current contour and ends it
    Close
}

impl PathElement {
    ///
    /// The point this element moves the pen to, or None for `Close` elements (which return to the start of the contour)
    ///
    #[inline]
    pub fn end_point(&self) -> Option<Coord2> {
        match self {
            PathElement::Move(to)                       => Some(*to),
            PathElement::Line(to)                       => Some(*to),
            PathElement::QuadraticCurve { to, .. }      => Some(*to),
            PathElement::CubicCurve { to, .. }          => Some(*to),
            PathElement::Close                          => None
        }
    }

    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, PathElement::Move(_))
    }

    #[inline]
    pub fn is_close(&self) -> bool {
        matches!(self, PathElement::Close)
    }

    ///
    /// For curve elements, the cubic bezier curve drawn from the previous point
    ///
    /// Quadratic curves are converted to the equivalent cubic curve.
    ///
    pub fn to_curve(&self, previous: Coord2) -> Option<Curve> {
        match self {
            PathElement::QuadraticCurve { control, to }             => Some(Curve::from_quadratic(previous, *control, *to)),
            PathElement::CubicCurve { control1, control2, to }      => Some(Curve::from_points(previous, (*control1, *control2), *to)),
            _                                                       => None
        }
    }

    ///
    /// Approximates the segment drawn by this element as a list of points
    ///
    /// `previous` is the current point before this element, and `contour_start` is the point
    /// that the contour this element belongs to started at. Moves draw nothing so produce an
    /// empty list, lines and closes produce exactly their two end points and curves are
    /// flattened to within `FLATTEN_TOLERANCE`.
    ///
    pub fn polyline(&self, previous: Coord2, contour_start: Coord2) -> Vec<Coord2> {
        match self {
            PathElement::Move(_)    => vec![],
            PathElement::Line(to)   => vec![previous, *to],
            PathElement::Close      => vec![previous, contour_start],

            PathElement::QuadraticCurve { .. } | PathElement::CubicCurve { .. } => {
                match self.to_curve(previous) {
                    Some(curve) => flatten_curve(&curve, FLATTEN_TOLERANCE, MAX_FLATTEN_DEPTH),
                    None        => vec![]
                }
            }
        }
    }

    ///
    /// The bounds of the segment drawn by this element (None for moves, which draw nothing)
    ///
    pub fn bounding_box(&self, previous: Coord2, contour_start: Coord2) -> Option<Bounds> {
        match self {
            PathElement::Move(_)    => None,
            PathElement::Line(to)   => Some(Bounds::from_min_max(previous, *to)),
            PathElement::Close      => Some(Bounds::from_min_max(previous, contour_start)),

            PathElement::QuadraticCurve { .. } | PathElement::CubicCurve { .. } => {
                self.to_curve(previous).map(|curve| curve.bounding_box())
            }
        }
    }
}

///
/// Tracks the current point and the start of the current contour while walking through the elements of a path
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) struct PenPosition {
    /// The current point
    pub current: Coord2,

    /// The point where the current contour started
    pub contour_start: Coord2
}

impl PenPosition {
    ///
    /// The pen position before any elements have been drawn
    ///
    #[inline]
    pub fn new() -> PenPosition {
        PenPosition {
            current:        Coord2::origin(),
            contour_start:  Coord2::origin()
        }
    }

    ///
    /// Updates the pen position after an element has been drawn
    ///
    #[inline]
    pub fn advance(&mut self, element: &PathElement) {
        match element {
            PathElement::Move(to)   => { self.current = *to; self.contour_start = *to; }
            PathElement::Close      => { self.current = self.contour_start; }
            other                   => { if let Some(to) = other.end_point() { self.current = to; } }
        }
    }

    ///
    /// Iterates over a list of elements, returning each element along with the pen position just before it is drawn
    ///
    pub fn walk<'a>(elements: &'a [PathElement]) -> impl 'a+Iterator<Item=(PenPosition, &'a PathElement)> {
        elements.iter()
            .scan(PenPosition::new(), |pen, element| {
                let before = *pen;
                pen.advance(element);

                Some((before, element))
            })
    }
}
