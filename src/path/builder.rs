use super::path::*;
use super::element::*;
use super::super::coordinate::*;

///
/// Used to build a path one contour at a time
///
/// ```
/// # use flo_paths::*;
/// let square = PathBuilder::start(Coord2(1.0, 1.0))
///     .line_to(Coord2(5.0, 1.0))
///     .line_to(Coord2(5.0, 5.0))
///     .line_to(Coord2(1.0, 5.0))
///     .close()
///     .build();
///
/// assert!(square.element_count() == 5);
/// ```
///
pub struct PathBuilder {
    /// The elements in the path
    elements: Vec<PathElement>
}

impl PathBuilder {
    ///
    /// Creates a new path builder with a contour starting at the specified point
    ///
    pub fn start(start: Coord2) -> PathBuilder {
        PathBuilder {
            elements: vec![PathElement::Move(start)]
        }
    }

    ///
    /// Builds the path for this builder
    ///
    pub fn build(self) -> Path {
        Path::from_elements(self.elements)
    }

    ///
    /// Starts a new contour
    ///
    pub fn move_to(mut self, point: Coord2) -> Self {
        self.elements.push(PathElement::Move(point));
        self
    }

    ///
    /// Adds a line to the specified point
    ///
    pub fn line_to(mut self, point: Coord2) -> Self {
        self.elements.push(PathElement::Line(point));
        self
    }

    ///
    /// Adds a quadratic curve to a particular point
    ///
    pub fn quadratic_curve_to(mut self, control: Coord2, to: Coord2) -> Self {
        self.elements.push(PathElement::QuadraticCurve { control, to });
        self
    }

    ///
    /// Adds a cubic curve to a particular point
    ///
    pub fn cubic_curve_to(mut self, (control1, control2): (Coord2, Coord2), to: Coord2) -> Self {
        self.elements.push(PathElement::CubicCurve { control1, control2, to });
        self
    }

    ///
    /// Closes the current contour
    ///
    pub fn close(mut self) -> Self {
        self.elements.push(PathElement::Close);
        self
    }
}
