use super::error::*;
use super::element::*;
use super::super::coordinate::*;

use std::iter::FromIterator;

///
/// A 2D vector path: an ordered list of drawing elements
///
/// Paths have value semantics: cloning a path copies its elements, and two paths are equal (and
/// hash identically) when their elements are equal, however they were constructed.
///
/// Elements are only ever added to or removed from the end of a path. No normalisation is done:
/// a valid path starts with a `Move` and only ever has a `Move` after a `Close`, but it is up to
/// the caller to keep to this.
///
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Path {
    elements: Vec<PathElement>
}

impl Path {
    ///
    /// Creates a new empty path
    ///
    pub fn new() -> Path {
        Path {
            elements: vec![]
        }
    }

    ///
    /// Creates a path from a list of elements
    ///
    pub fn from_elements<ElementIter: IntoIterator<Item=PathElement>>(elements: ElementIter) -> Path {
        Path {
            elements: elements.into_iter().collect()
        }
    }

    ///
    /// Starts a new contour at the specified point
    ///
    pub fn move_to(&mut self, point: Coord2) {
        self.elements.push(PathElement::Move(point));
    }

    ///
    /// Adds a straight line from the current point
    ///
    pub fn line_to(&mut self, point: Coord2) {
        self.elements.push(PathElement::Line(point));
    }

    ///
    /// Adds a quadratic curve from the current point
    ///
    pub fn quadratic_curve_to(&mut self, control: Coord2, to: Coord2) {
        self.elements.push(PathElement::QuadraticCurve { control, to });
    }

    ///
    /// Adds a cubic curve from the current point
    ///
    pub fn cubic_curve_to(&mut self, control1: Coord2, control2: Coord2, to: Coord2) {
        self.elements.push(PathElement::CubicCurve { control1, control2, to });
    }

    ///
    /// Closes the current contour
    ///
    pub fn close(&mut self) {
        self.elements.push(PathElement::Close);
    }

    ///
    /// Appends an element to the end of this path
    ///
    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }

    ///
    /// Removes the last element from this path, returning it
    ///
    /// Removing a `Close` only removes that element: the contour it closed becomes open again.
    ///
    pub fn remove_last(&mut self) -> Result<PathElement, PathError> {
        self.elements.pop().ok_or(PathError::EmptyPath)
    }

    ///
    /// The number of elements in this path
    ///
    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    ///
    /// True if this path has no elements
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    ///
    /// The elements in this path, in order
    ///
    #[inline]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    ///
    /// Retrieves the element at the specified index
    ///
    pub fn element(&self, index: usize) -> Result<PathElement, PathError> {
        self.elements.get(index)
            .copied()
            .ok_or(PathError::IndexOutOfRange { index, count: self.elements.len() })
    }

    ///
    /// The current point: where the next element added to this path will start
    ///
    /// This is the end point of the last element, or the start of the last contour if the last
    /// element is a `Close`. Empty paths have their current point at the origin.
    ///
    pub fn current_point(&self) -> Coord2 {
        let mut pen = PenPosition::new();
        self.elements.iter().for_each(|element| pen.advance(element));

        pen.current
    }

    ///
    /// Approximates the segment drawn by the element at the specified index as a list of points
    ///
    pub fn element_polyline(&self, index: usize) -> Result<Vec<Coord2>, PathError> {
        let (pen, element) = PenPosition::walk(&self.elements)
            .nth(index)
            .ok_or(PathError::IndexOutOfRange { index, count: self.elements.len() })?;

        Ok(element.polyline(pen.current, pen.contour_start))
    }

    ///
    /// Approximates every element of this path as a list of points
    ///
    pub fn element_polylines(&self) -> Vec<Vec<Coord2>> {
        PenPosition::walk(&self.elements)
            .map(|(pen, element)| element.polyline(pen.current, pen.contour_start))
            .collect()
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<ElementIter: IntoIterator<Item=PathElement>>(iter: ElementIter) -> Path {
        Path::from_elements(iter)
    }
}

impl Extend<PathElement> for Path {
    fn extend<ElementIter: IntoIterator<Item=PathElement>>(&mut self, iter: ElementIter) {
        self.elements.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item       = &'a PathElement;
    type IntoIter   = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
