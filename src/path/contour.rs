use super::path::*;
use super::error::*;
use super::element::*;

use std::ops::Range;

///
/// The range of elements that make up a single contour in a path
///
/// `start` is the index of the `Move` that begins the contour and `end` is one past its last
/// element. A contour is closed if its last element is a `Close`, otherwise it is open.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ContourRange {
    pub start:      usize,
    pub end:        usize,
    pub is_closed:  bool
}

impl ContourRange {
    #[inline]
    pub fn is_open(&self) -> bool {
        !self.is_closed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

///
/// A contour within a path, borrowed from the path's elements
///
#[derive(Copy, Clone, Debug)]
pub struct Contour<'a> {
    range:      ContourRange,
    elements:   &'a [PathElement]
}

impl<'a> Contour<'a> {
    ///
    /// Where this contour is in the path it was taken from
    ///
    #[inline]
    pub fn range(&self) -> ContourRange {
        self.range
    }

    ///
    /// The elements that make up this contour
    ///
    #[inline]
    pub fn elements(&self) -> &'a [PathElement] {
        self.elements
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.range.is_closed
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.range.is_open()
    }

    ///
    /// Copies this contour into a path of its own
    ///
    pub fn to_path(&self) -> Path {
        Path::from_elements(self.elements.iter().copied())
    }
}

///
/// Finds the end of the contour that begins at `start`, scanning forward from `from`
///
/// The contour ends just before the next `Move`, or just after the first `Close`.
///
fn contour_end(elements: &[PathElement], start: usize, from: usize) -> ContourRange {
    for idx in from..elements.len() {
        match elements[idx] {
            PathElement::Move(_) if idx > start => return ContourRange { start, end: idx, is_closed: false },
            PathElement::Close                  => return ContourRange { start, end: idx+1, is_closed: true },
            _                                   => { }
        }
    }

    ContourRange { start, end: elements.len(), is_closed: false }
}

impl Path {
    ///
    /// Finds the range of the contour containing the element at the specified index
    ///
    pub fn contour_range(&self, index: usize) -> Result<ContourRange, PathError> {
        let elements = self.elements();
        if index >= elements.len() {
            return Err(PathError::IndexOutOfRange { index, count: elements.len() });
        }

        // The contour starts at the last move at or before the index, or just after an earlier close
        let last_move   = elements[..=index].iter()
            .rposition(|element| element.is_move())
            .unwrap_or(0);
        let after_close = elements[..index].iter()
            .rposition(|element| element.is_close())
            .map(|close_index| close_index+1)
            .unwrap_or(0);
        let start       = usize::max(last_move, after_close);

        Ok(contour_end(elements, start, index))
    }

    ///
    /// Returns whether or not the contour containing the element at the specified index is open, along with its start and end indexes
    ///
    pub fn contour_is_open(&self, index: usize) -> Result<(bool, usize, usize), PathError> {
        let range = self.contour_range(index)?;
        Ok((range.is_open(), range.start, range.end))
    }

    ///
    /// Returns whether or not the contour containing the element at the specified index is closed, along with its start and end indexes
    ///
    pub fn contour_is_closed(&self, index: usize) -> Result<(bool, usize, usize), PathError> {
        let range = self.contour_range(index)?;
        Ok((range.is_closed, range.start, range.end))
    }

    ///
    /// The ranges of all of the contours in this path, in order
    ///
    /// These cover every element in the path with no gaps or overlaps.
    ///
    pub fn contour_ranges(&self) -> Vec<ContourRange> {
        let elements    = self.elements();
        let mut ranges  = vec![];
        let mut start   = 0;

        while start < elements.len() {
            let range = contour_end(elements, start, start);
            start = range.end;

            ranges.push(range);
        }

        ranges
    }

    ///
    /// Borrows each of the contours in this path
    ///
    pub fn contour_views<'a>(&'a self) -> impl 'a+Iterator<Item=Contour<'a>> {
        let elements = self.elements();

        self.contour_ranges()
            .into_iter()
            .map(move |range| Contour { range, elements: &elements[range.as_range()] })
    }

    ///
    /// Copies every contour in this path into a path of its own
    ///
    pub fn contours(&self) -> Vec<Path> {
        self.contour_views().map(|contour| contour.to_path()).collect()
    }

    ///
    /// Copies the open contours in this path
    ///
    pub fn open_contours(&self) -> Vec<Path> {
        self.contour_views()
            .filter(|contour| contour.is_open())
            .map(|contour| contour.to_path())
            .collect()
    }

    ///
    /// Copies the closed contours in this path
    ///
    pub fn closed_contours(&self) -> Vec<Path> {
        self.contour_views()
            .filter(|contour| contour.is_closed())
            .map(|contour| contour.to_path())
            .collect()
    }

    ///
    /// A single path made up of all of the open contours in this path
    ///
    pub fn open_contour_path(&self) -> Path {
        self.contour_views()
            .filter(|contour| contour.is_open())
            .flat_map(|contour| contour.elements().iter().copied())
            .collect()
    }

    ///
    /// A single path made up of all of the closed contours in this path
    ///
    pub fn closed_contour_path(&self) -> Path {
        self.contour_views()
            .filter(|contour| contour.is_closed())
            .flat_map(|contour| contour.elements().iter().copied())
            .collect()
    }
}
