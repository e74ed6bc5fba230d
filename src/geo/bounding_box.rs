use super::rect::*;
use super::super::coordinate::*;

///
/// An axis-aligned bounding box
///
/// (Unlike a normal point tuple this always represents its bounds in minimum/maximum order)
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bounds {
    min: Coord2,
    max: Coord2
}

impl Bounds {
    ///
    /// Returns a bounding box with the specified minimum and maximum coordinates
    ///
    /// The points are reordered if necessary so that `min()` is always the smallest corner.
    ///
    #[inline]
    pub fn from_min_max(min: Coord2, max: Coord2) -> Bounds {
        Bounds {
            min: Coord2::from_smallest_components(min, max),
            max: Coord2::from_biggest_components(min, max)
        }
    }

    ///
    /// Creates the smallest bounding box containing all of the specified points
    ///
    /// Returns `None` if the iterator is empty
    ///
    pub fn bounds_for_points<PointIter: IntoIterator<Item=Coord2>>(points: PointIter) -> Option<Bounds> {
        let mut points  = points.into_iter();
        let first       = points.next()?;

        Some(points.fold(Bounds { min: first, max: first }, |bounds, point| bounds.including_point(point)))
    }

    ///
    /// Returns the minimum point of this bounding box
    ///
    #[inline]
    pub fn min(&self) -> Coord2 {
        self.min
    }

    ///
    /// Returns the maximum point of this bounding box
    ///
    #[inline]
    pub fn max(&self) -> Coord2 {
        self.max
    }

    ///
    /// The width and height of this bounding box
    ///
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.max.0 - self.min.0, self.max.1 - self.min.1)
    }

    ///
    /// Creates the union of this and another bounding box
    ///
    #[inline]
    pub fn union(self, target: Bounds) -> Bounds {
        Bounds {
            min: Coord2::from_smallest_components(self.min, target.min),
            max: Coord2::from_biggest_components(self.max, target.max)
        }
    }

    ///
    /// Extends this bounding box so that it includes the specified point
    ///
    #[inline]
    pub fn including_point(self, point: Coord2) -> Bounds {
        Bounds {
            min: Coord2::from_smallest_components(self.min, point),
            max: Coord2::from_biggest_components(self.max, point)
        }
    }

    ///
    /// True if this bounding box overlaps another one
    ///
    /// Boxes that only touch along an edge or at a corner are considered to overlap: a curve can
    /// end exactly where another one begins.
    ///
    #[inline]
    pub fn overlaps(&self, target: &Bounds) -> bool {
        self.min.0 <= target.max.0 && self.max.0 >= target.min.0
            && self.min.1 <= target.max.1 && self.max.1 >= target.min.1
    }

    ///
    /// True if the specified point is inside or on the edge of this bounding box
    ///
    #[inline]
    pub fn contains_point(&self, point: &Coord2) -> bool {
        point.0 >= self.min.0 && point.0 <= self.max.0
            && point.1 >= self.min.1 && point.1 <= self.max.1
    }

    ///
    /// The length of the diagonal of this bounding box
    ///
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.min.distance_to(&self.max)
    }

    ///
    /// Converts to an origin/size rectangle
    ///
    #[inline]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min, self.size())
    }
}
