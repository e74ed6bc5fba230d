use super::super::coordinate::*;

///
/// The width and height of a rectangle
///
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Size {
    pub width:  f64,
    pub height: f64
}

///
/// A rectangle, described by its origin (the corner with the smallest coordinates) and size
///
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Coord2,
    pub size:   Size
}

impl Size {
    #[inline]
    pub fn new(width: f64, height: f64) -> Size {
        Size { width, height }
    }
}

impl Rect {
    #[inline]
    pub fn new(origin: Coord2, size: Size) -> Rect {
        Rect { origin, size }
    }

    ///
    /// The rectangle reported for paths that draw nothing: zero size, at the origin
    ///
    #[inline]
    pub fn empty() -> Rect {
        Rect::new(Coord2::origin(), Size::new(0.0, 0.0))
    }

    ///
    /// True if this rectangle has no area
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    ///
    /// The corner opposite the origin
    ///
    #[inline]
    pub fn max(&self) -> Coord2 {
        Coord2(self.origin.0 + self.size.width, self.origin.1 + self.size.height)
    }
}
