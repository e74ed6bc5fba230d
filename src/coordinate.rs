use std::ops::*;
use std::hash::{Hash, Hasher};

///
/// Represents a coordinate with a 2D position
///
pub trait Coordinate2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    ///
    /// Returns the position of this coordinate as a tuple
    ///
    #[inline]
    fn coords(&self) -> (f64, f64) {
        (self.x(), self.y())
    }
}

///
/// Represents a 2D point
///
/// Coordinates are compared numerically. They are expected to be finite: a coordinate containing
/// a NaN is never equal to anything, including itself.
///
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Coord2(pub f64, pub f64);

impl Coordinate2D for Coord2 {
    ///
    /// X component of this coordinate
    ///
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    ///
    /// Y component of this coordinate
    ///
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coord2 {
    ///
    /// Returns the origin coordinate
    ///
    #[inline]
    pub fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    ///
    /// Returns a point made up of the biggest components of the two points
    ///
    #[inline]
    pub fn from_biggest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::max(p1.0, p2.0), f64::max(p1.1, p2.1))
    }

    ///
    /// Returns a point made up of the smallest components of the two points
    ///
    #[inline]
    pub fn from_smallest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::min(p1.0, p2.0), f64::min(p1.1, p2.1))
    }

    ///
    /// Computes the dot product for this vector along with another vector
    ///
    #[inline]
    pub fn dot(&self, target: &Coord2) -> f64 {
        self.0*target.0 + self.1*target.1
    }

    ///
    /// Computes the magnitude of this vector
    ///
    #[inline]
    pub fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }

    ///
    /// Computes the distance between this coordinate and another
    ///
    #[inline]
    pub fn distance_to(&self, target: &Coord2) -> f64 {
        let dist_x = target.0-self.0;
        let dist_y = target.1-self.1;

        f64::sqrt(dist_x*dist_x + dist_y*dist_y)
    }

    ///
    /// True if this point is within `max_distance` of another point
    ///
    #[inline]
    pub fn is_near_to(&self, target: &Coord2, max_distance: f64) -> bool {
        let offset = *self - *target;

        offset.dot(&offset) <= max_distance*max_distance
    }

    ///
    /// Returns the point a fraction `t` of the way from this point to another
    ///
    #[inline]
    pub fn lerp(&self, target: &Coord2, t: f64) -> Coord2 {
        *self + (*target - *self)*t
    }
}

impl Add<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}

impl Eq for Coord2 { }

impl Hash for Coord2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0, so both need to hash to the same value
        let x = if self.0 == 0.0 { 0.0f64 } else { self.0 };
        let y = if self.1 == 0.0 { 0.0f64 } else { self.1 };

        x.to_bits().hash(state);
        y.to_bits().hash(state);
    }
}
