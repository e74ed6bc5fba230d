use super::super::coordinate::*;

///
/// Represents a straight line
///
pub trait Line {
    ///
    /// Creates a new line from points
    ///
    fn from_points(p1: Coord2, p2: Coord2) -> Self;

    ///
    /// Returns the two points that mark the start and end of this line
    ///
    fn points(&self) -> (Coord2, Coord2);

    ///
    /// Given a value from 0 to 1, finds the point that far along the line
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Coord2 {
        let (from, to) = self.points();
        from.lerp(&to, t)
    }

    ///
    /// True if the start and end of this line are the same point
    ///
    #[inline]
    fn is_point(&self) -> bool {
        let (from, to) = self.points();
        from == to
    }
}

///
/// Simplest line is just a tuple of two points
///
impl Line for (Coord2, Coord2) {
    #[inline]
    fn from_points(p1: Coord2, p2: Coord2) -> Self {
        (p1, p2)
    }

    #[inline]
    fn points(&self) -> (Coord2, Coord2) {
        *self
    }
}
