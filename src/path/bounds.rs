use super::path::*;
use super::element::*;
use super::super::geo::*;

impl Path {
    ///
    /// The bounding box of everything drawn by this path, or None if the path draws nothing
    ///
    /// Curves are bounded by their extremities rather than their control points, so this is
    /// the tightest box that covers the path.
    ///
    pub fn bounding_box(&self) -> Option<Bounds> {
        PenPosition::walk(self.elements())
            .filter_map(|(pen, element)| element.bounding_box(pen.current, pen.contour_start))
            .reduce(|bounds, element_bounds| bounds.union(element_bounds))
    }

    ///
    /// The smallest rectangle covering everything drawn by this path
    ///
    /// Paths that draw nothing (including empty paths) have the empty rectangle at the origin as
    /// their bounds.
    ///
    pub fn bounds(&self) -> Rect {
        self.bounding_box()
            .map(|bounds| bounds.to_rect())
            .unwrap_or_else(Rect::empty)
    }
}
