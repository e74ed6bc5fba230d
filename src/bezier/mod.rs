//!
//! # Cubic bezier curves
//!
//! Every curved path element is handled as a cubic bezier curve (quadratic curves are converted
//! by degree elevation, which traces exactly the same points). This module provides the curve
//! representation along with the operations the path code is built on: evaluation, subdivision,
//! bounding boxes, flattening and intersection.
//!

mod basis;
mod subdivide;
mod curve;
mod solve;
mod bounds;
mod flatten;
mod overlaps;
mod intersection;

pub use self::basis::*;
pub use self::subdivide::*;
pub use self::curve::*;
pub use self::solve::*;
pub use self::bounds::*;
pub use self::flatten::*;
pub use self::overlaps::*;
pub use self::intersection::*;
