//!
//! # Paths
//!
//! A `Path` owns an ordered list of `PathElement`s. The submodules here add the derived views on
//! top of that list: flattened polylines, contours, bounds, point containment and intersections
//! with other paths. None of these are cached: they are recomputed from the elements each time
//! they are requested.
//!

mod error;
mod element;
mod path;
mod builder;
mod contour;
mod bounds;
mod contains;
mod intersection;
mod descriptor;

pub use self::error::*;
pub use self::element::*;
pub use self::path::*;
pub use self::builder::*;
pub use self::contour::*;
pub use self::contains::*;
