//!
//! # Basic geometric definitions
//!
//! `Bounds` is the axis-aligned bounding box used internally when working out the extent of
//! curves and when pruning intersection searches. `Rect` and `Size` are the origin/size form
//! that `Path::bounds()` reports.
//!

mod bounding_box;
mod rect;

pub use self::bounding_box::*;
pub use self::rect::*;
