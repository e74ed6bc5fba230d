//!
//! # flo_paths
//!
//! Geometry for 2D vector paths. A `Path` is an ordered list of drawing commands (moves, lines,
//! quadratic and cubic curves and contour closes). From that list this crate derives the things
//! a vector graphics consumer needs:
//!
//! * flattened polylines for each element (`Path::element_polyline`)
//! * the open and closed contours that make up the path (`Path::contours`)
//! * the bounding box of the drawn geometry (`Path::bounds`)
//! * whether or not a point is inside the filled region (`Path::contains_point`)
//! * the points where two paths cross (`Path::intersections`)
//!
//! Paths are usually created from SVG-style descriptors or built up an element at a time:
//!
//! ```
//! # use flo_paths::*;
//! let path = Path::from_svg("M 10 5 Q 15 0 20 5 L 20 15 C 17 20 13 20 10 15 Z").unwrap();
//!
//! assert!(path.element_count() == 5);
//! assert!(path.contains_point(&Coord2(15.0, 10.0)));
//! ```
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;
extern crate serde;
extern crate roots;
#[macro_use]
extern crate itertools;
extern crate thiserror;
extern crate kurbo;

pub mod consts;
pub mod bezier;
pub mod line;
pub mod path;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::path::*;
