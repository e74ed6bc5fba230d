/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Length we consider a 'close' distance (intersections closer than this are reported as a single point)
pub const CLOSE_DISTANCE: f64 = 0.01;

/// Maximum distance a control point may be from the chord before a curve section is considered to need subdividing when flattening
pub const FLATTEN_TOLERANCE: f64 = 0.01;

/// Maximum number of times a curve is halved while flattening (so a curve produces at most 2^16 line segments)
pub const MAX_FLATTEN_DEPTH: u32 = 16;

/// Size of the bounding box at which a curve section is treated as a straight line when searching for intersections
pub const INTERSECTION_ACCURACY: f64 = 0.01;

/// Maximum number of times a curve is halved while searching for intersections
pub const MAX_INTERSECTION_DEPTH: u32 = 24;
