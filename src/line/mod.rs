mod line;
mod to_curve;
mod coefficients;
mod intersection;

pub use self::line::*;
pub use self::to_curve::*;
pub use self::coefficients::*;
pub use self::intersection::*;
