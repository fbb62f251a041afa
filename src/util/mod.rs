pub mod coord;
pub mod error;
pub mod feature;

pub use coord::Coordinate;
pub use error::RangeError;
pub use feature::{point_feature, polygon_feature};
