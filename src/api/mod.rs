pub mod coordinate;
pub mod geographic;
pub mod rect;
pub mod tile;

pub use coordinate::FixedCoordinate;
pub use geographic::GeographicCoordinate;
pub use rect::{FixedRectangle, GeographicRectangle};
pub use tile::Tile;
